/// Layout module — turns a size tree plus a rectangle into positioned items.
///
/// Three stages, applied per directory level and interleaved down the
/// recursion:
///
/// 1. [`bisect`] — size-balanced recursive bisection that assigns every
///    child a sub-rectangle proportional to its byte size.
/// 2. [`rollup`] — merges children whose rectangles came out below the
///    visibility threshold into one aggregate item, then re-runs the
///    bisection over the reduced set.
/// 3. [`render`] — the recursive pass over the whole tree that produces the
///    flat [`RenderItem`] list a renderer consumes, recursing into folder
///    rectangles that are large enough to show structure.
///
/// [`hit_test::HitTestIndex`] wraps the flat list for point queries.
pub mod bisect;
pub mod hit_test;
pub mod rect;
pub mod render;
pub mod rollup;

pub use hit_test::HitTestIndex;
pub use rect::Rect;
pub use render::{layout_tree, ItemKind, LayoutOptions, RenderItem};
