/// The recursive layout pass — size tree in, flat render list out.
///
/// For each directory level: collect direct children (subfolders + files),
/// sort descending by size, bisect the level's rectangle, roll up
/// sub-visible items, emit the level's items, then recurse into every folder
/// rectangle large enough to show its own structure.
///
/// Items are appended parent-before-children, so a reverse scan of the flat
/// list always meets the most deeply nested (visually topmost) rectangle
/// first — the property the hit-test index relies on.
use super::bisect::divide_area;
use super::rect::Rect;
use super::rollup::{collapse_tiny, RollupAggregate, DEFAULT_MIN_VISIBLE_SIDE};
use crate::model::folder_node::display_name;
use crate::model::size::{format_count, format_size};
use crate::model::FolderNode;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Tuning options for one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Visual gap (px) reserved between the two groups of every split.
    pub gap: f64,
    /// Items whose rectangle is thinner than this in either dimension are
    /// merged into the level's rollup bucket.
    pub min_visible_side: f64,
    /// A folder's contents are only laid out inside it when its rectangle
    /// exceeds both of these dimensions; smaller folders stay opaque.
    pub recurse_min_width: f64,
    pub recurse_min_height: f64,
    /// Margin (px) inset on every side before laying out a folder's
    /// contents, leaving the folder's own border visible around them.
    pub frame_inset: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            gap: 1.0,
            min_visible_side: DEFAULT_MIN_VISIBLE_SIDE,
            recurse_min_width: 50.0,
            recurse_min_height: 30.0,
            frame_inset: 2.0,
        }
    }
}

/// Semantic category of a laid-out rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    File,
    Folder,
    /// Aggregate of items too small to render individually. Terminal and
    /// non-navigable.
    Rollup {
        /// Number of merged items.
        count: u64,
        /// Largest single merged item, in bytes.
        max_size: u64,
    },
}

/// One positioned rectangle in the flat render list.
///
/// Ephemeral: rebuilt on every layout pass (viewport change, window resize),
/// never persisted across passes.
#[derive(Debug, Clone, Serialize)]
pub struct RenderItem {
    /// The file or folder this rectangle stands for. Rollups carry the path
    /// of the directory whose children were merged.
    pub path: PathBuf,
    pub size: u64,
    pub kind: ItemKind,
    pub rect: Rect,
    /// Nesting depth: 0 for the visible root's direct children.
    pub depth: usize,
}

impl RenderItem {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder)
    }

    pub fn is_rollup(&self) -> bool {
        matches!(self.kind, ItemKind::Rollup { .. })
    }

    /// Display label: the file/folder name, or a count for rollups.
    pub fn label(&self) -> String {
        match self.kind {
            ItemKind::Rollup { count, .. } => {
                format!("{} small items", format_count(count))
            }
            _ => display_name(&self.path),
        }
    }

    /// Hover text for the host's tooltip: kind, label, and formatted size.
    /// Rollups also report their largest hidden member.
    pub fn tooltip(&self) -> String {
        match self.kind {
            ItemKind::File => {
                format!("File: {}\nSize: {}", self.label(), format_size(self.size))
            }
            ItemKind::Folder => {
                format!("Folder: {}\nSize: {}", self.label(), format_size(self.size))
            }
            ItemKind::Rollup { max_size, .. } => format!(
                "{}\nSize: {} (largest {})",
                self.label(),
                format_size(self.size),
                format_size(max_size),
            ),
        }
    }
}

/// Lay out `root`'s children inside `bounds` and every large-enough folder
/// recursively, returning the flat render list.
///
/// A root with no retained children (or a degenerate `bounds`) yields an
/// empty list, not an error.
pub fn layout_tree(root: &FolderNode, bounds: Rect, options: &LayoutOptions) -> Vec<RenderItem> {
    let mut items = Vec::new();
    layout_node(root, bounds, 0, options, &mut items);
    items
}

/// One direct child of the node currently being laid out.
enum Slot<'a> {
    File { path: &'a Path, size: u64 },
    Folder(&'a FolderNode),
    Rollup(RollupAggregate),
}

impl Slot<'_> {
    fn size(&self) -> u64 {
        match self {
            Slot::File { size, .. } => *size,
            Slot::Folder(node) => node.total_size,
            Slot::Rollup(agg) => agg.size,
        }
    }
}

fn layout_node(
    node: &FolderNode,
    area: Rect,
    depth: usize,
    options: &LayoutOptions,
    out: &mut Vec<RenderItem>,
) {
    let mut slots: Vec<Slot<'_>> = Vec::with_capacity(node.sub_folders.len() + node.files.len());
    for sub in &node.sub_folders {
        slots.push(Slot::Folder(sub));
    }
    for file in &node.files {
        slots.push(Slot::File {
            path: &file.path,
            size: file.size,
        });
    }
    if slots.is_empty() {
        return;
    }

    // Stable sort, size descending: equal-sized siblings keep their
    // enumeration order so repeated passes over the same tree are identical.
    slots.sort_by(|a, b| b.size().cmp(&a.size()));

    let sizes: Vec<u64> = slots.iter().map(Slot::size).collect();
    let rects = divide_area(&sizes, area, options.gap);

    // Single rollup pass: merge sub-visible items, then re-sort and re-run
    // the bisection over the reduced set. The aggregate competes for area
    // like any other item; it is never re-subdivided.
    let (kept, aggregate) = collapse_tiny(&sizes, &rects, options.min_visible_side);
    let rects = if let Some(agg) = aggregate {
        let mut reduced: Vec<Slot<'_>> = Vec::with_capacity(kept.len() + 1);
        // Indices must be consumed descending so earlier removals don't
        // shift later ones.
        for &i in kept.iter().rev() {
            reduced.push(slots.swap_remove(i));
        }
        reduced.reverse();
        reduced.push(Slot::Rollup(agg));
        reduced.sort_by(|a, b| b.size().cmp(&a.size()));
        slots = reduced;

        let sizes: Vec<u64> = slots.iter().map(Slot::size).collect();
        divide_area(&sizes, area, options.gap)
    } else {
        rects
    };

    for (slot, rect) in slots.iter().zip(rects) {
        match slot {
            Slot::File { path, size } => out.push(RenderItem {
                path: path.to_path_buf(),
                size: *size,
                kind: ItemKind::File,
                rect,
                depth,
            }),
            Slot::Folder(sub) => {
                out.push(RenderItem {
                    path: sub.path.clone(),
                    size: sub.total_size,
                    kind: ItemKind::Folder,
                    rect,
                    depth,
                });
                // Only folders with room to show structure get their
                // contents laid out, inset inside the folder's border.
                if rect.w > options.recurse_min_width && rect.h > options.recurse_min_height {
                    layout_node(sub, rect.inset(options.frame_inset), depth + 1, options, out);
                }
            }
            Slot::Rollup(agg) => out.push(RenderItem {
                path: node.path.clone(),
                size: agg.size,
                kind: ItemKind::Rollup {
                    count: agg.count,
                    max_size: agg.max_size,
                },
                rect,
                depth,
            }),
        }
    }
}
