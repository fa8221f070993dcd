/// FolderMap Core — scanning, treemap layout, and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI):
/// a host hands the engine a directory path and a rectangle, and gets back a
/// flat list of positioned rectangles plus a point-query index for hover and
/// click handling. Drawing, tooltips, and dialogs stay on the host's side.
///
/// # Modules
///
/// - [`model`] — Owned weighted folder tree and size formatting.
/// - [`scanner`] — Depth-first directory size scanning behind a source trait.
/// - [`layout`] — Size-balanced treemap subdivision, rollup aggregation,
///   and the flat render-item pass with hit testing.
/// - [`navigator`] — Viewport root tracking: set-root, drill-in, zoom-out.
pub mod layout;
pub mod model;
pub mod navigator;
pub mod scanner;
