/// Data model for the FolderMap size tree.
///
/// Re-exports the owned folder tree and size-formatting helpers.
pub mod folder_node;
pub mod size;

pub use folder_node::{FileEntry, FolderNode};
