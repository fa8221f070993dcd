/// The owned, weighted folder tree produced by one scan.
///
/// Each `FolderNode` exclusively owns its children — no back-references and
/// no reference counting. Navigation that needs to "jump into" a child moves
/// the child subtree out of its parent rather than sharing it. The whole tree
/// is built once per scan, immutable afterwards, and wholesale replaced on
/// re-scan (no incremental update).
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single file kept by the scan: absolute path plus logical byte size.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// One directory in the size tree.
#[derive(Debug, Clone, Serialize)]
pub struct FolderNode {
    /// Absolute path of the directory; unique identifier within one tree.
    pub path: PathBuf,

    /// Direct files at or above the scan's minimum-size threshold.
    pub files: Vec<FileEntry>,

    /// Direct subfolders. A subfolder whose `total_size` came out zero
    /// (empty, all-tiny, or inaccessible) is never stored here.
    pub sub_folders: Vec<FolderNode>,

    /// Sum of all retained file sizes plus all subfolder totals, computed
    /// bottom-up at construction time and never mutated afterwards.
    pub total_size: u64,
}

impl FolderNode {
    /// Create an empty node for `path` with no contents and zero size.
    ///
    /// This is also what the scanner returns for an inaccessible directory,
    /// so "could not read" and "empty" are deliberately indistinguishable.
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            files: Vec::new(),
            sub_folders: Vec::new(),
            total_size: 0,
        }
    }

    /// Final path component for display, falling back to the full path for
    /// roots like `/`.
    pub fn name(&self) -> String {
        display_name(&self.path)
    }

    /// Find a descendant folder node by exact path, depth-first.
    ///
    /// Returns `None` for the node's own path — callers looking for a drill-in
    /// target want a strict descendant.
    pub fn find_folder(&self, path: &Path) -> Option<&FolderNode> {
        for sub in &self.sub_folders {
            if sub.path == path {
                return Some(sub);
            }
            if let Some(found) = sub.find_folder(path) {
                return Some(found);
            }
        }
        None
    }

    /// Detach the descendant folder with the given path, transferring
    /// ownership of its whole subtree to the caller.
    ///
    /// Sibling `total_size` values in the remaining tree are left untouched;
    /// the remaining tree is discarded by every current caller (drill-in
    /// replaces the root), so there is nothing to re-aggregate.
    pub fn take_folder(&mut self, path: &Path) -> Option<FolderNode> {
        if let Some(pos) = self.sub_folders.iter().position(|s| s.path == path) {
            return Some(self.sub_folders.swap_remove(pos));
        }
        for sub in &mut self.sub_folders {
            if let Some(found) = sub.take_folder(path) {
                return Some(found);
            }
        }
        None
    }
}

/// Final path component for display purposes.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
