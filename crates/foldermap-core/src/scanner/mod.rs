/// Scanner module — builds the weighted size tree for a directory.
///
/// Scanning is synchronous and read-only: `SizeTreeBuilder::build` walks the
/// directory depth-first and returns a fully-aggregated [`FolderNode`] tree
/// before control returns to the caller. There is no background thread and no
/// cancellation; a scan either finishes or the process does not ask for one.
///
/// The OS enumeration primitive lives behind the [`DirectorySource`] trait so
/// hosts and tests can substitute their own listing (an in-memory fake, a
/// remote filesystem). [`FsDirectorySource`] is the `std::fs` implementation
/// used in production.
pub mod source;

use crate::model::{FileEntry, FolderNode};
use std::path::Path;
use tracing::debug;

pub use source::{DirEntry, DirectorySource, FsDirectorySource, ScanError};

/// Minimum file size kept by default, in bytes.
///
/// Files below this threshold are dropped during the scan to suppress visual
/// noise from thousands of tiny files that could never receive a visible
/// rectangle anyway.
pub const DEFAULT_MIN_FILE_SIZE: u64 = 100;

/// Tuning options for a scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Files smaller than this many bytes are ignored.
    pub min_file_size: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_file_size: DEFAULT_MIN_FILE_SIZE,
        }
    }
}

/// Builds an immutable, size-aggregated [`FolderNode`] tree for a path.
pub struct SizeTreeBuilder<S: DirectorySource> {
    source: S,
    options: ScanOptions,
}

impl Default for SizeTreeBuilder<FsDirectorySource> {
    fn default() -> Self {
        Self::new(FsDirectorySource, ScanOptions::default())
    }
}

impl<S: DirectorySource> SizeTreeBuilder<S> {
    pub fn new(source: S, options: ScanOptions) -> Self {
        Self { source, options }
    }

    /// Scan `path` depth-first and return its size tree.
    ///
    /// This never fails: a directory that cannot be enumerated (missing,
    /// permission denied, not actually a directory) becomes a node with
    /// `total_size == 0` and no children, and the rest of the scan carries
    /// on. The visualization degrades to a partial map rather than erroring.
    pub fn build(&self, path: &Path) -> FolderNode {
        let node = self.build_recursive(path);
        debug!(
            path = %path.display(),
            total_size = node.total_size,
            "finished building folder tree"
        );
        node
    }

    fn build_recursive(&self, path: &Path) -> FolderNode {
        let mut node = FolderNode::empty(path.to_path_buf());

        let entries = match self.source.entries(path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %path.display(), %err, "skipping unreadable directory");
                return node;
            }
        };

        for entry in entries {
            if entry.is_dir {
                let child = self.build_recursive(&entry.path);
                // Empty and inaccessible subtrees contribute nothing and are
                // dropped so they never appear on the map.
                if child.total_size > 0 {
                    node.total_size += child.total_size;
                    node.sub_folders.push(child);
                }
            } else if entry.size >= self.options.min_file_size {
                node.total_size += entry.size;
                node.files.push(FileEntry {
                    path: entry.path,
                    size: entry.size,
                });
            }
        }

        debug!(
            path = %path.display(),
            files = node.files.len(),
            sub_folders = node.sub_folders.len(),
            total_size = node.total_size,
            "scanned directory"
        );
        node
    }
}
