/// Directory enumeration seam.
///
/// The scanner only needs "list the direct children of this path"; everything
/// else about the OS filesystem is out of scope. Keeping that behind a trait
/// lets tests drive the builder with an in-memory listing and keeps the core
/// portable.
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a directory could not be enumerated.
///
/// The builder folds every variant into "contributes zero size", but the
/// typed error exists at this seam so sources can say what went wrong and
/// tests can exercise the skip-and-continue policy deliberately.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One direct child of a directory, as reported by a source.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Logical size in bytes. Zero for directories — their weight comes from
    /// recursing, not from the entry itself.
    pub size: u64,
    pub is_dir: bool,
}

/// Supplies direct child entries for a directory path.
pub trait DirectorySource {
    fn entries(&self, path: &Path) -> Result<Vec<DirEntry>, ScanError>;
}

/// The production source: `std::fs::read_dir` on the local filesystem.
///
/// Symlinks are excluded entirely (neither followed nor sized) — the simple
/// cycle protection the tool commits to. Entries whose metadata cannot be
/// read are skipped individually rather than failing the directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectorySource;

impl DirectorySource for FsDirectorySource {
    fn entries(&self, path: &Path) -> Result<Vec<DirEntry>, ScanError> {
        let read_dir = fs::read_dir(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::NotADirectory => ScanError::NotADirectory(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let Ok(entry) = entry else { continue };
            // symlink_metadata never follows links, so a link to a directory
            // reports as a symlink here and gets dropped.
            let Ok(meta) = entry.path().symlink_metadata() else {
                continue;
            };
            if meta.file_type().is_symlink() {
                continue;
            }
            entries.push(DirEntry {
                path: entry.path(),
                size: if meta.is_dir() { 0 } else { meta.len() },
                is_dir: meta.is_dir(),
            });
        }
        Ok(entries)
    }
}
