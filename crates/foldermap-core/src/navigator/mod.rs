/// Viewport navigation — which folder the map currently shows.
///
/// Tracks exactly one root node at a time; there is no navigation stack.
/// Drilling into a subfolder moves ownership of that subtree out of the
/// current tree (no rescan), while zooming out walks up the filesystem path
/// and rescans, because sibling data was never retained. Simplicity over
/// performance, deliberately.
///
/// Hosts learn about root changes through a plain callback rather than any
/// event-loop binding; every successful `set_root` / `drill_into` /
/// `zoom_out` fires it once.
use crate::model::FolderNode;
use crate::scanner::{DirectorySource, FsDirectorySource, SizeTreeBuilder};
use std::path::Path;
use tracing::{debug, info};

/// Observer invoked with the path to show in breadcrumb/label UI after each
/// successful navigation.
pub type RootChangedFn = Box<dyn FnMut(&Path)>;

pub struct ViewportNavigator<S: DirectorySource = FsDirectorySource> {
    builder: SizeTreeBuilder<S>,
    root: Option<FolderNode>,
    on_root_changed: Option<RootChangedFn>,
}

impl Default for ViewportNavigator<FsDirectorySource> {
    fn default() -> Self {
        Self::new(SizeTreeBuilder::default())
    }
}

impl<S: DirectorySource> ViewportNavigator<S> {
    pub fn new(builder: SizeTreeBuilder<S>) -> Self {
        Self {
            builder,
            root: None,
            on_root_changed: None,
        }
    }

    /// Register the root-changed observer, replacing any previous one.
    pub fn set_on_root_changed(&mut self, callback: impl FnMut(&Path) + 'static) {
        self.on_root_changed = Some(Box::new(callback));
    }

    /// The tree currently shown, if any scan has happened yet.
    pub fn root(&self) -> Option<&FolderNode> {
        self.root.as_ref()
    }

    /// Scan `path` and make it the visible root.
    ///
    /// Always succeeds: an unreadable path becomes an empty zero-size root
    /// and the map renders empty. The previous tree is dropped wholesale.
    pub fn set_root(&mut self, path: &Path) {
        info!(path = %path.display(), "setting map root");
        let node = self.builder.build(path);
        self.root = Some(node);
        self.notify(path);
    }

    /// Make an already-scanned subfolder the visible root, without rescanning.
    ///
    /// `path` must name a folder node held somewhere in the current tree;
    /// anything else (a file, a rollup, an unknown path) is silently refused.
    /// The subtree's ownership moves out of the old tree, which is then
    /// dropped. Observers receive the *parent* path of the new root — the
    /// in-memory node already reflects the child, so the breadcrumb shows
    /// where the user came from.
    pub fn drill_into(&mut self, path: &Path) -> bool {
        let Some(root) = self.root.as_mut() else {
            return false;
        };
        let Some(child) = root.take_folder(path) else {
            debug!(path = %path.display(), "drill-into refused: not a held folder node");
            return false;
        };

        info!(path = %path.display(), total_size = child.total_size, "drilling into subfolder");
        let parent = child
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| child.path.clone());
        self.root = Some(child);
        self.notify(&parent);
        true
    }

    /// Rescan one directory level up and make it the visible root.
    ///
    /// Refused at the filesystem root (no parent to go to). A full rebuild:
    /// the parent's other children were discarded when the current root was
    /// scanned, so they must be read again.
    pub fn zoom_out(&mut self) -> bool {
        let Some(root) = self.root.as_ref() else {
            return false;
        };
        let Some(parent) = root.path.parent() else {
            debug!(path = %root.path.display(), "zoom-out refused: already at filesystem root");
            return false;
        };
        let parent = parent.to_path_buf();

        info!(from = %root.path.display(), to = %parent.display(), "zooming out");
        let node = self.builder.build(&parent);
        self.root = Some(node);
        self.notify(&parent);
        true
    }

    fn notify(&mut self, path: &Path) {
        if let Some(callback) = self.on_root_changed.as_mut() {
            callback(path);
        }
    }
}
