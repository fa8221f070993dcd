/// Point-query index over the last layout pass.
///
/// Holds the flat render list exactly as the layout pass produced it —
/// folders, files, and rollups at every depth, parent-before-children.
/// Queries walk the list in reverse so the most deeply nested rectangle
/// containing the point wins; a forward walk would always stop at the outer
/// folder's frame and hover/click could never reach a nested file.
use super::render::RenderItem;

#[derive(Debug, Default)]
pub struct HitTestIndex {
    items: Vec<RenderItem>,
}

impl HitTestIndex {
    /// Wrap the flat render list of one layout pass.
    pub fn new(items: Vec<RenderItem>) -> Self {
        Self { items }
    }

    /// The full render list for the drawing collaborator, in paint order.
    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    /// Resolve a point to the topmost item whose rectangle contains it.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&RenderItem> {
        self.items.iter().rev().find(|item| item.rect.contains(x, y))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rect::Rect;
    use crate::layout::render::ItemKind;
    use std::path::PathBuf;

    fn item(path: &str, kind: ItemKind, rect: Rect, depth: usize) -> RenderItem {
        RenderItem {
            path: PathBuf::from(path),
            size: 100,
            kind,
            rect,
            depth,
        }
    }

    #[test]
    fn test_nested_item_wins_over_enclosing_folder() {
        // Folder frame at depth 0 fully contains the file at depth 1; a hit
        // inside the file must resolve to the file.
        let index = HitTestIndex::new(vec![
            item(
                "/d/sub",
                ItemKind::Folder,
                Rect::new(0.0, 0.0, 100.0, 100.0),
                0,
            ),
            item(
                "/d/sub/a.bin",
                ItemKind::File,
                Rect::new(10.0, 10.0, 40.0, 40.0),
                1,
            ),
        ]);

        let hit = index.hit_test(20.0, 20.0).unwrap();
        assert_eq!(hit.path, PathBuf::from("/d/sub/a.bin"));

        // Outside the file but inside the folder frame: the folder.
        let hit = index.hit_test(80.0, 80.0).unwrap();
        assert_eq!(hit.path, PathBuf::from("/d/sub"));
    }

    #[test]
    fn test_miss_returns_none() {
        let index = HitTestIndex::new(vec![item(
            "/d/a.bin",
            ItemKind::File,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            0,
        )]);
        assert!(index.hit_test(50.0, 50.0).is_none());
        assert!(HitTestIndex::default().hit_test(0.0, 0.0).is_none());
    }

    #[test]
    fn test_rollups_are_hittable() {
        let index = HitTestIndex::new(vec![item(
            "/d",
            ItemKind::Rollup {
                count: 7,
                max_size: 90,
            },
            Rect::new(0.0, 0.0, 5.0, 40.0),
            0,
        )]);
        let hit = index.hit_test(2.0, 2.0).unwrap();
        assert!(hit.is_rollup());
    }
}
