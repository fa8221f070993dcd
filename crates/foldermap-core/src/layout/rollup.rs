/// Rollup aggregation — merging sub-visible items into one bucket.
///
/// After a bisection pass over one directory level, items whose rectangle is
/// thinner than the visibility threshold in either dimension would render as
/// unreadable slivers. They are pulled out and replaced by a single synthetic
/// entry carrying their combined weight; the caller then re-sorts and re-runs
/// the bisection over the reduced set so the aggregate gets a properly
/// proportioned rectangle. A rollup is terminal: it is never decomposed back
/// into its members and never navigated into.
use super::rect::Rect;

/// Minimum rectangle side (px) for an item to stay individually visible.
pub const DEFAULT_MIN_VISIBLE_SIDE: f64 = 3.0;

/// The merged tiny bucket for one directory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollupAggregate {
    /// Combined byte size of every merged item.
    pub size: u64,
    /// How many items were merged.
    pub count: u64,
    /// Largest single merged item, for "biggest hidden item" display.
    pub max_size: u64,
}

/// Partition one level's laid-out items by visibility.
///
/// `sizes` and `rects` are parallel (the bisection output for this level).
/// Returns the indices of surviving items in their original order, plus the
/// aggregate when at least one item fell below the threshold. A level where
/// everything is visible returns all indices and `None`.
pub fn collapse_tiny(
    sizes: &[u64],
    rects: &[Rect],
    min_side: f64,
) -> (Vec<usize>, Option<RollupAggregate>) {
    debug_assert_eq!(sizes.len(), rects.len());

    let mut kept = Vec::with_capacity(sizes.len());
    let mut agg: Option<RollupAggregate> = None;

    for (i, rect) in rects.iter().enumerate() {
        if rect.w < min_side || rect.h < min_side {
            let entry = agg.get_or_insert(RollupAggregate {
                size: 0,
                count: 0,
                max_size: 0,
            });
            entry.size += sizes[i];
            entry.count += 1;
            entry.max_size = entry.max_size.max(sizes[i]);
        } else {
            kept.push(i);
        }
    }
    (kept, agg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f64, h: f64) -> Rect {
        Rect::new(0.0, 0.0, w, h)
    }

    #[test]
    fn test_all_visible_no_aggregate() {
        let sizes = [500, 300];
        let rects = [rect(50.0, 40.0), rect(30.0, 40.0)];
        let (kept, agg) = collapse_tiny(&sizes, &rects, 3.0);
        assert_eq!(kept, vec![0, 1]);
        assert!(agg.is_none());
    }

    #[test]
    fn test_merges_all_tiny_into_one() {
        let sizes = [900, 40, 25, 10];
        let rects = [
            rect(80.0, 60.0),
            rect(2.0, 60.0),  // too thin
            rect(10.0, 2.9),  // too short
            rect(1.0, 1.0),   // both
        ];
        let (kept, agg) = collapse_tiny(&sizes, &rects, 3.0);
        assert_eq!(kept, vec![0]);

        let agg = agg.expect("three tiny items must produce an aggregate");
        assert_eq!(agg.count, 3);
        assert_eq!(agg.size, 75);
        assert_eq!(agg.max_size, 40);
    }

    #[test]
    fn test_single_tiny_item_still_aggregates() {
        // Even one sub-visible item becomes a rollup: the set size does not
        // shrink, but the sliver is replaced by a labelled bucket.
        let sizes = [700, 5];
        let rects = [rect(90.0, 50.0), rect(0.5, 50.0)];
        let (kept, agg) = collapse_tiny(&sizes, &rects, 3.0);
        assert_eq!(kept, vec![0]);
        assert_eq!(agg.unwrap().count, 1);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // Exactly the threshold counts as visible; strictly below rolls up.
        let sizes = [10, 10];
        let rects = [rect(3.0, 3.0), rect(2.999, 3.0)];
        let (kept, agg) = collapse_tiny(&sizes, &rects, 3.0);
        assert_eq!(kept, vec![0]);
        assert_eq!(agg.unwrap().count, 1);
    }
}
