/// Size-balanced recursive bisection.
///
/// Splits a sorted weight list into two roughly-half-weight groups, divides
/// the rectangle between them along its longer axis, and recurses. Compared
/// to naive single-axis proportional packing this keeps rectangles close to
/// square over deep recursion, because every split bisects the longer side.
///
/// Callers must pass sizes sorted **descending** — the grouping rule reads
/// the list as "largest items first" and produces materially different
/// output on unsorted input.
use super::rect::Rect;
use std::ops::Range;

/// Assign each weight a sub-rectangle of `area` proportional to its size.
///
/// Returns one rectangle per input size, in input order. The rectangles tile
/// `area` exactly, minus a fixed `gap` reserved between the two groups of
/// every split. Degenerate input is absorbed, never an error:
///
/// - an empty size list returns an empty vector;
/// - zero or negative area dimensions clamp to zero, yielding zero-area
///   rectangles;
/// - an all-zero size list splits each axis in half instead of dividing by
///   zero;
/// - individual zero sizes may legitimately receive zero-area rectangles.
pub fn divide_area(sizes: &[u64], area: Rect, gap: f64) -> Vec<Rect> {
    let mut rects = vec![Rect::default(); sizes.len()];
    let total: u64 = sizes.iter().sum();
    divide_recursive(sizes, 0..sizes.len(), area, total as f64, gap, &mut rects);
    rects
}

fn divide_recursive(
    sizes: &[u64],
    range: Range<usize>,
    area: Rect,
    total: f64,
    gap: f64,
    out: &mut [Rect],
) {
    let safe = area.clamped();
    if range.is_empty() {
        return;
    }
    if range.len() == 1 {
        out[range.start] = safe;
        return;
    }

    // Group A: grow a prefix of the (descending-sorted) sizes while the next
    // item still keeps the prefix under half the total weight. The first item
    // always joins, so group A is never empty; a zero-size item never extends
    // the prefix, so it can never anchor a split boundary.
    let mut size_a = sizes[range.start] as f64;
    let mut split = range.start + 1;
    while split < range.end
        && (size_a + sizes[split] as f64) * 2.0 < total
        && sizes[split] > 0
    {
        size_a += sizes[split] as f64;
        split += 1;
    }
    let size_b = total - size_a;

    // Bisect along the longer axis, reserving `gap` between the groups.
    if safe.w >= safe.h {
        let effective = (safe.w - gap).max(0.0);
        let mid = if total > 0.0 {
            size_a / total * effective
        } else {
            effective / 2.0
        };
        let area_a = Rect::new(safe.x, safe.y, mid.max(0.0), safe.h);
        let area_b = Rect::new(
            safe.x + mid + gap,
            safe.y,
            (safe.w - mid - gap).max(0.0),
            safe.h,
        );
        divide_recursive(sizes, range.start..split, area_a, size_a, gap, out);
        divide_recursive(sizes, split..range.end, area_b, size_b, gap, out);
    } else {
        let effective = (safe.h - gap).max(0.0);
        let mid = if total > 0.0 {
            size_a / total * effective
        } else {
            effective / 2.0
        };
        let area_a = Rect::new(safe.x, safe.y, safe.w, mid.max(0.0));
        let area_b = Rect::new(
            safe.x,
            safe.y + mid + gap,
            safe.w,
            (safe.h - mid - gap).max(0.0),
        );
        divide_recursive(sizes, range.start..split, area_a, size_a, gap, out);
        divide_recursive(sizes, split..range.end, area_b, size_b, gap, out);
    }
}
