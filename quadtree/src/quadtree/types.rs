use common::shapes::Rect;
use smallvec::SmallVec;

pub(crate) const QUAD_TOP_LEFT: usize = 0;
pub(crate) const QUAD_TOP_RIGHT: usize = 1;
pub(crate) const QUAD_BOTTOM_LEFT: usize = 2;
pub(crate) const QUAD_BOTTOM_RIGHT: usize = 3;

/// Insertion work stack: (node index, frame entity slot).
pub(crate) type InsertStack = SmallVec<[(u32, u32); 32]>;
/// Query descent stack: node indices.
pub(crate) type QueryStack = SmallVec<[u32; 32]>;

/// Writes the indices of every sub-quadrant of `bounds` that `extent`
/// overlaps into `targets`, returning how many were written (0 to 4).
///
/// Quadrants are numbered in z-order: 0 top-left, 1 top-right,
/// 2 bottom-left, 3 bottom-right.
#[inline(always)]
pub(crate) fn quadrant_indices(extent: Rect, bounds: Rect, targets: &mut [usize; 4]) -> usize {
    let vertical_mid = bounds.x + bounds.width / 2.0;
    let horizontal_mid = bounds.y + bounds.height / 2.0;

    let in_left = extent.x < vertical_mid;
    // Inclusive on the far edge: a box sitting exactly on a midline lands in
    // both halves, so a candidate at a boundary is never missed.
    let in_right = extent.x + extent.width >= vertical_mid;
    let in_top = extent.y < horizontal_mid;
    let in_bottom = extent.y + extent.height >= horizontal_mid;

    let mut len = 0;
    if in_top {
        if in_left {
            targets[len] = QUAD_TOP_LEFT;
            len += 1;
        }
        if in_right {
            targets[len] = QUAD_TOP_RIGHT;
            len += 1;
        }
    }
    if in_bottom {
        if in_left {
            targets[len] = QUAD_BOTTOM_LEFT;
            len += 1;
        }
        if in_right {
            targets[len] = QUAD_BOTTOM_RIGHT;
            len += 1;
        }
    }
    len
}
