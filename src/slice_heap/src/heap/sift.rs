//! Sift operations on the live prefix of a heap's storage
//!
//! Elements only ever move by swapping two slots of the live prefix. A
//! panicking ordering can stop a sift halfway, leaving the heap property
//! unrestored, but it can't lose or duplicate an element.
use crate::order::HeapOrder;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

/// Swap the sifted element at `pos` with the one at `next` and report the
/// latter's new position. Returns `next`, the sifted element's position.
#[inline]
fn step<T>(live: &mut [T], pos: usize, next: usize, order: &mut impl HeapOrder<T>) -> usize {
    live.swap(pos, next);
    order.on_move(&mut live[pos], pos);
    next
}

/// Find the highest-priority child of `pos` if it outranks `live[pos]`.
/// Slots past `live` never win. On a tie between the children, the left one
/// is chosen.
fn promoted_child<T>(live: &[T], pos: usize, order: &mut impl HeapOrder<T>) -> Option<usize> {
    let mut best = pos;
    for child in [left(pos), left(pos) + 1] {
        if child < live.len() && order.outranks(&live[child], &live[best]) {
            best = child;
        }
    }
    (best != pos).then_some(best)
}

/// Move the element at `pos` toward the root while it outranks its parent.
/// Returns the element's final position.
pub(super) fn sift_up<T>(
    live: &mut [T],
    mut pos: usize,
    order: &mut impl HeapOrder<T>,
) -> usize {
    debug_assert!(pos < live.len());
    while pos > 0 && order.outranks(&live[pos], &live[parent(pos)]) {
        pos = step(live, pos, parent(pos), order);
    }
    order.on_move(&mut live[pos], pos);
    pos
}

/// Move the element at `pos` toward the leaves while one of its children
/// outranks it. Returns the element's final position.
pub(super) fn sift_down<T>(
    live: &mut [T],
    mut pos: usize,
    order: &mut impl HeapOrder<T>,
) -> usize {
    debug_assert!(pos < live.len());
    while let Some(child) = promoted_child(live, pos, order) {
        pos = step(live, pos, child, order);
    }
    order.on_move(&mut live[pos], pos);
    pos
}
