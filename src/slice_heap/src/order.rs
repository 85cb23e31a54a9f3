//! Element orderings
//!
//! A [`Heap`] keeps the element that *outranks* every other one at its root.
//! What "outranks" means is decided by a [`HeapOrder`] value, which is
//! supplied once when the heap is created and stored inside it.
//!
//! [`Heap`]: crate::Heap

/// Ordering used by [`Heap`]'s operations.
///
/// The ordering must be consistent for as long as the heap lives: asking the
/// same question about the same pair of elements must produce the same answer.
///
/// Any `FnMut(&T, &T) -> bool` implements this trait, which is handy for
/// one-off orderings. Spell out the parameter types so that the closure is
/// accepted for every pair of lifetimes:
///
/// ```
/// use slice_heap::Heap;
///
/// let mut storage = [(3u8, 'c'), (1, 'a'), (2, 'b')];
/// let mut heap = Heap::from_slice(&mut storage, |x: &(u8, char), y: &(u8, char)| x.0 < y.0);
/// assert_eq!(heap.pop(), Some((1, 'a')));
/// ```
///
/// [`Heap`]: crate::Heap
pub trait HeapOrder<Element> {
    /// Return `true` iff `x` has strictly higher priority than `y`.
    fn outranks(&mut self, x: &Element, y: &Element) -> bool;

    /// Called when the element `e` is moved to the new position `new_index`.
    ///
    /// This enables tracking the position of each element, e.g., to remove
    /// it later by [`Heap::remove_at`]. Elements leaving the heap are not
    /// reported: neither the element evicted by a removal nor the elements
    /// discarded by [`Heap::clear`].
    ///
    /// [`Heap::remove_at`]: crate::Heap::remove_at
    /// [`Heap::clear`]: crate::Heap::clear
    fn on_move(&mut self, e: &mut Element, new_index: usize) {
        let _ = (e, new_index);
    }
}

/// Places the greatest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> HeapOrder<T> for MaxFirst {
    #[inline]
    fn outranks(&mut self, x: &T, y: &T) -> bool {
        *x > *y
    }
}

/// Places the least element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> HeapOrder<T> for MinFirst {
    #[inline]
    fn outranks(&mut self, x: &T, y: &T) -> bool {
        *x < *y
    }
}

impl<T, F> HeapOrder<T> for F
where
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&mut self, x: &T, y: &T) -> bool {
        self(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outranks<T, O: HeapOrder<T>>(mut order: O, x: T, y: T) -> bool {
        order.outranks(&x, &y)
    }

    #[test]
    fn max_first() {
        assert!(outranks(MaxFirst, 2, 1));
        assert!(!outranks(MaxFirst, 1, 2));
        assert!(!outranks(MaxFirst, 1, 1));
    }

    #[test]
    fn min_first() {
        assert!(outranks(MinFirst, 1, 2));
        assert!(!outranks(MinFirst, 2, 1));
        assert!(!outranks(MinFirst, 1, 1));
    }

    #[test]
    fn fn_pointer() {
        fn longer(x: &&str, y: &&str) -> bool {
            x.len() > y.len()
        }
        assert!(outranks(longer as fn(&&str, &&str) -> bool, "abc", "ab"));
        assert!(!outranks(longer as fn(&&str, &&str) -> bool, "ab", "cd"));
    }

    #[test]
    fn stateful_closure() {
        let mut calls = 0;
        let mut order = |x: &i32, y: &i32| {
            calls += 1;
            x > y
        };
        assert!(order.outranks(&5, &3));
        assert!(!order.outranks(&3, &5));
        assert_eq!(calls, 2);
    }
}
