//! Binary heap over borrowed storage
use core::fmt;

use crate::{
    error::{CreateError, Full, RemoveError},
    order::{HeapOrder, MaxFirst},
};

mod sift;

use self::sift::{sift_down, sift_up};

#[doc = svgbobdoc::transform!(
/// A fixed-capacity binary heap laid over a caller-provided slice.
///
/// The first [`len`] slots of the storage are *live* and satisfy the heap
/// property: no element is outranked (according to `O`) by either of its
/// children. The remaining slots up to [`capacity`] are *dead*. They still
/// hold values of `T`, which is where elements evicted by [`remove`] end up.
///
/// <center>
///
/// ```svgbob
///    storage: "&'a mut [T]"
///
///      0     1     2     3     4     5     6     7
///   +-----+-----+-----+-----+-----+-----+-----+-----+
///   |  9  |  5  |  8  |  1  |  3  |  2  |  4  |  0  |
///   +-----+-----+-----+-----+-----+-----+-----+-----+
///   |                                   |           |
///   |<--------- live: len() = 6 ------->|<- dead -->|
///   |<------------ capacity() = 8 ----------------->|
///
///                  9               parent(i) = (i - 1) / 2
///                /   \              left(i) = 2i + 1
///               5     8            right(i) = 2i + 2
///              / \   /
///             1   3 2
/// ```
///
/// </center>
///
/// The heap never allocates, never grows, and never drops the storage. Its
/// lifetime is bounded by the borrow of the storage, so the storage can't be
/// moved or resized while the heap is in use.
///
/// # Examples
///
/// ```
/// use slice_heap::{Heap, MaxFirst};
///
/// let mut storage = [5, 3, 8, 1, 9, 2];
/// let mut heap = Heap::new(&mut storage, 6, 6, MaxFirst).unwrap();
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.pop(), Some(8));
/// assert!(heap.add(7).is_ok());
/// assert_eq!(heap.pop(), Some(7));
/// ```
///
/// [`len`]: Self::len
/// [`capacity`]: Self::capacity
/// [`remove`]: Self::remove
)]
pub struct Heap<'a, T, O = MaxFirst> {
    /// Exactly `capacity` slots. `storage[..len]` is heap-ordered.
    storage: &'a mut [T],
    len: usize,
    order: O,
}

impl<'a, T, O: HeapOrder<T>> Heap<'a, T, O> {
    /// Construct a heap over `storage[..capacity]`, treating the first `len`
    /// elements as live.
    ///
    /// The live elements may be in any order; they are rearranged in place to
    /// satisfy the heap property. Slots after `capacity` are not touched by
    /// the returned heap.
    ///
    /// # Errors
    ///
    /// [`CreateError::BadLen`] if `len > capacity`,
    /// [`CreateError::StorageTooShort`] if `storage.len() < capacity`.
    pub fn new(
        storage: &'a mut [T],
        len: usize,
        capacity: usize,
        order: O,
    ) -> Result<Self, CreateError> {
        if len > capacity {
            log::debug!("rejecting heap: len {len} exceeds capacity {capacity}");
            return Err(CreateError::BadLen);
        }
        if storage.len() < capacity {
            log::debug!(
                "rejecting heap: storage has {} slots, capacity {capacity} requested",
                storage.len()
            );
            return Err(CreateError::StorageTooShort);
        }

        let mut this = Self {
            storage: &mut storage[..capacity],
            len,
            order,
        };
        this.rebuild();
        Ok(this)
    }

    /// Construct a full heap from all elements of `storage`.
    pub fn from_slice(storage: &'a mut [T], order: O) -> Self {
        let len = storage.len();
        let mut this = Self {
            storage,
            len,
            order,
        };
        this.rebuild();
        this
    }

    /// Construct an empty heap that can hold up to `storage.len()` elements.
    pub fn with_storage(storage: &'a mut [T], order: O) -> Self {
        Self {
            storage,
            len: 0,
            order,
        }
    }

    /// Restore the heap property of the live elements, which may be in an
    /// arbitrary order. Runs in linear time.
    ///
    /// Every live element is reported to [`HeapOrder::on_move`] at least once.
    pub fn rebuild(&mut self) {
        let live = &mut self.storage[..self.len];

        for (i, e) in live.iter_mut().enumerate() {
            self.order.on_move(e, i);
        }

        // Leaves are trivially heaps; fix up each subtree bottom-up
        for i in (0..live.len() / 2).rev() {
            sift_down(live, i, &mut self.order);
        }
    }

    /// Add an element and return the position where it came to rest.
    ///
    /// # Errors
    ///
    /// Returns the element back in [`Full`] if the heap is at capacity. The
    /// heap is left unchanged in this case.
    pub fn add(&mut self, item: T) -> Result<usize, Full<T>> {
        if self.is_full() {
            log::trace!("add rejected: capacity {} exhausted", self.capacity());
            return Err(Full(item));
        }

        let i = self.len;
        self.storage[i] = item;
        self.len += 1;

        Ok(sift_up(&mut self.storage[..self.len], i, &mut self.order))
    }

    /// Remove the highest-priority element.
    ///
    /// The removed element is moved to the first dead slot (index [`len`]
    /// after the call) and a reference to it is returned, so that it can be
    /// read or taken out, e.g., with [`core::mem::take`].
    ///
    /// # Errors
    ///
    /// [`RemoveError::Empty`] if the heap is empty.
    ///
    /// [`len`]: Self::len
    #[inline]
    pub fn remove(&mut self) -> Result<&mut T, RemoveError> {
        self.remove_at(0)
    }

    /// Remove the element at position `i`.
    ///
    /// The last live element takes the place of the removed one and is then
    /// sifted up or down, whichever restores the heap property. As with
    /// [`remove`], the removed element ends up in the first dead slot.
    ///
    /// # Errors
    ///
    /// [`RemoveError::Empty`] if the heap is empty, [`RemoveError::OutOfRange`]
    /// if `i >= self.len()`. The heap is left unchanged in both cases.
    ///
    /// [`remove`]: Self::remove
    pub fn remove_at(&mut self, i: usize) -> Result<&mut T, RemoveError> {
        if self.is_empty() {
            return Err(RemoveError::Empty);
        }
        if i >= self.len {
            return Err(RemoveError::OutOfRange);
        }

        let last = self.len - 1;
        self.storage.swap(i, last);
        self.len = last;

        if i < last {
            let live = &mut self.storage[..last];

            // The element moved in from the end may outrank its new parent
            // when `i` is not on the path from the end to the root
            let should_sift_up = i > 0 && self.order.outranks(&live[i], &live[(i - 1) / 2]);

            if should_sift_up {
                sift_up(live, i, &mut self.order);
            } else {
                sift_down(live, i, &mut self.order);
            }
        }

        Ok(&mut self.storage[last])
    }

    /// Remove the highest-priority element and return a clone of it.
    ///
    /// Returns `None` if the heap is empty. Use [`remove`] for elements that
    /// can't be cloned.
    ///
    /// [`remove`]: Self::remove
    #[inline]
    pub fn pop(&mut self) -> Option<T>
    where
        T: Clone,
    {
        self.remove().ok().cloned()
    }

    /// Sort the live elements in place, from the lowest priority to the
    /// highest, and return them.
    pub fn into_sorted(mut self) -> &'a mut [T] {
        let len = self.len;
        while self.remove().is_ok() {}
        let storage = self.into_storage();
        &mut storage[..len]
    }

    /// Check the heap property of the live elements.
    pub fn is_heap(&mut self) -> bool {
        let live = &self.storage[..self.len];
        (1..live.len()).all(|i| !self.order.outranks(&live[i], &live[(i - 1) / 2]))
    }
}

impl<'a, T, O> Heap<'a, T, O> {
    /// Get the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Get the maximum number of live elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Get a flag indicating whether the heap has no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a flag indicating whether the heap is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Get the live elements in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// Get a reference to the highest-priority element.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Get a clone of the highest-priority element.
    #[inline]
    pub fn head(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek().cloned()
    }

    /// Get a reference to the ordering.
    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Get a mutable reference to the ordering.
    ///
    /// This is meant for orderings carrying auxiliary state, such as a table
    /// of positions maintained by [`HeapOrder::on_move`]. Changing how the
    /// live elements rank relative to each other leaves the heap in an
    /// unspecified (but memory-safe) state until [`rebuild`] is called.
    ///
    /// [`rebuild`]: Self::rebuild
    #[inline]
    pub fn order_mut(&mut self) -> &mut O {
        &mut self.order
    }

    /// Mark all elements as dead. The storage is left untouched.
    ///
    /// The elements are not reported to [`HeapOrder::on_move`], so an
    /// ordering that tracks positions has to forget them on its own, e.g.,
    /// through [`order_mut`].
    ///
    /// [`order_mut`]: Self::order_mut
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Release the storage (all `capacity` slots).
    #[inline]
    pub fn into_storage(self) -> &'a mut [T] {
        self.storage
    }

    /// Release the storage, the number of live elements, and the ordering.
    #[inline]
    pub fn into_parts(self) -> (&'a mut [T], usize, O) {
        (self.storage, self.len, self.order)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("live", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
