use crate::error::QueueError;
use crate::iter::{Cursor, CursorMut, Iter, IterMut};
use crate::ring::RingCore;
use crate::stats::{average, average_huge, Accumulator};

/// Fixed-capacity queue where pushing into a full queue evicts the oldest element.
///
/// Implementors only hand out their storage and the [`RingCore`] bookkeeping; every
/// operation is provided on top of them. The length of the storage slice is the capacity.
pub trait RingQueue<T> {
    /// Bookkeeping and storage of the queue.
    fn parts(&self) -> (&RingCore, &[T]);

    /// Mutable bookkeeping and storage of the queue.
    fn parts_mut(&mut self) -> (&mut RingCore, &mut [T]);

    /// Number of slots, the maximum number of elements the queue can hold.
    fn capacity(&self) -> usize {
        self.parts().1.len()
    }

    /// Number of elements currently in the queue.
    fn len(&self) -> usize {
        self.parts().0.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Appends an element at the back.
    /// When the queue is full the front element is overwritten and the front moves one slot.
    fn push_back(&mut self, elem: T) {
        let (core, slots) = self.parts_mut();
        core.push_back(slots, elem);
    }

    #[inline]
    fn push(&mut self, elem: T) {
        self.push_back(elem);
    }

    /// Pushes every value in iteration order, oldest first.
    fn push_back_all<I, U>(&mut self, values: I)
    where
        I: IntoIterator<Item = U>,
        U: Into<T>,
    {
        for value in values {
            self.push_back(value.into());
        }
    }

    /// Pushes the elements of another queue from its front to its back.
    fn push_back_queue<U, Q>(&mut self, other: &Q)
    where
        Q: RingQueue<U> + ?Sized,
        U: Clone + Into<T>,
    {
        self.push_back_all(other.iter().cloned());
    }

    /// Removes `count` elements from the front.
    /// Fails without removing anything when the queue holds less than `count` elements.
    fn pop_front(&mut self, count: usize) -> Result<(), QueueError> {
        let (core, slots) = self.parts_mut();
        core.pop_front(slots.len(), count)
    }

    #[inline]
    fn pop(&mut self) -> Result<(), QueueError> {
        self.pop_front(1)
    }

    /// Resets the queue to empty, leaving the slot contents in place.
    fn clear(&mut self) {
        self.parts_mut().0.clear();
    }

    fn front(&self) -> Result<&T, QueueError> {
        let (core, slots) = self.parts();
        Ok(&slots[core.front_index()?])
    }

    fn front_mut(&mut self) -> Result<&mut T, QueueError> {
        let (core, slots) = self.parts_mut();
        Ok(&mut slots[core.front_index()?])
    }

    fn back(&self) -> Result<&T, QueueError> {
        let (core, slots) = self.parts();
        Ok(&slots[core.back_index(slots.len())?])
    }

    fn back_mut(&mut self) -> Result<&mut T, QueueError> {
        let (core, slots) = self.parts_mut();
        let index = core.back_index(slots.len())?;
        Ok(&mut slots[index])
    }

    /// Element at logical `index` counted from the front.
    fn get(&self, index: usize) -> Result<&T, QueueError> {
        let (core, slots) = self.parts();
        Ok(&slots[core.slot(slots.len(), index)?])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, QueueError> {
        let (core, slots) = self.parts_mut();
        let slot = core.slot(slots.len(), index)?;
        Ok(&mut slots[slot])
    }

    /// Copies the elements, front to back, into a new vector.
    fn to_vec<U>(&self) -> Vec<U>
    where
        T: Clone,
        U: From<T>,
    {
        self.iter().cloned().map(U::from).collect()
    }

    /// Copies the elements, front to back, into a new boxed slice owned by the caller.
    fn to_boxed_slice<U>(&self) -> Box<[U]>
    where
        T: Clone,
        U: From<T>,
    {
        self.to_vec().into_boxed_slice()
    }

    /// Maximum element from logical `offset` to the back.
    fn max(&self, offset: usize) -> Result<&T, QueueError>
    where
        T: PartialOrd,
    {
        self.get(self.index_of_max(offset)?)
    }

    /// Logical index of the maximum element from `offset`, the first one found on ties.
    fn index_of_max(&self, offset: usize) -> Result<usize, QueueError>
    where
        T: PartialOrd,
    {
        let (core, slots) = self.parts();
        core.scan(slots, offset, |candidate, current| candidate > current)
    }

    /// Minimum element from logical `offset` to the back.
    fn min(&self, offset: usize) -> Result<&T, QueueError>
    where
        T: PartialOrd,
    {
        self.get(self.index_of_min(offset)?)
    }

    /// Logical index of the minimum element from `offset`, the first one found on ties.
    fn index_of_min(&self, offset: usize) -> Result<usize, QueueError>
    where
        T: PartialOrd,
    {
        let (core, slots) = self.parts();
        core.scan(slots, offset, |candidate, current| candidate < current)
    }

    /// Average of all elements.
    ///
    /// The sum is kept in `A` and divided once by the length, so `A` must be able to hold
    /// the sum of every element. Use [`avg_huge`](Self::avg_huge) when no such type exists.
    /// Fails with [`QueueError::LengthOverflow`] when the length itself does not fit in `A`.
    fn avg<A>(&self) -> Result<A, QueueError>
    where
        T: Clone,
        A: Accumulator + From<T>,
    {
        if self.is_empty() {
            return Err(QueueError::EmptyAccess);
        }
        average(self.iter(), self.len())
    }

    /// Average of all elements, dividing each one by the length before adding it.
    ///
    /// Never holds the full sum but loses precision on every division; a floating point
    /// accumulator is recommended. Fails like [`avg`](Self::avg) when the length does not
    /// fit in `A`.
    fn avg_huge<A>(&self) -> Result<A, QueueError>
    where
        T: Clone,
        A: Accumulator + From<T>,
    {
        if self.is_empty() {
            return Err(QueueError::EmptyAccess);
        }
        average_huge(self.iter(), self.len())
    }

    fn iter(&self) -> Iter<'_, T> {
        let (core, slots) = self.parts();
        core.iter(slots)
    }

    fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (core, slots) = self.parts_mut();
        core.iter_mut(slots)
    }

    /// Cursor on the front element.
    fn begin(&self) -> Cursor<'_, T> {
        let (core, slots) = self.parts();
        core.begin(slots)
    }

    /// Cursor one past the back element.
    fn end(&self) -> Cursor<'_, T> {
        let (core, slots) = self.parts();
        core.end(slots)
    }

    /// Writable cursor on the front element.
    fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let (core, slots) = self.parts_mut();
        core.begin_mut(slots)
    }

    /// Writable cursor one past the back element.
    fn end_mut(&mut self) -> CursorMut<'_, T> {
        let (core, slots) = self.parts_mut();
        core.end_mut(slots)
    }
}
