use crate::error::QueueError;
use crate::index::{project, wrap_add};
use crate::iter::{Cursor, CursorMut, Iter, IterMut};

/// Bookkeeping of a circular buffer: where the logical front sits and how many
/// slots after it hold live elements.
///
/// The core owns no memory. Every operation borrows the storage whose length is the
/// capacity, so the same engine runs over a boxed slice or an inline array.
///
/// ```text
/// capacity 4, push 5 into [1, 2, 3, 4]
///
///  F        B           B  F
///  |        |           |  |
/// [1, 2, 3, 4]   ->    [5, 2, 3, 4]
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RingCore {
    front: usize,
    len: usize,
}

impl RingCore {
    /// Core for storage whose first `len` slots already hold the logical run.
    pub(crate) fn with_len(len: usize) -> Self {
        Self { front: 0, len }
    }

    #[inline]
    pub fn front_slot(&self) -> usize {
        self.front
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn push_back<T>(&mut self, slots: &mut [T], elem: T) {
        let capacity = slots.len();
        if capacity == 0 {
            log::trace!("Discarded element pushed into a queue without slots");
            return;
        }

        if self.len < capacity {
            slots[project(self.front, self.len, capacity)] = elem;
            self.len += 1;
        } else {
            // Full, the newest element takes the place of the oldest one.
            slots[self.front] = elem;
            self.front = project(self.front, 1, capacity);
        }
    }

    pub(crate) fn pop_front(&mut self, capacity: usize, count: usize) -> Result<(), QueueError> {
        if count > self.len {
            return Err(QueueError::Underflow { requested: count, len: self.len });
        }
        if count == 0 {
            return Ok(());
        }

        self.front = project(self.front, count, capacity);
        self.len -= count;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.front = 0;
        self.len = 0;
    }

    /// Physical slot of the element at logical `index`.
    pub(crate) fn slot(&self, capacity: usize, index: usize) -> Result<usize, QueueError> {
        if index >= self.len {
            return Err(QueueError::OutOfRange { index, len: self.len });
        }
        Ok(project(self.front, index, capacity))
    }

    pub(crate) fn front_index(&self) -> Result<usize, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyAccess);
        }
        Ok(self.front)
    }

    pub(crate) fn back_index(&self, capacity: usize) -> Result<usize, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyAccess);
        }
        Ok(project(self.front, self.len - 1, capacity))
    }

    /// Logical index of the first element from `offset` that no later element beats.
    ///
    /// `replaces(candidate, current)` must only return true when the candidate is strictly
    /// better, so ties keep the earliest occurrence.
    pub(crate) fn scan<T, F>(&self, slots: &[T], offset: usize, replaces: F) -> Result<usize, QueueError>
    where
        F: Fn(&T, &T) -> bool,
    {
        if offset >= self.len {
            return Err(QueueError::OutOfRange { index: offset, len: self.len });
        }

        let capacity = slots.len();
        let mut best = offset;
        for index in offset + 1..self.len {
            let candidate = &slots[project(self.front, index, capacity)];
            let current = &slots[project(self.front, best, capacity)];
            if replaces(candidate, current) {
                best = index;
            }
        }

        Ok(best)
    }

    pub(crate) fn begin<'a, T>(&self, slots: &'a [T]) -> Cursor<'a, T> {
        Cursor::new(slots, self.front, false)
    }

    pub(crate) fn end<'a, T>(&self, slots: &'a [T]) -> Cursor<'a, T> {
        let (slot, wrapped) = wrap_add(self.front, self.len, slots.len());
        Cursor::new(slots, slot, wrapped)
    }

    pub(crate) fn begin_mut<'a, T>(&self, slots: &'a mut [T]) -> CursorMut<'a, T> {
        let end = wrap_add(self.front, self.len, slots.len());
        CursorMut::new(slots, self.front, false, end)
    }

    pub(crate) fn end_mut<'a, T>(&self, slots: &'a mut [T]) -> CursorMut<'a, T> {
        let (slot, wrapped) = wrap_add(self.front, self.len, slots.len());
        CursorMut::new(slots, slot, wrapped, (slot, wrapped))
    }

    pub(crate) fn iter<'a, T>(&self, slots: &'a [T]) -> Iter<'a, T> {
        Iter::new(self.begin(slots), self.end(slots), self.len)
    }

    pub(crate) fn iter_mut<'a, T>(&self, slots: &'a mut [T]) -> IterMut<'a, T> {
        let (wrapped, head) = slots.split_at_mut(self.front);
        let head_len = self.len.min(head.len());
        let wrapped_len = self.len - head_len;
        IterMut::new(&mut head[..head_len], &mut wrapped[..wrapped_len])
    }
}
