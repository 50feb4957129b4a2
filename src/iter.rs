use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::index::{wrap_add, wrap_sub};

/// Random-access position inside the logical run of a queue.
///
/// The cursor walks physical slots and keeps a flag telling whether it has run past the
/// end of the storage back to its first slot. On a full queue the past-the-end cursor
/// sits on the same slot as the first element; only the flag tells them apart.
///
/// Cursors are only comparable when they come from the same queue. Moving before
/// [`begin`](crate::RingQueue::begin) or past [`end`](crate::RingQueue::end) is a logic
/// error: no memory is touched out of bounds, but the element returned is unspecified.
pub struct Cursor<'a, T> {
    slots: &'a [T],
    slot: usize,
    wrapped: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [T], slot: usize, wrapped: bool) -> Self {
        Self { slots, slot, wrapped }
    }

    /// Physical slot the cursor points at.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Whether the cursor has run past the end of the storage.
    pub fn has_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Element under the cursor.
    ///
    /// # Panics
    /// If the queue has no slots.
    pub fn get(&self) -> &'a T {
        &self.slots[self.slot]
    }

    pub fn increment(&mut self) {
        *self += 1;
    }

    pub fn decrement(&mut self) {
        *self -= 1;
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.wrapped == other.wrapped
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("slot", &self.slot)
            .field("wrapped", &self.wrapped)
            .finish()
    }
}

// Running past the end of the storage sets the lap flag, running back before its
// start clears it.
fn advance(slot: &mut usize, wrapped: &mut bool, offset: usize, capacity: usize) {
    let (next, lapped) = wrap_add(*slot, offset, capacity);
    *slot = next;
    if lapped {
        *wrapped = true;
    }
}

fn retreat(slot: &mut usize, wrapped: &mut bool, offset: usize, capacity: usize) {
    let (prev, lapped) = wrap_sub(*slot, offset, capacity);
    *slot = prev;
    if lapped {
        *wrapped = false;
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, offset: usize) {
        advance(&mut self.slot, &mut self.wrapped, offset, self.slots.len());
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, offset: usize) {
        retreat(&mut self.slot, &mut self.wrapped, offset, self.slots.len());
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, offset: usize) -> Self {
        self += offset;
        self
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, offset: usize) -> Self {
        self -= offset;
        self
    }
}

/// Random-access position that can write the element under it.
///
/// Moves like [`Cursor`] and compares the same way, but holds the storage exclusively, so
/// only one exists at a time and it never outlives the queue borrow it came from. The
/// past-the-end position is remembered to tell when a walk is finished.
pub struct CursorMut<'a, T> {
    slots: &'a mut [T],
    slot: usize,
    wrapped: bool,
    end: (usize, bool),
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [T], slot: usize, wrapped: bool, end: (usize, bool)) -> Self {
        Self { slots, slot, wrapped, end }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn has_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Whether the cursor sits one past the back element.
    pub fn is_end(&self) -> bool {
        (self.slot, self.wrapped) == self.end
    }

    /// # Panics
    /// If the queue has no slots.
    pub fn get(&self) -> &T {
        &self.slots[self.slot]
    }

    /// # Panics
    /// If the queue has no slots.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.slots[self.slot]
    }

    pub fn increment(&mut self) {
        *self += 1;
    }

    pub fn decrement(&mut self) {
        *self -= 1;
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.wrapped == other.wrapped
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<'a, T> PartialEq<Cursor<'a, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'a, T>) -> bool {
        self.slot == other.slot && self.wrapped == other.wrapped
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("slot", &self.slot)
            .field("wrapped", &self.wrapped)
            .finish()
    }
}

impl<T> AddAssign<usize> for CursorMut<'_, T> {
    fn add_assign(&mut self, offset: usize) {
        advance(&mut self.slot, &mut self.wrapped, offset, self.slots.len());
    }
}

impl<T> SubAssign<usize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, offset: usize) {
        retreat(&mut self.slot, &mut self.wrapped, offset, self.slots.len());
    }
}

/// Front-to-back iterator over the elements of a queue.
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: Cursor<'a, T>, back: Cursor<'a, T>, remaining: usize) -> Self {
        Self { front, back, remaining }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { front: self.front, back: self.back, remaining: self.remaining }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let item = self.front.get();
        self.front.increment();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back.decrement();
        self.remaining -= 1;
        Some(self.back.get())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Front-to-back iterator yielding mutable references.
///
/// The logical run is split into the part between the front slot and the end of the
/// storage, followed by the part that wrapped around to the first slot.
pub struct IterMut<'a, T> {
    head: &'a mut [T],
    wrapped: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: &'a mut [T], wrapped: &'a mut [T]) -> Self {
        Self { head, wrapped }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.head.iter()).entries(self.wrapped.iter()).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let part = if self.head.is_empty() { &mut self.wrapped } else { &mut self.head };
        let (first, rest) = std::mem::take(part).split_first_mut()?;
        *part = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.wrapped.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let part = if self.wrapped.is_empty() { &mut self.head } else { &mut self.wrapped };
        let (last, rest) = std::mem::take(part).split_last_mut()?;
        *part = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
