use std::ops::{Index, IndexMut};

use crate::iter::{Iter, IterMut};
use crate::queue::RingQueue;
use crate::ring::RingCore;

/// Queue over a heap allocated storage whose capacity is chosen at runtime.
///
/// Pushing into a full queue overwrites the oldest element, no element is ever moved
/// except by [`resize`](FixedQueue::resize).
#[derive(Clone)]
pub struct FixedQueue<T> {
    core: RingCore,
    slots: Box<[T]>,
}

fn allocate<T: Default>(capacity: usize) -> Box<[T]> {
    (0..capacity).map(|_| T::default()).collect()
}

impl<T: Default> FixedQueue<T> {
    /// Creates a queue without slots, use [`resize`](FixedQueue::resize) to give it room.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: RingCore::default(),
            slots: allocate(capacity),
        }
    }

    /// Moves the elements into a new storage of `capacity` slots, with the front at the
    /// first slot. When shrinking, the oldest elements are dropped first.
    ///
    /// Cursors and references into the old storage cannot outlive this call.
    pub fn resize(&mut self, capacity: usize) {
        let mut slots = allocate(capacity);
        let len = self.core.len();
        let dropped = len.saturating_sub(capacity);

        let values = self.core.iter_mut(&mut self.slots).skip(dropped);
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = std::mem::take(value);
        }

        log::trace!(
            "Resized queue from {} to {} slots, dropped {} elements.",
            self.slots.len(),
            capacity,
            dropped
        );
        self.core = RingCore::with_len(len - dropped);
        self.slots = slots;
    }
}

impl<T: Default> Default for FixedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Full queue holding the vector elements, with a capacity equal to their count.
impl<T> From<Vec<T>> for FixedQueue<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            core: RingCore::with_len(values.len()),
            slots: values.into_boxed_slice(),
        }
    }
}

impl<T> RingQueue<T> for FixedQueue<T> {
    fn parts(&self) -> (&RingCore, &[T]) {
        (&self.core, &self.slots[..])
    }

    fn parts_mut(&mut self) -> (&mut RingCore, &mut [T]) {
        (&mut self.core, &mut self.slots[..])
    }
}

impl<T> Index<usize> for FixedQueue<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for FixedQueue<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a FixedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
