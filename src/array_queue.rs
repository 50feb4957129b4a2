use std::ops::{Index, IndexMut};

use crate::error::QueueError;
use crate::iter::{Iter, IterMut};
use crate::queue::RingQueue;
use crate::ring::RingCore;

/// Queue over an inline array of `N` slots.
///
/// The capacity is part of the type and the storage never moves, so it lives as long
/// as the queue itself. A queue without slots does not compile:
///
/// ```compile_fail
/// use fixed_queue::ArrayQueue;
///
/// let queue: ArrayQueue<u8, 0> = ArrayQueue::new();
/// ```
///
/// ```
/// use fixed_queue::{ArrayQueue, RingQueue};
///
/// let mut queue: ArrayQueue<u8, 1> = ArrayQueue::new();
/// queue.push_back(3);
/// assert_eq!(queue.front(), Ok(&3));
/// ```
#[derive(Clone)]
pub struct ArrayQueue<T, const N: usize> {
    core: RingCore,
    slots: [T; N],
}

impl<T, const N: usize> ArrayQueue<T, N> {
    const HAS_SLOTS: () = assert!(N > 0, "tried to initialize ArrayQueue with 0 slots");
}

impl<T: Default, const N: usize> ArrayQueue<T, N> {
    pub fn new() -> Self {
        let () = Self::HAS_SLOTS;

        Self {
            core: RingCore::default(),
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for ArrayQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue holding the vector elements front to back, failing when they do not fit in `N` slots.
impl<T: Default, const N: usize> TryFrom<Vec<T>> for ArrayQueue<T, N> {
    type Error = QueueError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        if values.len() > N {
            return Err(QueueError::CapacityViolation { capacity: N, required: values.len() });
        }

        let mut queue = Self::new();
        queue.push_back_all(values);
        Ok(queue)
    }
}

impl<T, const N: usize> RingQueue<T> for ArrayQueue<T, N> {
    fn parts(&self) -> (&RingCore, &[T]) {
        (&self.core, &self.slots[..])
    }

    fn parts_mut(&mut self) -> (&mut RingCore, &mut [T]) {
        (&mut self.core, &mut self.slots[..])
    }
}

impl<T, const N: usize> Index<usize> for ArrayQueue<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for ArrayQueue<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ArrayQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut ArrayQueue<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
