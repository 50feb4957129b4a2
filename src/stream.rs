//! Moving elements between queues and plain containers, and printing them.

use std::fmt;

use crate::array_queue::ArrayQueue;
use crate::error::QueueError;
use crate::fixed_queue::FixedQueue;
use crate::queue::RingQueue;

/// Stores the front element into `target` and pops it.
/// On an empty queue `target` is left untouched.
pub fn pop_into<T, U, Q>(queue: &mut Q, target: &mut U) -> Result<(), QueueError>
where
    Q: RingQueue<T> + ?Sized,
    T: Clone,
    U: From<T>,
{
    *target = U::from(queue.front()?.clone());
    queue.pop_front(1)
}

/// Pops the front element and returns it.
pub fn take_front<T, Q>(queue: &mut Q) -> Result<T, QueueError>
where
    Q: RingQueue<T> + ?Sized,
    T: Clone,
{
    let value = queue.front()?.clone();
    queue.pop_front(1)?;
    Ok(value)
}

/// Pops every element into `target`, front first. Returns how many were moved.
pub fn drain_into<T, U, Q>(queue: &mut Q, target: &mut Vec<U>) -> usize
where
    Q: RingQueue<T> + ?Sized,
    T: Clone,
    U: From<T>,
{
    let count = queue.len();
    target.reserve(count);
    target.extend(queue.iter().cloned().map(U::from));
    queue.clear();
    count
}

/// Pops elements into `target` until either the queue is empty or the slice is filled.
/// Returns how many were moved.
pub fn drain_into_slice<T, U, Q>(queue: &mut Q, target: &mut [U]) -> Result<usize, QueueError>
where
    Q: RingQueue<T> + ?Sized,
    T: Clone,
    U: From<T>,
{
    let count = queue.len().min(target.len());
    for (slot, value) in target.iter_mut().zip(queue.iter()) {
        *slot = U::from(value.clone());
    }

    queue.pop_front(count)?;
    Ok(count)
}

fn fmt_display<T, Q>(queue: &Q, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    Q: RingQueue<T> + ?Sized,
    T: fmt::Display,
{
    write!(f, "[")?;
    for (i, value) in queue.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

impl<T> Extend<T> for FixedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_all(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for FixedQueue<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push_back_all(iter.into_iter().copied());
    }
}

impl<T: fmt::Display> fmt::Display for FixedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Extend<T> for ArrayQueue<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_all(iter);
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for ArrayQueue<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push_back_all(iter.into_iter().copied());
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for ArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self, f)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
