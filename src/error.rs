use thiserror::Error;

/// Errors reported by queue operations. No operation does partial work before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Accessed the front or back of a queue without elements.
    #[error("tried to access an element of an empty queue")]
    EmptyAccess,
    /// Logical index at or beyond the current length.
    #[error("index {index} is out of range for queue with length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Popped more elements than the queue holds.
    #[error("tried to pop {requested} elements from queue with length {len}")]
    Underflow { requested: usize, len: usize },
    /// The queue length cannot be represented by the accumulator of an average.
    #[error("queue length {len} does not fit in the accumulator type")]
    LengthOverflow { len: usize },
    /// The storage cannot hold the elements it was built from.
    #[error("queue with capacity {capacity} cannot hold {required} elements")]
    CapacityViolation { capacity: usize, required: usize },
}
