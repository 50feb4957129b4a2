//! Fixed-capacity circular queues for bounded-memory streaming.
//!
//! Pushing into a full queue overwrites the oldest element instead of growing, and no
//! element is moved by ordinary operations. The storage is owned either by a
//! [`FixedQueue`] (heap, resizable) or an [`ArrayQueue`] (inline array); both share the
//! operations of [`RingQueue`].
//!
//! ```
//! use fixed_queue::{FixedQueue, RingQueue};
//!
//! let mut window: FixedQueue<i32> = FixedQueue::with_capacity(4);
//! window.push_back_all([1, 2, 3, 4, 5]);
//!
//! assert_eq!(window.to_vec::<i32>(), vec![2, 3, 4, 5]);
//! assert_eq!(window.avg::<i64>(), Ok(3));
//! assert_eq!(window.index_of_max(0), Ok(3));
//! ```

mod array_queue;
mod error;
mod fixed_queue;
mod index;
mod iter;
mod queue;
mod ring;
mod stats;
pub mod stream;

pub use array_queue::ArrayQueue;
pub use error::QueueError;
pub use fixed_queue::FixedQueue;
pub use iter::{Cursor, CursorMut, Iter, IterMut};
pub use queue::RingQueue;
pub use ring::RingCore;
pub use stats::Accumulator;
pub use stream::{drain_into, drain_into_slice, pop_into, take_front};
