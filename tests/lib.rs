use std::collections::VecDeque;

use fixed_queue::{drain_into, pop_into, ArrayQueue, FixedQueue, QueueError, RingQueue};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_overwrite_then_pop() {
    init_log();
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(4);
    queue.push_back_all([1, 2, 3, 4]);
    assert_eq!(queue.len(), 4);

    queue.push_back(5);
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.to_vec::<i32>(), vec![2, 3, 4, 5]);

    queue.pop_front(2).unwrap();
    assert_eq!(queue.to_vec::<i32>(), vec![4, 5]);
    assert_eq!(queue.len(), 2);

    assert_eq!(queue.pop_front(3), Err(QueueError::Underflow { requested: 3, len: 2 }));
    assert_eq!(queue.to_vec::<i32>(), vec![4, 5]);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_front_of_empty_queue() {
    init_log();
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(3);
    assert_eq!(queue.front(), Err(QueueError::EmptyAccess));
    assert_eq!(queue.back(), Err(QueueError::EmptyAccess));
    assert_eq!(queue.front_mut(), Err(QueueError::EmptyAccess));
    assert_eq!(queue.avg::<i64>(), Err(QueueError::EmptyAccess));
}

#[test]
fn test_extremum_indices() {
    init_log();
    let mut queue: ArrayQueue<i32, 5> = ArrayQueue::new();
    queue.push_back_all([10, 20, 30]);

    assert_eq!(queue.index_of_max(0), Ok(2));
    assert_eq!(queue.index_of_min(1), Ok(1));
    assert_eq!(queue.max(0), Ok(&30));
    assert_eq!(queue.min(0), Ok(&10));
    assert_eq!(queue.max(3), Err(QueueError::OutOfRange { index: 3, len: 3 }));
}

#[test]
fn test_extremum_ties_keep_first() {
    let mut queue: FixedQueue<u8> = FixedQueue::with_capacity(4);
    queue.push_back_all([9u8, 5, 1, 9, 1, 5]);
    // Logical content [1, 9, 1, 5], wrapped around the storage.
    assert_eq!(queue.index_of_max(0), Ok(1));
    assert_eq!(queue.index_of_min(0), Ok(0));
    assert_eq!(queue.index_of_min(1), Ok(2));
}

#[test]
fn test_checked_access() {
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(3);
    queue.push_back_all([1, 2, 3, 4]);
    assert_eq!(queue.get(0), Ok(&2));
    assert_eq!(queue.get(2), Ok(&4));
    assert_eq!(queue.get(3), Err(QueueError::OutOfRange { index: 3, len: 3 }));

    *queue.get_mut(1).unwrap() = 30;
    *queue.front_mut().unwrap() = 20;
    *queue.back_mut().unwrap() = 40;
    assert_eq!(queue.to_vec::<i32>(), vec![20, 30, 40]);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(3);
    queue.push_back_all([1, 2, 3, 4]);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 3);
    assert_eq!(queue.begin(), queue.end());

    queue.push_back(7);
    assert_eq!(queue.to_vec::<i32>(), vec![7]);
}

#[test]
fn test_occupancy_and_fifo_against_model() {
    init_log();
    let mut rng = StdRng::seed_from_u64(42);

    for capacity in 1..8 {
        let mut queue: FixedQueue<u32> = FixedQueue::with_capacity(capacity);
        let mut model: VecDeque<u32> = VecDeque::new();

        for step in 0..500 {
            if rng.gen_bool(0.6) {
                let value = rng.gen();
                queue.push_back(value);
                if model.len() == capacity {
                    model.pop_front();
                }
                model.push_back(value);
            } else {
                let count = rng.gen_range(0..=capacity);
                let result = queue.pop_front(count);
                if count > model.len() {
                    assert_eq!(result, Err(QueueError::Underflow { requested: count, len: model.len() }));
                } else {
                    assert_eq!(result, Ok(()));
                    for _ in 0..count {
                        model.pop_front();
                    }
                }
            }

            assert!(queue.len() <= queue.capacity());
            assert_eq!(queue.len(), model.len(), "capacity {}, step {}", capacity, step);
            assert!(queue.iter().eq(model.iter()), "capacity {}, step {}", capacity, step);
            assert!(queue.iter().rev().eq(model.iter().rev()));
        }
    }
}

#[test]
fn test_overwrite_on_full_evicts_front() {
    for capacity in 1..6 {
        let mut queue: FixedQueue<usize> = FixedQueue::with_capacity(capacity);
        queue.push_back_all(0..capacity);

        for value in capacity..capacity * 3 {
            let evicted = *queue.front().unwrap();
            queue.push_back(value);
            assert_eq!(queue.len(), capacity);
            assert_eq!(queue.back(), Ok(&value));
            assert!(queue.iter().all(|&v| v != evicted));
        }
    }
}

#[test]
fn test_iterator_lap_for_every_fill_level() {
    for capacity in 0..6 {
        for fill in 0..=capacity {
            for shift in 0..capacity.max(1) {
                let mut queue: FixedQueue<usize> = FixedQueue::with_capacity(capacity);
                // Moves the front `shift` slots away from the first slot.
                queue.push_back_all(0..shift);
                queue.pop_front(shift).unwrap();
                queue.push_back_all(100..100 + fill);

                let values: Vec<usize> = queue.iter().copied().collect();
                let expected: Vec<usize> = (100..100 + fill).collect();
                assert_eq!(values, expected, "capacity {}, fill {}, shift {}", capacity, fill, shift);

                let mut cursor = queue.begin();
                let mut visited = 0;
                while cursor != queue.end() {
                    assert_eq!(*cursor.get(), 100 + visited);
                    cursor.increment();
                    visited += 1;
                }
                assert_eq!(visited, fill);
            }
        }
    }
}

#[test]
fn test_round_trip_through_vec() {
    let mut queue: ArrayQueue<i16, 6> = ArrayQueue::new();
    queue.push_back_all([-3i16, 8, 1, 4, 9, -2, 7, 5]);
    let values = queue.to_vec::<i16>();

    let mut copy = queue.clone();
    copy.clear();
    copy.push_back_all(values.iter().copied());
    assert!(copy.iter().eq(queue.iter()));

    let boxed: Box<[i32]> = queue.to_boxed_slice();
    assert_eq!(&boxed[..], &[1, 4, 9, -2, 7, 5]);
}

#[test]
fn test_push_from_other_queue() {
    let mut source: ArrayQueue<u8, 3> = ArrayQueue::new();
    source.push_back_all([1u8, 2, 3, 4]);

    let mut target: FixedQueue<u32> = FixedQueue::with_capacity(4);
    target.push_back(0);
    target.push_back_queue(&source);
    assert_eq!(target.to_vec::<u32>(), vec![0, 2, 3, 4]);

    target.extend([5, 6]);
    target.extend(&[7]);
    assert_eq!(target.to_vec::<u64>(), vec![4, 5, 6, 7]);
}

#[test]
fn test_avg_matches_avg_huge() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(64);
    for _ in 0..100 {
        queue.push_back(rng.gen_range(-1000..1000));
    }

    let precise: f64 = queue.avg().unwrap();
    let huge: f64 = queue.avg_huge().unwrap();
    assert!((precise - huge).abs() < 1e-6, "{} != {}", precise, huge);

    let integer: i64 = queue.avg().unwrap();
    assert!((integer as f64 - precise).abs() < 1.0);
}

#[test]
fn test_avg_huge_survives_large_sums() {
    let mut queue: FixedQueue<u32> = FixedQueue::with_capacity(4);
    queue.push_back_all([u32::MAX; 4]);

    // Summing in u32 would overflow, dividing first stays in range.
    let avg: u32 = queue.avg_huge().unwrap();
    assert_eq!(avg, u32::MAX / 4 * 4);

    let precise: u64 = queue.avg().unwrap();
    assert_eq!(precise, u32::MAX as u64);
}

#[test]
fn test_avg_rejects_length_beyond_accumulator() {
    init_log();
    let mut queue: FixedQueue<u8> = FixedQueue::with_capacity(256);
    queue.push_back_all([0u8; 256]);
    assert_eq!(queue.avg::<u8>(), Err(QueueError::LengthOverflow { len: 256 }));
    assert_eq!(queue.avg::<u16>(), Ok(0));

    let mut queue: FixedQueue<u8> = FixedQueue::with_capacity(300);
    queue.push_back_all([200u8; 300]);
    assert_eq!(queue.avg_huge::<u8>(), Err(QueueError::LengthOverflow { len: 300 }));
    assert_eq!(queue.avg::<u16>(), Ok(200));

    let mut queue: FixedQueue<i8> = FixedQueue::with_capacity(200);
    queue.push_back_all([100i8; 200]);
    assert_eq!(queue.avg_huge::<i8>(), Err(QueueError::LengthOverflow { len: 200 }));
    assert_eq!(queue.avg::<i32>(), Ok(100));
}

#[test]
fn test_cursor_mut_on_wrapped_queue() {
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(4);
    queue.push_back_all(1..=6);
    assert_eq!(queue.begin().slot(), 2);

    let mut cursor = queue.begin_mut();
    while !cursor.is_end() {
        *cursor.get_mut() *= 10;
        cursor += 1;
    }
    assert_eq!(queue.to_vec::<i32>(), vec![30, 40, 50, 60]);

    let mut cursor = queue.end_mut();
    cursor -= 2;
    assert!(cursor.has_wrapped());
    *cursor.get_mut() = -1;
    cursor -= 2;
    assert!(!cursor.has_wrapped());
    *cursor.get_mut() = -2;
    assert_eq!(queue.to_vec::<i32>(), vec![-2, 40, -1, 60]);
}

#[test]
fn test_stream_glue() {
    init_log();
    let mut queue: FixedQueue<u16> = FixedQueue::with_capacity(3);
    queue.push_back_all([1u16, 2, 3, 4]);
    assert_eq!(queue.to_string(), "[2, 3, 4]");

    let mut first = 0u32;
    pop_into(&mut queue, &mut first).unwrap();
    assert_eq!(first, 2);

    let mut rest: Vec<u32> = Vec::new();
    assert_eq!(drain_into(&mut queue, &mut rest), 2);
    assert_eq!(rest, vec![3, 4]);
    assert!(queue.is_empty());
}

#[test]
fn test_resize_keeps_newest() {
    init_log();
    let mut queue: FixedQueue<i32> = FixedQueue::with_capacity(5);
    queue.push_back_all(1..=7);
    assert_eq!(queue.to_vec::<i32>(), vec![3, 4, 5, 6, 7]);

    queue.resize(3);
    assert_eq!(queue.to_vec::<i32>(), vec![5, 6, 7]);
    assert!(queue.is_full());

    queue.resize(6);
    queue.push_back_all([8, 9]);
    assert_eq!(queue.to_vec::<i32>(), vec![5, 6, 7, 8, 9]);
}
