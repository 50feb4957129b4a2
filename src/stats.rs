use std::ops::{Add, Div};

use crate::error::QueueError;

/// Numeric type able to hold the running sum used by the averaging scans.
///
/// The accumulator should be wide enough for the sum of every element when used with
/// [`avg`](crate::RingQueue::avg). Use a floating point accumulator with
/// [`avg_huge`](crate::RingQueue::avg_huge) when no such type exists.
pub trait Accumulator: Copy + Add<Output = Self> + Div<Output = Self> {
    const ZERO: Self;

    /// Converts the queue length into the accumulator type, `None` when it does not fit.
    fn from_len(len: usize) -> Option<Self>;
}

macro_rules! impl_int_accumulator {
    ($($ty:ty),*) => {
        $(
            impl Accumulator for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn from_len(len: usize) -> Option<Self> {
                    <$ty>::try_from(len).ok()
                }
            }
        )*
    };
}

macro_rules! impl_float_accumulator {
    ($($ty:ty),*) => {
        $(
            impl Accumulator for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn from_len(len: usize) -> Option<Self> {
                    Some(len as $ty)
                }
            }
        )*
    };
}

impl_int_accumulator!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_accumulator!(f32, f64);

fn divisor<A: Accumulator>(len: usize) -> Result<A, QueueError> {
    match A::from_len(len) {
        Some(divisor) => Ok(divisor),
        None => Err(QueueError::LengthOverflow { len }),
    }
}

/// Sums every element in `A` and divides once at the end.
pub(crate) fn average<'a, T, A, I>(values: I, len: usize) -> Result<A, QueueError>
where
    T: Clone + 'a,
    A: Accumulator + From<T>,
    I: Iterator<Item = &'a T>,
{
    let len = divisor::<A>(len)?;
    let sum = values.fold(A::ZERO, |sum, value| sum + A::from(value.clone()));
    Ok(sum / len)
}

/// Divides every element by `len` before adding it, trading precision for overflow resistance.
pub(crate) fn average_huge<'a, T, A, I>(values: I, len: usize) -> Result<A, QueueError>
where
    T: Clone + 'a,
    A: Accumulator + From<T>,
    I: Iterator<Item = &'a T>,
{
    let len = divisor::<A>(len)?;
    Ok(values.fold(A::ZERO, |sum, value| sum + A::from(value.clone()) / len))
}
