//! Asynchronous half-open integer range.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use ripix::arange;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ripix::RipixResult<()> {
//! let evens: Vec<i32> = arange((10, 0, -2))?.collect().await;
//! assert_eq!(evens, vec![10, 8, 6, 4, 2]);
//!
//! // A zero step is rejected before any value is pulled.
//! assert!(arange((1, 5, 0)).is_err());
//! # Ok(())
//! # }
//! ```

use crate::error::{RipixError, RipixResult};
use crate::runtime::YieldPoint;
use futures::Stream;
use log::{debug, trace};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Integer types an [`ARange`] can count over.
pub trait RangeInt: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + 'static {
    const ZERO: Self;

    const ONE: Self;

    fn is_negative(self) -> bool;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Number of values left when counting from `current` towards `stop`.
    ///
    /// Only meaningful when the range is non-empty.
    fn remaining(current: Self, stop: Self, step: Self) -> u128;
}

macro_rules! impl_range_int_signed {
    ($($t:ty),* $(,)?) => {$(
        impl RangeInt for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn remaining(current: Self, stop: Self, step: Self) -> u128 {
                (current.abs_diff(stop) as u128).div_ceil(step.unsigned_abs() as u128)
            }
        }
    )*};
}

macro_rules! impl_range_int_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl RangeInt for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn remaining(current: Self, stop: Self, step: Self) -> u128 {
                (current.abs_diff(stop) as u128).div_ceil(step as u128)
            }
        }
    )*};
}

impl_range_int_signed!(i8, i16, i32, i64, i128, isize);
impl_range_int_unsigned!(u8, u16, u32, u64, u128, usize);

/// Positional arguments accepted by [`arange`].
///
/// Implemented for `stop`, `(start, stop)` and `(start, stop, step)`.
pub trait RangeArgs {
    type Int: RangeInt;

    /// Expand into `(start, stop, step)`, filling in the defaults.
    fn into_bounds(self) -> (Self::Int, Self::Int, Self::Int);
}

macro_rules! impl_range_args {
    ($($t:ty),* $(,)?) => {$(
        impl RangeArgs for $t {
            type Int = $t;

            #[inline]
            fn into_bounds(self) -> ($t, $t, $t) {
                (0, self, 1)
            }
        }

        impl RangeArgs for ($t, $t) {
            type Int = $t;

            #[inline]
            fn into_bounds(self) -> ($t, $t, $t) {
                (self.0, self.1, 1)
            }
        }

        impl RangeArgs for ($t, $t, $t) {
            type Int = $t;

            #[inline]
            fn into_bounds(self) -> ($t, $t, $t) {
                self
            }
        }
    )*};
}

impl_range_args!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Stream of integers `start, start + step, ...` up to, but excluding, `stop`.
///
/// Counts upwards while below `stop` for a positive step and downwards while
/// above `stop` for a negative one. The step is never zero; construction
/// rejects it. Each pull suspends once before producing its value.
///
/// Single-use: iterate again by building a new range. Not `Clone`, so a
/// partly consumed range cannot be replayed.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct ARange<T> {
    /// Next value to produce; `None` once stepping overflowed the type.
    current: Option<T>,
    stop: T,
    step: T,
    yield_point: YieldPoint,
    done: bool,
}

impl<T> Unpin for ARange<T> {}

/// Build an [`ARange`] from `stop`, `(start, stop)` or `(start, stop, step)`.
///
/// # Errors
///
/// Returns [`RipixError::InvalidArgument`] when `step` is zero.
pub fn arange<A: RangeArgs>(args: A) -> RipixResult<ARange<A::Int>> {
    let (start, stop, step) = args.into_bounds();
    ARange::new(start, stop, step)
}

impl<T: RangeInt> ARange<T> {
    /// Create a range with an explicit step.
    ///
    /// # Errors
    ///
    /// Returns [`RipixError::InvalidArgument`] when `step` is zero.
    pub fn new(start: T, stop: T, step: T) -> RipixResult<Self> {
        if step == T::ZERO {
            debug!("arange: rejected zero step (start={start}, stop={stop})");
            return Err(RipixError::invalid_argument("arange() step must not be zero"));
        }
        trace!("arange: start={start} stop={stop} step={step}");
        Ok(Self {
            current: Some(start),
            stop,
            step,
            yield_point: YieldPoint::default(),
            done: false,
        })
    }

    /// Create a new range builder
    #[must_use]
    pub fn builder() -> RangeBuilder<T> {
        RangeBuilder::new()
    }

    #[must_use]
    pub fn stop(&self) -> T {
        self.stop
    }

    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }

    /// True when no further values will be produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }

    /// Number of values still to be produced.
    #[must_use]
    pub fn remaining(&self) -> u128 {
        match self.peek() {
            Some(current) => T::remaining(current, self.stop, self.step),
            None => 0,
        }
    }

    /// The value the next pull would produce, if any.
    fn peek(&self) -> Option<T> {
        if self.done {
            return None;
        }
        let current = self.current?;
        let in_bounds = if self.step.is_negative() {
            current > self.stop
        } else {
            current < self.stop
        };
        in_bounds.then_some(current)
    }
}

impl<T: RangeInt> Stream for ARange<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        futures::ready!(self.yield_point.poll_yield(cx));

        match self.peek() {
            Some(value) => {
                let step = self.step;
                self.current = value.checked_add(step);
                Poll::Ready(Some(value))
            }
            None => {
                trace!("arange: exhausted at stop={}", self.stop);
                self.done = true;
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: RangeInt> futures::stream::FusedStream for ARange<T> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Builder for [`ARange`].
///
/// `start` defaults to zero and `step` to one; `stop` is required.
#[derive(Debug, Clone)]
pub struct RangeBuilder<T> {
    start: T,
    stop: Option<T>,
    step: T,
}

impl<T: RangeInt> RangeBuilder<T> {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: T::ZERO,
            stop: None,
            step: T::ONE,
        }
    }

    #[must_use]
    pub fn start(mut self, start: T) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn stop(mut self, stop: T) -> Self {
        self.stop = Some(stop);
        self
    }

    #[must_use]
    pub fn step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Build the range
    ///
    /// # Errors
    ///
    /// Returns [`RipixError::InvalidArgument`] when `stop` was never set or
    /// `step` is zero.
    pub fn build(self) -> RipixResult<ARange<T>> {
        let stop = self
            .stop
            .ok_or_else(|| RipixError::invalid_argument("arange() stop is required"))?;
        ARange::new(self.start, stop, self.step)
    }
}

impl<T: RangeInt> Default for RangeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
