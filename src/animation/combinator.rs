//! Combinators over the animation algebra.
//!
//! Single-child combinators own their child by value and compose by
//! nesting generics. Set combinators (`Mixed`, `Concatenated`) borrow a
//! slice of trait objects so children of different types can share one
//! set; the slice must outlive the combinator.

use super::{Animation, BuildError, wrap_unit};
use crate::color::ColorF;

/// Plays `inner` with its time axis shifted by `offset`.
///
/// The shift wraps modulo 1 and may be negative.
#[derive(Debug, Clone)]
pub struct TimeShifted<A: Animation> {
    inner: A,
    offset: f32,
}

impl<A: Animation> TimeShifted<A> {
    pub fn new(inner: A, offset: f32) -> Self {
        Self { inner, offset }
    }
}

impl<A: Animation> Animation for TimeShifted<A> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        self.inner.evaluate(wrap_unit(t + self.offset), position)
    }
}

/// Plays `inner` with its time axis multiplied by `speed`.
///
/// `speed` above 1 accelerates, below 1 slows; the scaled time always
/// wraps back into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SpeedAdjusted<A: Animation> {
    inner: A,
    speed: f32,
}

impl<A: Animation> SpeedAdjusted<A> {
    pub fn new(inner: A, speed: f32) -> Self {
        Self { inner, speed }
    }
}

impl<A: Animation> Animation for SpeedAdjusted<A> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        self.inner.evaluate(wrap_unit(t * self.speed), position)
    }
}

/// Plays `inner` backwards in time.
#[derive(Debug, Clone)]
pub struct Reversed<A: Animation> {
    inner: A,
}

impl<A: Animation> Reversed<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: Animation> Animation for Reversed<A> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        self.inner.evaluate(1.0 - t, position)
    }
}

/// Plays the `[t0, t1]` window of `inner` over the whole cycle.
///
/// Input time is clamped into the window, then rescaled so that `t0`
/// maps to 0 and `t1` maps to 1 before delegating.
#[derive(Debug, Clone)]
pub struct Remapped<A: Animation> {
    inner: A,
    t0: f32,
    t1: f32,
}

impl<A: Animation> Remapped<A> {
    /// Requires `t0 < t1`.
    pub fn new(inner: A, t0: f32, t1: f32) -> Result<Self, BuildError> {
        // The comparison also rejects NaN endpoints.
        if !(t0 < t1) {
            return Err(BuildError::InvalidInterval);
        }
        Ok(Self { inner, t0, t1 })
    }
}

impl<A: Animation> Animation for Remapped<A> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        let clamped = t.clamp(self.t0, self.t1);
        let local = (clamped - self.t0) / (self.t1 - self.t0);
        self.inner.evaluate(local, position)
    }
}

/// Additive blend of a set of animations.
///
/// Every child is evaluated at the same `(t, position)` and the results
/// are summed per channel. The sum is left unclamped; it saturates when
/// the frame is converted to device bytes.
#[derive(Clone, Copy)]
pub struct Mixed<'a> {
    children: &'a [&'a dyn Animation],
}

impl<'a> Mixed<'a> {
    /// Requires at least one child.
    pub fn new(children: &'a [&'a dyn Animation]) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::EmptyChildren);
        }
        Ok(Self { children })
    }
}

impl Animation for Mixed<'_> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        self.children
            .iter()
            .fold(ColorF::BLACK, |sum, child| sum + child.evaluate(t, position))
    }
}

/// Plays a set of animations back to back within one cycle.
///
/// The cycle is divided into equal segments, one per child, and each
/// segment is remapped linearly to the child's full `[0, 1]` time axis.
/// `t = 1.0` belongs to the last segment.
#[derive(Clone, Copy)]
pub struct Concatenated<'a> {
    children: &'a [&'a dyn Animation],
}

impl<'a> Concatenated<'a> {
    /// Requires at least one child.
    pub fn new(children: &'a [&'a dyn Animation]) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::EmptyChildren);
        }
        Ok(Self { children })
    }
}

impl Animation for Concatenated<'_> {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        let count = self.children.len();
        let scaled = t.max(0.0) * count as f32;
        let segment = (scaled as usize).min(count - 1);
        let local = scaled - segment as f32;
        self.children[segment].evaluate(local, position)
    }
}
