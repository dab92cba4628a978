//! Animation algebra
//!
//! An [`Animation`] is a pure mapping from normalized time and pixel
//! position to a color. Primitives (`Flash`, `Spinner`, `Rainbow`)
//! produce color; combinators reshape the time axis or blend children
//! without adding new color logic. Malformed compositions are rejected
//! at construction so the render loop only ever sees total functions.

mod baked;
mod combinator;
mod flash;
mod rainbow;
mod spinner;

pub use baked::Baked;
pub use combinator::{Concatenated, Mixed, Remapped, Reversed, SpeedAdjusted, TimeShifted};
pub use flash::Flash;
pub use rainbow::Rainbow;
pub use spinner::Spinner;

use libm::floorf;

use crate::color::ColorF;

/// A pure mapping from normalized time and pixel position to a color.
///
/// `t` and `position` are fractions in `[0, 1]` of the animation cycle
/// and of the pixel chain respectively. Evaluation is total: it never
/// fails over that domain.
pub trait Animation {
    fn evaluate(&self, t: f32, position: f32) -> ColorF;
}

impl<A: Animation + ?Sized> Animation for &A {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        (**self).evaluate(t, position)
    }
}

/// Provides the base color for color-parameterized animations.
pub trait ColorSource {
    fn color(&self) -> ColorF;
}

/// A fixed color source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantColor(pub ColorF);

impl ColorSource for ConstantColor {
    fn color(&self) -> ColorF {
        self.0
    }
}

impl ColorSource for ColorF {
    fn color(&self) -> ColorF {
        *self
    }
}

/// Rejected construction parameters for animation combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A set combinator was given no children.
    EmptyChildren,
    /// A remap interval where `t0 >= t1`.
    InvalidInterval,
    /// A bake grid with zero steps on one axis.
    ZeroResolution,
}

/// Wrap a value into `[0, 1)`, for negative inputs too.
pub(crate) fn wrap_unit(value: f32) -> f32 {
    value - floorf(value)
}
