use libm::{floorf, fmodf};

use super::{Animation, ColorSource};
use crate::color::ColorF;

const DEFAULT_FAST_RATE: f32 = 12.0;
const DEFAULT_FAST_PERIOD: f32 = 2.0;
const DEFAULT_SLOW_RATE: f32 = 2.0;
const DEFAULT_SLOW_PERIOD: f32 = 2.0;

/// Uniform on/off pulse over the whole chain.
///
/// Brightness follows `min(1 - (floor(a*t) mod b), 1 - (floor(c*t) mod d))`,
/// the product of two square waves: a fast burst gated by a slower duty
/// cycle. Pixel position is ignored, so every pixel flashes in unison.
#[derive(Debug, Clone)]
pub struct Flash<S: ColorSource> {
    source: S,
    fast_rate: f32,
    fast_period: f32,
    slow_rate: f32,
    slow_period: f32,
}

impl<S: ColorSource> Flash<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fast_rate: DEFAULT_FAST_RATE,
            fast_period: DEFAULT_FAST_PERIOD,
            slow_rate: DEFAULT_SLOW_RATE,
            slow_period: DEFAULT_SLOW_PERIOD,
        }
    }

    /// Set the fast square wave. A `period` of 1.0 keeps it always on.
    #[must_use]
    pub fn with_fast(mut self, rate: f32, period: f32) -> Self {
        self.fast_rate = rate;
        self.fast_period = period;
        self
    }

    /// Set the slow gating square wave. A `period` of 1.0 disables gating.
    #[must_use]
    pub fn with_slow(mut self, rate: f32, period: f32) -> Self {
        self.slow_rate = rate;
        self.slow_period = period;
        self
    }
}

impl<S: ColorSource> Animation for Flash<S> {
    fn evaluate(&self, t: f32, _position: f32) -> ColorF {
        let fast = 1.0 - fmodf(floorf(self.fast_rate * t), self.fast_period);
        let slow = 1.0 - fmodf(floorf(self.slow_rate * t), self.slow_period);
        self.source.color().scale_brightness(fast.min(slow))
    }
}
