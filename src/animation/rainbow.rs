use core::f32::consts::TAU;

use libm::cosf;

use super::{Animation, wrap_unit};
use crate::color::ColorF;

/// Full-spectrum wash drifting along the chain.
///
/// Each channel is a cosine of the wrapped `t + position`, with the
/// three channels phase-shifted by a third of a cycle.
#[derive(Debug, Clone)]
pub struct Rainbow {
    brightness: f32,
}

impl Rainbow {
    pub const fn new() -> Self {
        Self { brightness: 1.0 }
    }

    /// Scale the whole spectrum; rainbows at full brightness tend to
    /// overpower neighboring animations.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }
}

impl Default for Rainbow {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Rainbow {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        let x = wrap_unit(t + position);
        let phase = |offset: f32| (cosf((x + offset) * TAU) + 1.0) / 2.0;
        ColorF::new(phase(0.0), phase(1.0 / 3.0), phase(2.0 / 3.0))
            .scale_brightness(self.brightness)
    }
}
