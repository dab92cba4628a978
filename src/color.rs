//! Normalized linear-RGB color math.
//!
//! Animations compute in floating point and only drop to device bytes at
//! the very end of a frame. Channels stay in `[0.0, 1.0]` by convention;
//! intermediate results may overshoot and are clamped once, in
//! [`ColorF::to_bytes`].

use libm::roundf;
use smart_leds::RGB8;

/// Device byte color, as accepted by LED drivers.
pub type Rgb = RGB8;

/// Normalized linear-RGB color value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorF {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const AMBER: Self = Self::new(1.0, 0.4, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, without clamping.
    ///
    /// Callers compose further before converting to bytes, so overshoot
    /// is preserved here.
    pub fn scale_brightness(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Linear interpolation towards `other` by `weight`.
    ///
    /// `weight` 0 returns `self`, 1 returns `other`. Weights outside
    /// `[0, 1]` extrapolate linearly for overshoot effects.
    pub fn mix(self, other: Self, weight: f32) -> Self {
        let inverse = 1.0 - weight;
        Self::new(
            self.r * inverse + other.r * weight,
            self.g * inverse + other.g * weight,
            self.b * inverse + other.b * weight,
        )
    }

    /// True when every channel is at or below zero.
    pub fn is_black(self) -> bool {
        self.r <= 0.0 && self.g <= 0.0 && self.b <= 0.0
    }

    /// Convert to device bytes.
    ///
    /// Each channel is clamped to `[0, 1]` and rounded to `[0, 255]`.
    /// This is the single point where out-of-range values saturate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_bytes(self) -> Rgb {
        fn channel(value: f32) -> u8 {
            roundf(value.clamp(0.0, 1.0) * 255.0) as u8
        }
        Rgb {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

impl core::ops::Add for ColorF {
    type Output = Self;

    /// Per-channel sum, unclamped.
    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}
