use super::{Animation, ColorSource, wrap_unit};
use crate::color::ColorF;

/// Moving highlight that sweeps around the chain once per cycle.
///
/// Brightness is `((t + position) mod 1)^2`: a quadratic ramp whose peak
/// travels through the chain as time advances, wrapping circularly in
/// position so rings have no visible seam.
#[derive(Debug, Clone)]
pub struct Spinner<S: ColorSource> {
    source: S,
}

impl<S: ColorSource> Spinner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: ColorSource> Animation for Spinner<S> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        let ramp = wrap_unit(t + position);
        self.source.color().scale_brightness(ramp * ramp)
    }
}
