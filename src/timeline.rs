//! Maps a monotonic clock onto the normalized animation cycle.

use embassy_time::{Duration, Instant};

/// Error for a timeline constructed with a zero-length period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroPeriodError;

/// Produces the normalized time value consumed by renderers.
///
/// `sample` computes `(elapsed mod period) / period`, always in
/// `[0, 1)`. The period is fixed at construction; the monotonic clock is
/// supplied by the caller, so the core stays free of platform timers.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    epoch: Instant,
    period: Duration,
}

impl Timeline {
    /// Requires a non-zero period.
    pub fn new(epoch: Instant, period: Duration) -> Result<Self, ZeroPeriodError> {
        if period.as_micros() == 0 {
            return Err(ZeroPeriodError);
        }
        Ok(Self { epoch, period })
    }

    /// Normalized cycle position for `now`.
    ///
    /// Instants before the epoch saturate to the cycle start.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.as_micros().saturating_sub(self.epoch.as_micros());
        let period = self.period.as_micros();
        (elapsed % period) as f32 / period as f32
    }

    pub const fn period(&self) -> Duration {
        self.period
    }
}
