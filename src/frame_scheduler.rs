//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::renderer::RendererGroup;
use crate::timeline::Timeline;
use crate::view::ViewError;

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler driving a renderer group from a timeline.
///
/// Tracks frame timing with drift correction, samples the timeline and
/// renders one frame per tick, and returns timing info so the platform
/// loop can sleep appropriately.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(timeline, renderers);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()))?;
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, const N: usize> {
    timeline: Timeline,
    renderers: RendererGroup<'a, N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, const N: usize> FrameScheduler<'a, N> {
    /// Create a scheduler at `DEFAULT_FRAME_DURATION` (90 FPS).
    pub fn new(timeline: Timeline, renderers: RendererGroup<'a, N>) -> Self {
        Self::with_frame_duration(timeline, renderers, DEFAULT_FRAME_DURATION)
    }

    /// Create a scheduler with a custom frame duration.
    pub fn with_frame_duration(
        timeline: Timeline,
        renderers: RendererGroup<'a, N>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            timeline,
            renderers,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Applies drift correction (falling more than two frames behind
    /// resets the deadline instead of bursting to catch up), renders the
    /// group at the timeline's current value, and returns the deadline
    /// for the next frame. The caller waits until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, ViewError> {
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            #[cfg(feature = "esp32-log")]
            println!("frame deadline drifted, resetting to now");
            self.next_frame = now;
        }

        self.renderers.render(self.timeline.sample(now))?;

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the renderer group.
    pub fn renderers(&self) -> &RendererGroup<'a, N> {
        &self.renderers
    }

    /// Get a mutable reference to the renderer group.
    pub fn renderers_mut(&mut self) -> &mut RendererGroup<'a, N> {
        &mut self.renderers
    }
}
