#![no_std]

pub mod animation;
pub mod color;
pub mod frame_scheduler;
pub mod renderer;
pub mod timeline;
pub mod view;

pub use animation::{
    Animation, Baked, BuildError, ColorSource, Concatenated, ConstantColor, Flash, Mixed, Rainbow,
    Remapped, Reversed, SpeedAdjusted, Spinner, TimeShifted,
};
pub use color::{ColorF, Rgb};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use renderer::{Renderer, RendererGroup};
pub use timeline::{Timeline, ZeroPeriodError};
pub use view::{Block, LayoutError, PixelView, Replicate, Strip, ViewError};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push committed frames onto the physical data
/// line. The view layer is generic over this trait, so the same animation
/// stack runs on any hardware platform.
pub trait OutputDriver {
    /// Write one frame of colors to the LED chain
    ///
    /// Assumed synchronous and non-reentrant; may be slow, bounded by LED
    /// count and protocol timing.
    fn write(&mut self, colors: &[Rgb]) -> Result<(), DriverError>;
}

/// Error returned when the driver could not push a frame to the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverError;
