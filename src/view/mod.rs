//! Logical pixel views over physical LED chains.
//!
//! A [`PixelView`] is an addressable sequence of pixel color slots.
//! [`Strip`] is the leaf backed by a frame buffer and an output driver;
//! [`Block`] windows a sub-range of another view and [`Replicate`] fans
//! writes out to several views. Blocks and replicas never copy pixel
//! data, they only re-index into the underlying buffers.

mod block;
mod replicate;
mod strip;

pub use block::Block;
pub use replicate::Replicate;
pub use strip::Strip;

use crate::DriverError;
use crate::color::Rgb;

/// Error from a view operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Index at or past the end of the view. Never silently clamped:
    /// an out-of-range write is a planning bug in the composition.
    OutOfBounds { index: usize, len: usize },
    /// The physical driver rejected the committed frame.
    Driver(DriverError),
}

/// Rejected view construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Block window with `start > end` or `end` past the underlying view.
    InvalidWindow { start: usize, end: usize, len: usize },
    /// Replicated views must report equal lengths.
    MismatchedLengths,
    /// Replication needs at least two views.
    TooFewReplicas,
}

/// An addressable sequence of pixel color slots.
///
/// Implemented by the physical [`Strip`] and by the logical [`Block`]
/// and [`Replicate`] views; renderers depend only on this trait, never
/// on a concrete buffer type.
///
/// Methods take `&self`: leaves use interior mutability so several views
/// may alias one underlying buffer. Everything is single-threaded;
/// overlapping writers within one pass are last-write-wins, and
/// partitioning pixel ranges without overlap is the composer's job.
pub trait PixelView {
    /// Number of addressable slots.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the buffered color at `index`.
    fn get(&self, index: usize) -> Result<Rgb, ViewError>;

    /// Buffer `color` at `index`. Does not touch the hardware.
    fn set(&self, index: usize, color: Rgb) -> Result<(), ViewError>;

    /// Flush buffered colors to the physical layer.
    fn commit(&self) -> Result<(), ViewError>;

    /// Buffer `color` into every slot.
    fn fill(&self, color: Rgb) -> Result<(), ViewError> {
        for index in 0..self.len() {
            self.set(index, color)?;
        }
        Ok(())
    }
}
