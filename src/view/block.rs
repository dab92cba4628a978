use super::{LayoutError, PixelView, ViewError};
use crate::color::Rgb;

/// Window `[start, end)` into an underlying view.
///
/// Indices are translated by `start`; committing a block commits the
/// whole underlying chain, since the physical protocol has no partial
/// flush.
#[derive(Clone, Copy)]
pub struct Block<'a> {
    inner: &'a dyn PixelView,
    start: usize,
    end: usize,
}

impl<'a> Block<'a> {
    /// Requires `start <= end <= inner.len()`.
    pub fn new(inner: &'a dyn PixelView, start: usize, end: usize) -> Result<Self, LayoutError> {
        if start > end || end > inner.len() {
            return Err(LayoutError::InvalidWindow {
                start,
                end,
                len: inner.len(),
            });
        }
        Ok(Self { inner, start, end })
    }
}

impl Block<'_> {
    fn check(&self, index: usize) -> Result<(), ViewError> {
        if index >= self.len() {
            return Err(ViewError::OutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }
}

impl PixelView for Block<'_> {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn get(&self, index: usize) -> Result<Rgb, ViewError> {
        self.check(index)?;
        self.inner.get(self.start + index)
    }

    fn set(&self, index: usize, color: Rgb) -> Result<(), ViewError> {
        self.check(index)?;
        self.inner.set(self.start + index, color)
    }

    fn commit(&self) -> Result<(), ViewError> {
        self.inner.commit()
    }
}
