use core::cell::RefCell;

use critical_section::Mutex;

use super::{PixelView, ViewError};
use crate::color::Rgb;
use crate::OutputDriver;

/// Leaf view: an in-memory frame buffer committed through a driver.
///
/// The buffer sits behind a critical-section mutex so that blocks and
/// replicas holding shared references can all write into the same
/// physical chain.
pub struct Strip<D: OutputDriver, const N: usize> {
    inner: Mutex<RefCell<StripInner<D, N>>>,
}

struct StripInner<D, const N: usize> {
    pixels: [Rgb; N],
    driver: D,
}

impl<D: OutputDriver, const N: usize> Strip<D, N> {
    /// Create a strip with all pixels off.
    pub fn new(driver: D) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(StripInner {
                pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
                driver,
            })),
        }
    }
}

impl<D: OutputDriver, const N: usize> PixelView for Strip<D, N> {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Result<Rgb, ViewError> {
        critical_section::with(|cs| {
            let inner = self.inner.borrow(cs).borrow();
            inner
                .pixels
                .get(index)
                .copied()
                .ok_or(ViewError::OutOfBounds { index, len: N })
        })
    }

    fn set(&self, index: usize, color: Rgb) -> Result<(), ViewError> {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow(cs).borrow_mut();
            let slot = inner
                .pixels
                .get_mut(index)
                .ok_or(ViewError::OutOfBounds { index, len: N })?;
            *slot = color;
            Ok(())
        })
    }

    fn commit(&self) -> Result<(), ViewError> {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow(cs).borrow_mut();
            let inner = &mut *inner;
            inner.driver.write(&inner.pixels).map_err(ViewError::Driver)
        })
    }
}
