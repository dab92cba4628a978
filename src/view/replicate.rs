use super::{LayoutError, PixelView, ViewError};
use crate::color::Rgb;

/// Fans writes out to two or more equal-length views.
///
/// Writes and commits reach every replica in attachment order. There is
/// no transactional guarantee across replicas: when one fails, the rest
/// are still attempted and the first error is returned afterwards.
/// Reads come from the first replica.
///
/// Replica lengths are validated once, at construction; views must not
/// change length while replicated.
#[derive(Clone, Copy)]
pub struct Replicate<'a> {
    views: &'a [&'a dyn PixelView],
}

impl<'a> Replicate<'a> {
    /// Requires at least two views, all of equal length.
    pub fn new(views: &'a [&'a dyn PixelView]) -> Result<Self, LayoutError> {
        if views.len() < 2 {
            return Err(LayoutError::TooFewReplicas);
        }
        let len = views[0].len();
        if views.iter().any(|view| view.len() != len) {
            return Err(LayoutError::MismatchedLengths);
        }
        Ok(Self { views })
    }
}

impl PixelView for Replicate<'_> {
    fn len(&self) -> usize {
        self.views[0].len()
    }

    fn get(&self, index: usize) -> Result<Rgb, ViewError> {
        self.views[0].get(index)
    }

    fn set(&self, index: usize, color: Rgb) -> Result<(), ViewError> {
        let mut first_error = None;
        for view in self.views {
            if let Err(error) = view.set(index, color) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn commit(&self) -> Result<(), ViewError> {
        let mut first_error = None;
        for view in self.views {
            if let Err(error) = view.commit() {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
