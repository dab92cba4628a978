//! Binds animations to pixel views and renders single frames.

use heapless::Vec;

use crate::animation::{Animation, wrap_unit};
use crate::view::{PixelView, ViewError};

/// Binds exactly one animation to exactly one view.
///
/// Stateless across calls; all frame state lives in the view's buffer.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    animation: &'a dyn Animation,
    view: &'a dyn PixelView,
}

impl<'a> Renderer<'a> {
    pub fn new(animation: &'a dyn Animation, view: &'a dyn PixelView) -> Self {
        Self { animation, view }
    }

    /// Render one frame at normalized time `t`.
    ///
    /// `t` is wrapped into `[0, 1)`. Pixel `i` maps to position
    /// `i / len`, so the first pixel sits at 0.0 and positions wrap
    /// seamlessly on rings. Every pixel is buffered first and the view
    /// is committed exactly once per frame; committing per pixel would
    /// flicker and saturate the data line.
    #[allow(clippy::cast_precision_loss)]
    pub fn render(&self, t: f32) -> Result<(), ViewError> {
        let t = wrap_unit(t);
        let len = self.view.len();
        for index in 0..len {
            let position = index as f32 / len as f32;
            let color = self.animation.evaluate(t, position);
            self.view.set(index, color.to_bytes())?;
        }
        self.view.commit()
    }
}

/// Ordered set of renderers sharing one time value.
///
/// Renderers run in registration order, each committing its own view.
#[derive(Default)]
pub struct RendererGroup<'a, const N: usize> {
    renderers: Vec<Renderer<'a>, N>,
}

impl<'a, const N: usize> RendererGroup<'a, N> {
    pub const fn new() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Register a renderer.
    ///
    /// Returns the renderer back when the group is at capacity.
    pub fn push(&mut self, renderer: Renderer<'a>) -> Result<(), Renderer<'a>> {
        self.renderers.push(renderer)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Render every registered renderer at `t`.
    ///
    /// Every renderer is attempted even when one fails; the first error
    /// is returned afterwards.
    pub fn render(&self, t: f32) -> Result<(), ViewError> {
        let mut first_error = None;
        for renderer in &self.renderers {
            if let Err(error) = renderer.render(t) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
