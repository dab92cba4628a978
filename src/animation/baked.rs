use libm::roundf;

use super::{Animation, BuildError};
use crate::color::ColorF;

/// Animation precomputed over a fixed time/position grid.
///
/// Construction samples the source once at every grid point; evaluation
/// is a nearest-index table lookup with no interpolation. This trades
/// memory for per-frame cost, the one place precision is deliberately
/// sacrificed for speed on constrained hardware.
///
/// Grid points sit at `k / (steps - 1)`, so the ends of both axes are
/// sampled exactly.
#[derive(Debug, Clone)]
pub struct Baked<const T_STEPS: usize, const P_STEPS: usize> {
    table: [[ColorF; P_STEPS]; T_STEPS],
}

impl<const T_STEPS: usize, const P_STEPS: usize> Baked<T_STEPS, P_STEPS> {
    /// Sample `source` over the grid.
    ///
    /// The source is only borrowed for the duration of the bake; the
    /// table is owned afterwards. Requires at least one step per axis.
    pub fn new(source: &dyn Animation) -> Result<Self, BuildError> {
        if T_STEPS == 0 || P_STEPS == 0 {
            return Err(BuildError::ZeroResolution);
        }
        let mut table = [[ColorF::BLACK; P_STEPS]; T_STEPS];
        for (t_index, row) in table.iter_mut().enumerate() {
            let t = grid_coord(t_index, T_STEPS);
            for (p_index, cell) in row.iter_mut().enumerate() {
                *cell = source.evaluate(t, grid_coord(p_index, P_STEPS));
            }
        }
        Ok(Self { table })
    }
}

impl<const T_STEPS: usize, const P_STEPS: usize> Animation for Baked<T_STEPS, P_STEPS> {
    fn evaluate(&self, t: f32, position: f32) -> ColorF {
        self.table[grid_index(t, T_STEPS)][grid_index(position, P_STEPS)]
    }
}

#[allow(clippy::cast_precision_loss)]
fn grid_coord(index: usize, steps: usize) -> f32 {
    if steps <= 1 {
        0.0
    } else {
        index as f32 / (steps - 1) as f32
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_index(value: f32, steps: usize) -> usize {
    let scaled = roundf(value.clamp(0.0, 1.0) * (steps - 1) as f32);
    (scaled as usize).min(steps - 1)
}
