//! Row-by-row boustrophedon sweep.

use crate::policy::TraversalPolicy;
use sweep_core::Pos;

/// Sweeps rows top to bottom, alternating direction.
///
/// Row `y` runs left to right when `y` is even and right to left when
/// `y` is odd, so consecutive targets at a row change are vertically
/// adjacent. On a `W x H` grid the last target is `(W-1, H-1)` when
/// `H` is odd and `(0, H-1)` when `H` is even.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowSweep;

impl TraversalPolicy for RowSweep {
    fn name(&self) -> &str {
        "row_sweep"
    }

    fn plan(&self, width: u32, height: u32) -> Vec<Pos> {
        let mut out = Vec::with_capacity((width as usize) * (height as usize));
        let w = width as i32;
        for y in 0..height as i32 {
            if y % 2 == 0 {
                out.extend((0..w).map(|x| Pos::new(x, y)));
            } else {
                out.extend((0..w).rev().map(|x| Pos::new(x, y)));
            }
        }
        out
    }
}
