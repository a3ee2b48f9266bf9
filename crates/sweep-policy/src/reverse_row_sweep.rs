//! Bottom-up row boustrophedon sweep.

use crate::policy::TraversalPolicy;
use sweep_core::Pos;

/// Sweeps rows bottom to top, alternating direction.
///
/// Starts on the last row running right to left (the opposite corner and
/// direction from [`RowSweep`](crate::RowSweep)) and flips direction after
/// every row. On grids with an odd number of rows the plan is exactly the
/// row sweep reversed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseRowSweep;

impl TraversalPolicy for ReverseRowSweep {
    fn name(&self) -> &str {
        "reverse_row_sweep"
    }

    fn plan(&self, width: u32, height: u32) -> Vec<Pos> {
        let mut out = Vec::with_capacity((width as usize) * (height as usize));
        let w = width as i32;
        for (i, y) in (0..height as i32).rev().enumerate() {
            if i % 2 == 0 {
                out.extend((0..w).rev().map(|x| Pos::new(x, y)));
            } else {
                out.extend((0..w).map(|x| Pos::new(x, y)));
            }
        }
        out
    }
}
