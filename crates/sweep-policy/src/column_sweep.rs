//! Column-by-column boustrophedon sweep.

use crate::policy::TraversalPolicy;
use sweep_core::Pos;

/// Sweeps columns left to right, alternating direction.
///
/// The row sweep transposed: column `x` runs top to bottom when `x` is
/// even and bottom to top when `x` is odd.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnSweep;

impl TraversalPolicy for ColumnSweep {
    fn name(&self) -> &str {
        "column_sweep"
    }

    fn plan(&self, width: u32, height: u32) -> Vec<Pos> {
        let mut out = Vec::with_capacity((width as usize) * (height as usize));
        let h = height as i32;
        for x in 0..width as i32 {
            if x % 2 == 0 {
                out.extend((0..h).map(|y| Pos::new(x, y)));
            } else {
                out.extend((0..h).rev().map(|y| Pos::new(x, y)));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage;
    use crate::RowSweep;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Pos {
        Pos::new(x, y)
    }

    #[test]
    fn two_by_three_order() {
        assert_eq!(
            ColumnSweep.plan(2, 3),
            vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(1, 1), p(1, 0)]
        );
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(ColumnSweep.plan(1, 1), vec![p(0, 0)]);
        assert_eq!(ColumnSweep.plan(1, 3), vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(ColumnSweep.plan(3, 1), vec![p(0, 0), p(1, 0), p(2, 0)]);
    }

    proptest! {
        #[test]
        fn covers_every_cell_once(w in 1u32..16, h in 1u32..16) {
            coverage::run_full_coverage(&ColumnSweep, w, h);
        }

        #[test]
        fn is_row_sweep_transposed(w in 1u32..16, h in 1u32..16) {
            let transposed: Vec<Pos> = RowSweep
                .plan(h, w)
                .into_iter()
                .map(|q| Pos::new(q.y, q.x))
                .collect();
            prop_assert_eq!(ColumnSweep.plan(w, h), transposed);
        }
    }
}
