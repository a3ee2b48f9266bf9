//! Clockwise inward spiral.

use crate::policy::TraversalPolicy;
use sweep_core::Pos;

/// Spirals clockwise from the top-left corner toward the centre.
///
/// Keeps a shrinking rectangle `top..=bottom x left..=right`. Each lap
/// walks the top row rightward, the right column downward, then (if any
/// rows remain) the bottom row leftward and (if any columns remain) the
/// left column upward, shrinking the matching edge after each leg. The
/// two guards are what stop 1xN and Nx1 remainders from being walked
/// twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spiral;

impl TraversalPolicy for Spiral {
    fn name(&self) -> &str {
        "spiral"
    }

    fn plan(&self, width: u32, height: u32) -> Vec<Pos> {
        let mut out = Vec::with_capacity((width as usize) * (height as usize));
        // i64 so that `right - 1` / `bottom - 1` past zero cannot wrap.
        let mut top: i64 = 0;
        let mut bottom: i64 = height as i64 - 1;
        let mut left: i64 = 0;
        let mut right: i64 = width as i64 - 1;
        let at = |x: i64, y: i64| Pos::new(x as i32, y as i32);

        while top <= bottom && left <= right {
            out.extend((left..=right).map(|x| at(x, top)));
            top += 1;

            out.extend((top..=bottom).map(|y| at(right, y)));
            right -= 1;

            if top <= bottom {
                out.extend((left..=right).rev().map(|x| at(x, bottom)));
                bottom -= 1;
            }

            if left <= right {
                out.extend((top..=bottom).rev().map(|y| at(left, y)));
                left += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Pos {
        Pos::new(x, y)
    }

    #[test]
    fn three_by_three_order() {
        assert_eq!(
            Spiral.plan(3, 3),
            vec![
                p(0, 0),
                p(1, 0),
                p(2, 0),
                p(2, 1),
                p(2, 2),
                p(1, 2),
                p(0, 2),
                p(0, 1),
                p(1, 1),
            ]
        );
    }

    #[test]
    fn four_by_two_order() {
        assert_eq!(
            Spiral.plan(4, 2),
            vec![
                p(0, 0),
                p(1, 0),
                p(2, 0),
                p(3, 0),
                p(3, 1),
                p(2, 1),
                p(1, 1),
                p(0, 1),
            ]
        );
    }

    #[test]
    fn single_cell() {
        assert_eq!(Spiral.plan(1, 1), vec![p(0, 0)]);
    }

    #[test]
    fn single_column_runs_straight_down() {
        assert_eq!(Spiral.plan(1, 4), vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3)]);
    }

    #[test]
    fn single_row_runs_straight_across() {
        assert_eq!(Spiral.plan(4, 1), vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    }

    #[test]
    fn consecutive_targets_are_adjacent() {
        let plan = Spiral.plan(6, 5);
        for pair in plan.windows(2) {
            let d = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
            assert_eq!(d, 1, "{} -> {} is not a unit step", pair[0], pair[1]);
        }
    }

    proptest! {
        #[test]
        fn covers_every_cell_once(w in 1u32..20, h in 1u32..20) {
            coverage::run_full_coverage(&Spiral, w, h);
        }

        #[test]
        fn thin_shapes_are_covered(n in 1u32..40) {
            coverage::run_full_coverage(&Spiral, 1, n);
            coverage::run_full_coverage(&Spiral, n, 1);
            coverage::run_full_coverage(&Spiral, 2, n);
            coverage::run_full_coverage(&Spiral, n, 2);
        }
    }
}
