//! Capability traits connecting surfaces, agents, and policies.
//!
//! - [`SurfaceQuery`]: read-only questions about the grid.
//! - [`RenderSink`]: where frames go after each state-changing step.
//! - [`Actuator`]: the move/clean interface a traversal policy drives.

use crate::frame::Frame;
use crate::pos::Pos;

/// Read-only access to a surface's cell state.
///
/// Queries never fail: out-of-range input answers `false`, so an agent
/// can probe any coordinate before moving.
pub trait SurfaceQuery {
    /// Width in cells.
    fn width(&self) -> u32;

    /// Height in cells.
    fn height(&self) -> u32;

    /// True iff `0 <= x < width` and `0 <= y < height`.
    fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// True iff `(x, y)` is in bounds and holds an obstacle.
    fn is_obstacle(&self, x: i32, y: i32) -> bool;

    /// True iff `(x, y)` is in bounds and holds dirt.
    fn is_dirt(&self, x: i32, y: i32) -> bool;
}

/// Consumer of render frames.
///
/// Called exactly once per state-changing step (a successful move or a
/// successful clean). Implementations may print, buffer, or discard.
pub trait RenderSink {
    /// Present one frame.
    fn present(&mut self, frame: &Frame);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, frame: &Frame) {
        (**self).present(frame);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn present(&mut self, frame: &Frame) {
        (**self).present(frame);
    }
}

/// The command interface a traversal policy uses to drive an agent.
///
/// # Contract
///
/// - `move_to()` is the only way to change position. It returns `false`
///   and leaves the position untouched when the target is out of bounds
///   or an obstacle. A blocked move is an expected outcome, not an error.
/// - `clean_current_spot()` acts on wherever the agent actually is,
///   which after a blocked move is the previous position.
pub trait Actuator {
    /// `(width, height)` of the surface being traversed.
    fn extent(&self) -> (u32, u32);

    /// Current position.
    fn position(&self) -> Pos;

    /// Attempt to move to `(x, y)`. Returns whether the move happened.
    fn move_to(&mut self, x: i32, y: i32) -> bool;

    /// Clean the current cell if it is dirty. Returns whether it was.
    fn clean_current_spot(&mut self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Fixed {
        w: u32,
        h: u32,
    }

    impl SurfaceQuery for Fixed {
        fn width(&self) -> u32 {
            self.w
        }
        fn height(&self) -> u32 {
            self.h
        }
        fn is_obstacle(&self, _x: i32, _y: i32) -> bool {
            false
        }
        fn is_dirt(&self, _x: i32, _y: i32) -> bool {
            false
        }
    }

    #[test]
    fn default_bounds_check_is_half_open() {
        let s = Fixed { w: 4, h: 2 };
        assert!(s.is_in_bounds(0, 0));
        assert!(s.is_in_bounds(3, 1));
        assert!(!s.is_in_bounds(4, 1));
        assert!(!s.is_in_bounds(3, 2));
        assert!(!s.is_in_bounds(-1, 0));
        assert!(!s.is_in_bounds(0, i32::MIN));
    }

    #[test]
    fn boxed_sink_forwards() {
        struct Count(usize);
        impl RenderSink for Count {
            fn present(&mut self, _frame: &Frame) {
                self.0 += 1;
            }
        }
        let mut inner = Count(0);
        {
            let mut boxed: Box<&mut Count> = Box::new(&mut inner);
            let frame = Frame::new(1, 1, Pos::ORIGIN, vec![crate::Glyph::Agent]);
            boxed.present(&frame);
            boxed.present(&frame);
        }
        assert_eq!(inner.0, 2);
    }

    proptest! {
        #[test]
        fn in_bounds_matches_half_open_ranges(
            w in 1u32..20,
            h in 1u32..20,
            x in -5i32..25,
            y in -5i32..25,
        ) {
            let s = Fixed { w, h };
            let expected = (0..w as i32).contains(&x) && (0..h as i32).contains(&y);
            prop_assert_eq!(s.is_in_bounds(x, y), expected);
        }
    }
}
