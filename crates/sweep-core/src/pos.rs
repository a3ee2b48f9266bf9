//! The [`Pos`] grid coordinate.

use std::fmt;

/// A cell coordinate on a surface.
///
/// `x` grows to the right (columns) and `y` grows downward (rows), so
/// `(0, 0)` is the top-left corner. Components are signed so that callers
/// can probe positions just outside the grid without wrapping; bounds are
/// always enforced by the surface, never by the coordinate type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Pos {
    /// The top-left corner.
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    /// Construct a position from its column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Pos> for (i32, i32) {
    fn from(p: Pos) -> Self {
        (p.x, p.y)
    }
}
