//! Cell states and scenario seed triples.

use crate::pos::Pos;
use std::fmt;

/// State of a single surface cell.
///
/// Every in-bounds coordinate holds exactly one of these at all times.
/// Surfaces start all-`Empty`; seeding writes `Dirt` or `Obstacle`, and
/// cleaning moves `Dirt` to `Cleaned`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Nothing on this cell.
    #[default]
    Empty,
    /// Dirt waiting to be cleaned.
    Dirt,
    /// Impassable. Never changed by cleaning.
    Obstacle,
    /// Dirt that an agent has removed.
    Cleaned,
}

impl CellState {
    /// Whether an agent may stand on this cell.
    pub fn is_passable(self) -> bool {
        self != CellState::Obstacle
    }
}

/// What a [`Seed`] places on its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedKind {
    /// Place an obstacle.
    Obstacle,
    /// Place dirt.
    Dirt,
}

impl SeedKind {
    /// The cell state this seed writes.
    pub fn state(self) -> CellState {
        match self {
            SeedKind::Obstacle => CellState::Obstacle,
            SeedKind::Dirt => CellState::Dirt,
        }
    }
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedKind::Obstacle => write!(f, "obstacle"),
            SeedKind::Dirt => write!(f, "dirt"),
        }
    }
}

/// A single `(x, y, kind)` scenario entry applied before traversal.
///
/// Seeds are applied in order; two seeds on the same cell resolve
/// last-write-wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Target cell.
    pub pos: Pos,
    /// What to place there.
    pub kind: SeedKind,
}

impl Seed {
    /// An obstacle at `(x, y)`.
    pub const fn obstacle(x: i32, y: i32) -> Self {
        Self {
            pos: Pos::new(x, y),
            kind: SeedKind::Obstacle,
        }
    }

    /// Dirt at `(x, y)`.
    pub const fn dirt(x: i32, y: i32) -> Self {
        Self {
            pos: Pos::new(x, y),
            kind: SeedKind::Dirt,
        }
    }
}
