//! The [`Surface`] grid: cell storage, queries, seeding, and rendering.

use sweep_core::{CellState, Frame, Glyph, Pos, Seed, SurfaceError, SurfaceQuery};

/// A bounded `width x height` grid of [`CellState`]s.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`. Dimensions are fixed at construction; every cell
/// starts [`CellState::Empty`].
///
/// Mutation is split by phase:
/// - **Seeding** ([`add_obstacle`](Surface::add_obstacle),
///   [`add_dirt`](Surface::add_dirt), [`apply_seeds`](Surface::apply_seeds))
///   writes cells unconditionally before a run.
/// - **Cleaning** ([`clean`](Surface::clean)) only ever turns dirt into
///   [`CellState::Cleaned`]; obstacles are never touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Surface {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum cell count. Cells are allocated up front, so the product
    /// of the dimensions is capped as well as each axis.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create a new all-empty surface with `width * height` cells.
    ///
    /// Fails with the same errors as
    /// [`check_dimensions`](Surface::check_dimensions).
    ///
    /// # Examples
    ///
    /// ```
    /// use sweep_core::SurfaceQuery;
    /// use sweep_surface::Surface;
    ///
    /// let surface = Surface::new(5, 3).unwrap();
    /// assert_eq!(surface.cell_count(), 15);
    /// assert!(surface.is_in_bounds(4, 2));
    /// assert!(!surface.is_in_bounds(5, 0));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let n = Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Empty; n],
        })
    }

    /// Validate dimensions without allocating, returning the cell count.
    ///
    /// Returns `Err(SurfaceError::EmptySurface)` if either dimension is 0,
    /// `Err(SurfaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(SurfaceError::TooManyCells)` if `width * height` exceeds
    /// [`MAX_CELLS`](Surface::MAX_CELLS).
    pub fn check_dimensions(width: u32, height: u32) -> Result<usize, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptySurface);
        }
        if width > Self::MAX_DIM {
            return Err(SurfaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SurfaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(SurfaceError::TooManyCells {
                width,
                height,
                max: Self::MAX_CELLS,
            })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// State of `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Number of dirty cells left.
    pub fn dirt_count(&self) -> usize {
        self.count(CellState::Dirt)
    }

    /// Place an obstacle at `(x, y)`, overwriting whatever was there.
    pub fn add_obstacle(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = CellState::Obstacle;
        Ok(())
    }

    /// Place dirt at `(x, y)`, overwriting whatever was there.
    pub fn add_dirt(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = CellState::Dirt;
        Ok(())
    }

    /// Apply a sequence of seeds in order (last write wins per cell).
    ///
    /// All seeds are bounds-checked before any is written, so a rejected
    /// batch leaves the surface unchanged.
    pub fn apply_seeds<'a, I>(&mut self, seeds: I) -> Result<(), SurfaceError>
    where
        I: IntoIterator<Item = &'a Seed>,
    {
        let mut staged = Vec::new();
        for seed in seeds {
            let i = self.checked_index(seed.pos.x, seed.pos.y)?;
            staged.push((i, seed.kind.state()));
        }
        for (i, state) in staged {
            self.cells[i] = state;
        }
        Ok(())
    }

    /// Clean `(x, y)`.
    ///
    /// Dirt becomes [`CellState::Cleaned`]; every other state is left
    /// as-is, so repeated cleaning is harmless. Returns whether a dirt
    /// cell was actually cleaned.
    pub fn clean(&mut self, x: i32, y: i32) -> Result<bool, SurfaceError> {
        let i = self.checked_index(x, y)?;
        if self.cells[i] == CellState::Dirt {
            self.cells[i] = CellState::Cleaned;
            return Ok(true);
        }
        Ok(false)
    }

    /// Snapshot the grid with the agent drawn at `(agent_x, agent_y)`.
    ///
    /// The agent glyph replaces the underlying cell. An agent position
    /// outside the grid draws no agent glyph. Never mutates the grid.
    pub fn render(&self, agent_x: i32, agent_y: i32) -> Frame {
        let agent_idx = self.index(agent_x, agent_y);
        let glyphs = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &state)| {
                if Some(i) == agent_idx {
                    Glyph::Agent
                } else {
                    Glyph::from(state)
                }
            })
            .collect();
        Frame::new(self.width, self.height, Pos::new(agent_x, agent_y), glyphs)
    }

    /// Flat index for an in-bounds coordinate.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_in_bounds(x, y) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, SurfaceError> {
        self.index(x, y).ok_or(SurfaceError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}

impl SurfaceQuery for Surface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(CellState::Obstacle)
    }

    fn is_dirt(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(CellState::Dirt)
    }
}
