//! Render frames: a full-grid glyph snapshot with the agent overlaid.
//!
//! A [`Frame`] is what a surface hands to a [`RenderSink`](crate::RenderSink)
//! after every state-changing step. The five-way [`Glyph`] distinction is
//! the contract; the characters chosen in [`Glyph::symbol`] are only the
//! default presentation.

use crate::cell::CellState;
use crate::pos::Pos;
use std::fmt;

/// Title line printed above every frame.
pub const TITLE: &str = "Vacuum cleaner robot simulation";

/// Legend line printed between the title and the grid.
pub const LEGEND: &str = "Legend: #=Obstacle, D=Dirt, .=Empty, R=Robot, C=Cleaned";

/// Visual class of one rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The agent stands here. Takes precedence over the cell state.
    Agent,
    /// An empty cell.
    Empty,
    /// A dirty cell.
    Dirt,
    /// An obstacle.
    Obstacle,
    /// A cleaned cell.
    Cleaned,
}

impl Glyph {
    /// Default single-character presentation.
    pub fn symbol(self) -> char {
        match self {
            Glyph::Agent => 'R',
            Glyph::Empty => '.',
            Glyph::Dirt => 'D',
            Glyph::Obstacle => '#',
            Glyph::Cleaned => 'C',
        }
    }
}

impl From<CellState> for Glyph {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Empty => Glyph::Empty,
            CellState::Dirt => Glyph::Dirt,
            CellState::Obstacle => Glyph::Obstacle,
            CellState::Cleaned => Glyph::Cleaned,
        }
    }
}

/// An immutable snapshot of a surface plus the agent position.
///
/// Glyphs are stored row-major (`y * width + x`), matching the surface's
/// own layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    agent: Pos,
    glyphs: Vec<Glyph>,
}

impl Frame {
    /// Build a frame from row-major glyphs.
    ///
    /// # Panics
    ///
    /// In debug builds, if `glyphs.len()` is not `width * height`.
    pub fn new(width: u32, height: u32, agent: Pos, glyphs: Vec<Glyph>) -> Self {
        debug_assert_eq!(
            glyphs.len(),
            (width as usize) * (height as usize),
            "glyph count must match a {width}x{height} frame"
        );
        Self {
            width,
            height,
            agent,
            glyphs,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Where the agent was when the frame was taken.
    pub fn agent(&self) -> Pos {
        self.agent
    }

    /// Glyph at `(x, y)`, or `None` outside the grid.
    pub fn glyph(&self, x: i32, y: i32) -> Option<Glyph> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.glyphs
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.width.max(1) as usize)
    }

    /// Number of cells rendered as `glyph`.
    pub fn count(&self, glyph: Glyph) -> usize {
        self.glyphs.iter().filter(|&&g| g == glyph).count()
    }

    /// Just the grid lines, without title or legend.
    pub fn grid_text(&self) -> String {
        let mut out = String::with_capacity(self.glyphs.len() * 2);
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|g| g.symbol().to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", "-".repeat(TITLE.len() + 2))?;
        writeln!(f, "{LEGEND}")?;
        f.write_str(&self.grid_text())
    }
}
