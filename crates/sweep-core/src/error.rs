//! Error types for surface operations.
//!
//! Only mutation can fail. Queries answer `false` for out-of-range
//! input, and a blocked move is an ordinary `false` from the agent, so
//! neither appears here.

use std::error::Error;
use std::fmt;

/// Errors from surface construction, seeding, and cleaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// A mutation targeted a cell outside `[0, width) x [0, height)`.
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Surface width.
        width: u32,
        /// Surface height.
        height: u32,
    },
    /// Attempted to construct a surface with zero cells.
    EmptySurface,
    /// A dimension does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `width * height` exceeds the cell budget of a surface.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Largest accepted cell count.
        max: usize,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of range: [0, {width}) x [0, {height})"
                )
            }
            Self::EmptySurface => write!(f, "surface must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::TooManyCells { width, height, max } => {
                write!(f, "{width}x{height} surface exceeds maximum of {max} cells")
            }
        }
    }
}

impl Error for SurfaceError {}
