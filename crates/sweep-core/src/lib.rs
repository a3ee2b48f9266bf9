//! Core types and traits for the Sweep cleaning-robot simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Sweep workspace:
//! grid positions, cell states, render frames, error types, and the
//! capability traits that connect the surface, the agent, and the
//! traversal policies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod frame;
pub mod pos;
pub mod traits;

pub use cell::{CellState, Seed, SeedKind};
pub use error::SurfaceError;
pub use frame::{Frame, Glyph};
pub use pos::Pos;
pub use traits::{Actuator, RenderSink, SurfaceQuery};
