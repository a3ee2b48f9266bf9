//! Sweep: a grid-cleaning robot simulator with pluggable traversal policies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sweep sub-crates, and hosts the `sweep` command-line binary.
//!
//! # Quick start
//!
//! ```rust
//! use sweep::prelude::*;
//!
//! let mut surface = Surface::new(5, 5).unwrap();
//! surface.add_dirt(1, 1).unwrap();
//! surface.add_dirt(3, 3).unwrap();
//! surface.add_obstacle(2, 2).unwrap();
//!
//! let mut sink = NullSink;
//! let mut agent = Agent::new(&mut surface, &mut sink, Pos::ORIGIN).unwrap();
//! let metrics = agent.run_policy(&RowSweep);
//! assert_eq!(agent.position(), Pos::new(4, 4));
//! assert_eq!(metrics.cleaned, 2);
//! assert_eq!(metrics.blocked_moves, 1);
//! assert_eq!(surface.dirt_count(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sweep-core` | Positions, cell states, frames, errors, core traits |
//! | [`surface`] | `sweep-surface` | The `Surface` grid |
//! | [`policy`] | `sweep-policy` | Traversal policies and runtime selection |
//! | [`engine`] | `sweep-engine` | Agent, configuration, sessions, render sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`sweep-core`).
///
/// Contains [`types::Pos`], [`types::CellState`], [`types::Frame`], the
/// [`types::SurfaceError`] type, and the capability traits
/// ([`types::SurfaceQuery`], [`types::RenderSink`], [`types::Actuator`]).
pub use sweep_core as types;

/// The grid model (`sweep-surface`).
pub use sweep_surface as surface;

/// Traversal policies (`sweep-policy`).
///
/// The [`policy::TraversalPolicy`] trait is the extension point for new
/// coverage strategies; [`policy::PolicyKind`] selects a built-in one by
/// name.
pub use sweep_policy as policy;

/// Agent, configuration, and session driver (`sweep-engine`).
///
/// [`engine::Agent`] for driving a surface directly, [`engine::Session`]
/// for a configured end-to-end run.
pub use sweep_engine as engine;

/// Common imports for typical Sweep usage.
///
/// ```rust
/// use sweep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sweep_core::{
        Actuator, CellState, Frame, Glyph, Pos, RenderSink, Seed, SeedKind, SurfaceQuery,
    };

    // Errors
    pub use sweep_core::SurfaceError;
    pub use sweep_engine::ConfigError;
    pub use sweep_policy::ParsePolicyError;

    // Surface
    pub use sweep_surface::Surface;

    // Policies
    pub use sweep_policy::{
        ColumnSweep, PolicyKind, ReverseRowSweep, RowSweep, Spiral, TraversalPolicy,
    };

    // Engine
    pub use sweep_engine::{
        Agent, BufferSink, NullSink, RunConfig, RunMetrics, RunReport, ScenarioConfig, Session,
        TerminalSink,
    };
}
