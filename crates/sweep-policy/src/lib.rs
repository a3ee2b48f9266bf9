//! Traversal policies for the Sweep cleaning-robot simulator.
//!
//! A [`TraversalPolicy`] turns a surface's dimensions into a deterministic
//! sequence of target cells and drives an [`Actuator`](sweep_core::Actuator)
//! through it: one `move_to` followed by one `clean_current_spot` per
//! target. Blocked targets are skipped; there is no retry and no
//! backtracking.
//!
//! # Policies
//!
//! - [`RowSweep`]: boustrophedon over rows, top to bottom
//! - [`ReverseRowSweep`]: boustrophedon over rows, bottom to top
//! - [`ColumnSweep`]: boustrophedon over columns, left to right
//! - [`Spiral`]: clockwise inward spiral from the top-left corner

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod column_sweep;
pub mod kind;
pub mod policy;
pub mod reverse_row_sweep;
pub mod row_sweep;
pub mod spiral;

#[cfg(test)]
pub(crate) mod coverage;

pub use column_sweep::ColumnSweep;
pub use kind::{ParsePolicyError, PolicyKind};
pub use policy::TraversalPolicy;
pub use reverse_row_sweep::ReverseRowSweep;
pub use row_sweep::RowSweep;
pub use spiral::Spiral;
