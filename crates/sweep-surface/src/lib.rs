//! Grid surface model for Sweep simulations.
//!
//! This crate defines [`Surface`], the bounded 2D grid the agent cleans.
//! It owns every cell's [`CellState`](sweep_core::CellState), answers the
//! [`SurfaceQuery`](sweep_core::SurfaceQuery) capability, applies scenario
//! seeds, and produces render [`Frame`](sweep_core::Frame)s.
//!
//! # Storage
//!
//! Cells live in a flat row-major `Vec` indexed `y * width + x`. Every
//! access goes through a bounds check first; out-of-range coordinates are
//! never used as indices.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod surface;

pub use surface::Surface;
