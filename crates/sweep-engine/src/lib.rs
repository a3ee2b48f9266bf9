//! Agent, run configuration, and session driver for Sweep simulations.
//!
//! Provides the [`Agent`] that moves over a [`Surface`](sweep_surface::Surface)
//! under the collision rule, the [`Session`] that builds a seeded surface
//! from a [`RunConfig`] and runs a policy to completion, and the render
//! sinks that frames are delivered to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod metrics;
pub mod scenario;
pub mod session;
pub mod sink;

pub use agent::Agent;
pub use config::{ConfigError, RunConfig, ScenarioConfig};
pub use metrics::{RunMetrics, RunReport};
pub use scenario::random_seeds;
pub use session::Session;
pub use sink::{BufferSink, NullSink, TerminalSink};
