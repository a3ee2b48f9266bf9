//! One configured simulation: a seeded surface plus the policy to run.
//!
//! [`Session`] validates its [`RunConfig`] once at construction, so
//! [`run`](Session::run) only reports a placement error if the surface
//! was changed underneath it.

use sweep_core::{Pos, RenderSink, Seed};
use sweep_policy::TraversalPolicy;
use sweep_surface::Surface;
use tracing::debug;

use crate::agent::Agent;
use crate::config::{ConfigError, RunConfig};
use crate::metrics::RunReport;

/// A surface seeded from a [`RunConfig`], ready to be cleaned.
///
/// # Examples
///
/// ```
/// use sweep_engine::{NullSink, RunConfig, Session};
/// use sweep_core::Pos;
///
/// let mut session = Session::new(RunConfig::default()).unwrap();
/// let report = session.run(&mut NullSink).unwrap();
/// assert_eq!(report.remaining_dirt, 0);
/// assert_eq!(report.final_position, Pos::new(4, 4));
/// ```
pub struct Session {
    config: RunConfig,
    surface: Surface,
    seeds: Vec<Seed>,
    policy: Box<dyn TraversalPolicy>,
}

impl Session {
    /// Validate `config`, build the surface, and apply the scenario.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut surface = Surface::new(config.width, config.height)?;
        let seeds = config
            .scenario
            .seeds(config.width, config.height, config.start);
        surface.apply_seeds(&seeds)?;
        debug!(
            width = config.width,
            height = config.height,
            seeds = seeds.len(),
            dirt = surface.dirt_count(),
            "surface seeded"
        );
        let policy = config.policy.build();
        Ok(Self {
            config,
            surface,
            seeds,
            policy,
        })
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The surface in its current state.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Seeds applied at construction, in order.
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    /// The policy [`run`](Session::run) will use.
    pub fn policy(&self) -> &dyn TraversalPolicy {
        self.policy.as_ref()
    }

    /// Where the agent starts.
    pub fn start(&self) -> Pos {
        self.config.start
    }

    /// Place an agent at the start cell and drive it with the policy,
    /// presenting frames to `sink`.
    ///
    /// Running again starts a fresh agent at the start cell on the
    /// already-cleaned surface.
    ///
    /// Fails only if the start cell cannot hold the agent, which a
    /// validated configuration rules out.
    pub fn run(&mut self, sink: &mut dyn RenderSink) -> Result<RunReport, ConfigError> {
        let start = self.config.start;
        let mut agent = Agent::new(&mut self.surface, sink, start)?;
        let metrics = agent.run_policy(self.policy.as_ref());
        let final_position = agent.position();
        Ok(RunReport {
            policy: self.policy.name().to_string(),
            start,
            final_position,
            metrics,
            remaining_dirt: self.surface.dirt_count(),
        })
    }
}
