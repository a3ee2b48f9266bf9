//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the input for constructing a [`Session`](crate::Session).
//! [`validate()`](RunConfig::validate) checks every structural invariant up
//! front so that a session, once built, cannot fail.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use sweep_core::{Pos, Seed, SeedKind, SurfaceError};
use sweep_policy::PolicyKind;
use sweep_surface::Surface;

// ── ScenarioConfig ─────────────────────────────────────────────────

/// How the surface is seeded before a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioConfig {
    /// Apply these seeds in order (last write wins per cell).
    Fixed(Vec<Seed>),
    /// Scatter seeds with a [`ChaCha8Rng`](rand_chacha::ChaCha8Rng)
    /// seeded from `seed`. The start cell is never seeded.
    Random {
        /// RNG seed; equal seeds give equal scenarios.
        seed: u64,
        /// Number of dirt cells.
        dirt: usize,
        /// Number of obstacle cells.
        obstacles: usize,
    },
}

impl ScenarioConfig {
    /// The 5x5 reference scenario: dirt at (1,1) and (3,3), an obstacle
    /// at (2,2).
    pub fn demo() -> Self {
        ScenarioConfig::Fixed(vec![
            Seed::dirt(1, 1),
            Seed::dirt(3, 3),
            Seed::obstacle(2, 2),
        ])
    }

    /// An unseeded scenario.
    pub fn empty() -> Self {
        ScenarioConfig::Fixed(Vec::new())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::demo()
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RunConfig::validate()`] or agent placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Surface dimensions or a fixed seed were rejected.
    Surface(SurfaceError),
    /// The start cell lies outside the surface.
    StartOutOfBounds {
        /// Requested start.
        start: Pos,
        /// Surface width.
        width: u32,
        /// Surface height.
        height: u32,
    },
    /// The start cell holds an obstacle.
    StartOnObstacle {
        /// Requested start.
        start: Pos,
    },
    /// A random scenario asks for more seeds than there are free cells.
    TooManySeeds {
        /// `dirt + obstacles`.
        requested: usize,
        /// Cells other than the start cell.
        available: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "surface: {e}"),
            Self::StartOutOfBounds {
                start,
                width,
                height,
            } => write!(f, "start {start} is outside the {width}x{height} surface"),
            Self::StartOnObstacle { start } => {
                write!(f, "start {start} is an obstacle")
            }
            Self::TooManySeeds {
                requested,
                available,
            } => write!(
                f,
                "scenario requests {requested} seeded cells but only {available} are free"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for ConfigError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Surface width in cells. Default: 5.
    pub width: u32,
    /// Surface height in cells. Default: 5.
    pub height: u32,
    /// Agent start cell. Default: the origin.
    pub start: Pos,
    /// Traversal policy. Default: row sweep.
    pub policy: PolicyKind,
    /// Surface seeding. Default: [`ScenarioConfig::demo`].
    pub scenario: ScenarioConfig,
    /// Pause after each rendered frame, honoured by
    /// [`TerminalSink`](crate::TerminalSink). Default: zero.
    pub step_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            start: Pos::ORIGIN,
            policy: PolicyKind::default(),
            scenario: ScenarioConfig::default(),
            step_delay: Duration::ZERO,
        }
    }
}

impl RunConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions, including the total cell budget.
        Surface::check_dimensions(self.width, self.height)?;
        // 2. Start inside the surface.
        if !self.contains(self.start) {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                width: self.width,
                height: self.height,
            });
        }
        // 3. Scenario.
        match &self.scenario {
            ScenarioConfig::Fixed(seeds) => {
                if let Some(bad) = seeds.iter().find(|s| !self.contains(s.pos)) {
                    return Err(SurfaceError::OutOfRange {
                        x: bad.pos.x,
                        y: bad.pos.y,
                        width: self.width,
                        height: self.height,
                    }
                    .into());
                }
                // Last write wins, so only the final seed at the start matters.
                let at_start = seeds.iter().rev().find(|s| s.pos == self.start);
                if at_start.is_some_and(|s| s.kind == SeedKind::Obstacle) {
                    return Err(ConfigError::StartOnObstacle { start: self.start });
                }
            }
            ScenarioConfig::Random {
                dirt, obstacles, ..
            } => {
                let available = self.cell_count().saturating_sub(1);
                let requested = dirt.saturating_add(*obstacles);
                if requested > available {
                    return Err(ConfigError::TooManySeeds {
                        requested,
                        available,
                    });
                }
            }
        }
        Ok(())
    }

    /// Total cells on the configured surface.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }
}
