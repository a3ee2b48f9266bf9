//! Command-line arguments and their mapping onto [`RunConfig`].

use std::time::Duration;

use clap::Parser;
use sweep::prelude::{PolicyKind, Pos, RunConfig, ScenarioConfig};

#[derive(Debug, Parser)]
#[command(
    name = "sweep",
    version,
    about = "Simulate a cleaning robot sweeping a grid"
)]
pub struct Cli {
    /// Surface width in cells.
    #[arg(long, default_value_t = 5)]
    pub width: u32,

    /// Surface height in cells.
    #[arg(long, default_value_t = 5)]
    pub height: u32,

    /// Traversal policy: row, reverse-row, column, or spiral.
    #[arg(short, long, default_value_t = PolicyKind::RowSweep)]
    pub policy: PolicyKind,

    /// Start column.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start_x: i32,

    /// Start row.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start_y: i32,

    /// Seed a random scenario instead of the built-in demo layout.
    #[arg(short, long, conflicts_with = "empty")]
    pub seed: Option<u64>,

    /// Dirt cells in a random scenario.
    #[arg(long, default_value_t = 5, requires = "seed")]
    pub dirt: usize,

    /// Obstacle cells in a random scenario.
    #[arg(long, default_value_t = 3, requires = "seed")]
    pub obstacles: usize,

    /// Start from a surface with no dirt or obstacles.
    #[arg(long)]
    pub empty: bool,

    /// Pause after each frame, in milliseconds.
    #[arg(long, default_value_t = 150)]
    pub delay_ms: u64,

    /// Print frames one after another instead of redrawing in place.
    #[arg(long)]
    pub no_clear: bool,

    /// Skip frame output and print only the final report.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The run configuration these arguments describe.
    pub fn to_config(&self) -> RunConfig {
        let scenario = match self.seed {
            Some(seed) => ScenarioConfig::Random {
                seed,
                dirt: self.dirt,
                obstacles: self.obstacles,
            },
            None if self.empty => ScenarioConfig::empty(),
            None => ScenarioConfig::demo(),
        };
        RunConfig {
            width: self.width,
            height: self.height,
            start: Pos::new(self.start_x, self.start_y),
            policy: self.policy,
            scenario,
            step_delay: Duration::from_millis(self.delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sweep").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_demo_run() {
        let cfg = parse(&[]).to_config();
        assert_eq!(
            cfg,
            RunConfig {
                step_delay: Duration::from_millis(150),
                ..RunConfig::default()
            }
        );
    }

    #[test]
    fn seed_selects_random_scenario() {
        let cfg = parse(&["--seed", "7", "--dirt", "4", "--obstacles", "2"]).to_config();
        assert_eq!(
            cfg.scenario,
            ScenarioConfig::Random {
                seed: 7,
                dirt: 4,
                obstacles: 2,
            }
        );
    }

    #[test]
    fn empty_flag_clears_scenario() {
        let cfg = parse(&["--empty", "--width", "3", "--height", "2"]).to_config();
        assert_eq!(cfg.scenario, ScenarioConfig::empty());
        assert_eq!((cfg.width, cfg.height), (3, 2));
    }

    #[test]
    fn policy_accepts_long_names() {
        let cli = parse(&["--policy", "column-sweep", "--delay-ms", "0"]);
        assert_eq!(cli.policy, PolicyKind::ColumnSweep);
        assert_eq!(cli.to_config().step_delay, Duration::ZERO);
    }

    #[test]
    fn bad_policy_is_a_parse_error() {
        let err = Cli::try_parse_from(["sweep", "--policy", "zigzag"]).unwrap_err();
        assert!(err.to_string().contains("unknown policy 'zigzag'"));
    }

    #[test]
    fn dirt_without_seed_is_rejected() {
        assert!(Cli::try_parse_from(["sweep", "--dirt", "3"]).is_err());
    }

    #[test]
    fn seed_conflicts_with_empty() {
        assert!(Cli::try_parse_from(["sweep", "--seed", "1", "--empty"]).is_err());
    }

    #[test]
    fn negative_start_parses_and_fails_validation() {
        let cfg = parse(&["--start-x", "-1"]).to_config();
        assert_eq!(cfg.start, Pos::new(-1, 0));
        assert!(cfg.validate().is_err());
    }
}
