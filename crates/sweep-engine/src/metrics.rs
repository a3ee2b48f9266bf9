//! Per-run counters and the end-of-run report.
//!
//! [`RunMetrics`] is updated by the agent on every command; [`RunReport`]
//! is what a session hands back once a policy has finished.

use std::fmt;
use sweep_core::Pos;

/// Counters collected while an agent is driven.
///
/// `frames` always equals `moves + cleaned`: a frame is rendered for
/// every successful move and every successful clean, and for nothing else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Move commands issued, successful or not.
    pub targets: u64,
    /// Moves that changed the agent's position.
    pub moves: u64,
    /// Moves rejected by the bounds or obstacle check.
    pub blocked_moves: u64,
    /// Dirt cells turned into cleaned cells.
    pub cleaned: u64,
    /// Frames handed to the render sink.
    pub frames: u64,
}

impl RunMetrics {
    /// Counters accumulated since `earlier` was captured.
    pub fn since(&self, earlier: &RunMetrics) -> RunMetrics {
        RunMetrics {
            targets: self.targets - earlier.targets,
            moves: self.moves - earlier.moves,
            blocked_moves: self.blocked_moves - earlier.blocked_moves,
            cleaned: self.cleaned - earlier.cleaned,
            frames: self.frames - earlier.frames,
        }
    }
}

/// Summary of one completed policy run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Name of the policy that ran.
    pub policy: String,
    /// Where the agent started.
    pub start: Pos,
    /// Where the agent ended.
    pub final_position: Pos,
    /// Counters for this run only.
    pub metrics: RunMetrics,
    /// Dirt cells still on the surface afterwards.
    pub remaining_dirt: usize,
}

impl RunReport {
    /// True if no dirt is left.
    pub fn is_clean(&self) -> bool {
        self.remaining_dirt == 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} finished at {}: cleaned {} cell(s), {} move(s), {} blocked, {} dirt remaining",
            self.policy,
            self.final_position,
            self.metrics.cleaned,
            self.metrics.moves,
            self.metrics.blocked_moves,
            self.remaining_dirt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.targets, 0);
        assert_eq!(m.moves, 0);
        assert_eq!(m.blocked_moves, 0);
        assert_eq!(m.cleaned, 0);
        assert_eq!(m.frames, 0);
    }

    #[test]
    fn since_subtracts_fieldwise() {
        let earlier = RunMetrics {
            targets: 3,
            moves: 2,
            blocked_moves: 1,
            cleaned: 1,
            frames: 3,
        };
        let later = RunMetrics {
            targets: 10,
            moves: 8,
            blocked_moves: 2,
            cleaned: 4,
            frames: 12,
        };
        assert_eq!(
            later.since(&earlier),
            RunMetrics {
                targets: 7,
                moves: 6,
                blocked_moves: 1,
                cleaned: 3,
                frames: 9,
            }
        );
    }

    #[test]
    fn report_display_summarises() {
        let r = RunReport {
            policy: "spiral".into(),
            start: Pos::ORIGIN,
            final_position: Pos::new(1, 1),
            metrics: RunMetrics {
                targets: 9,
                moves: 8,
                blocked_moves: 1,
                cleaned: 2,
                frames: 10,
            },
            remaining_dirt: 0,
        };
        assert!(r.is_clean());
        assert_eq!(
            r.to_string(),
            "spiral finished at (1, 1): cleaned 2 cell(s), 8 move(s), 1 blocked, 0 dirt remaining"
        );
    }
}
