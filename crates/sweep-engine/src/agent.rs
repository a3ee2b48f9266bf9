//! The cleaning agent.
//!
//! An [`Agent`] holds the only mutable borrow of its
//! [`Surface`] for as long as it lives, so one agent per surface is
//! enforced by the borrow checker rather than by locking.

use sweep_core::{Actuator, Pos, RenderSink, SurfaceQuery};
use sweep_policy::TraversalPolicy;
use sweep_surface::Surface;
use tracing::{debug, info, trace};

use crate::config::ConfigError;
use crate::metrics::RunMetrics;

/// A robot positioned on a surface.
///
/// # Invariants
///
/// - The position is always in bounds and never on an obstacle.
/// - Exactly one frame is presented per successful move and per
///   successful clean. Blocked moves and no-op cleans render nothing.
pub struct Agent<'a> {
    surface: &'a mut Surface,
    sink: &'a mut dyn RenderSink,
    position: Pos,
    metrics: RunMetrics,
}

impl<'a> Agent<'a> {
    /// Place an agent on `surface` at `start`.
    ///
    /// Fails if `start` is out of bounds or an obstacle. No frame is
    /// rendered on placement.
    pub fn new(
        surface: &'a mut Surface,
        sink: &'a mut dyn RenderSink,
        start: Pos,
    ) -> Result<Self, ConfigError> {
        if !surface.is_in_bounds(start.x, start.y) {
            return Err(ConfigError::StartOutOfBounds {
                start,
                width: surface.width(),
                height: surface.height(),
            });
        }
        if surface.is_obstacle(start.x, start.y) {
            return Err(ConfigError::StartOnObstacle { start });
        }
        Ok(Self {
            surface,
            sink,
            position: start,
            metrics: RunMetrics::default(),
        })
    }

    /// Current position.
    pub fn position(&self) -> Pos {
        self.position
    }

    /// The surface being cleaned.
    pub fn surface(&self) -> &Surface {
        &*self.surface
    }

    /// Counters accumulated over the agent's lifetime.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Move to `(x, y)` if it is in bounds and not an obstacle.
    ///
    /// On success the position changes and one frame is rendered. A
    /// blocked move returns `false` and changes nothing.
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.metrics.targets += 1;
        if !self.surface.is_in_bounds(x, y) || self.surface.is_obstacle(x, y) {
            self.metrics.blocked_moves += 1;
            debug!(x, y, at = %self.position, "move blocked");
            return false;
        }
        self.position = Pos::new(x, y);
        self.metrics.moves += 1;
        trace!(x, y, "moved");
        self.render();
        true
    }

    /// Clean the current cell if it holds dirt.
    ///
    /// Renders one frame when something was cleaned; otherwise a no-op.
    pub fn clean_current_spot(&mut self) -> bool {
        let Pos { x, y } = self.position;
        if !self.surface.is_dirt(x, y) {
            return false;
        }
        // The position is always in bounds, so `clean` cannot fail here.
        if !matches!(self.surface.clean(x, y), Ok(true)) {
            return false;
        }
        self.metrics.cleaned += 1;
        debug!(x, y, "cleaned");
        self.render();
        true
    }

    /// Drive the agent through `policy` until its plan is exhausted.
    ///
    /// Returns the counters for this run only.
    pub fn run_policy(&mut self, policy: &dyn TraversalPolicy) -> RunMetrics {
        let before = self.metrics.clone();
        info!(
            policy = policy.name(),
            width = self.surface.width(),
            height = self.surface.height(),
            start = %self.position,
            "run started"
        );
        policy.drive(self);
        let run = self.metrics.since(&before);
        info!(
            policy = policy.name(),
            moves = run.moves,
            blocked = run.blocked_moves,
            cleaned = run.cleaned,
            end = %self.position,
            "run finished"
        );
        run
    }

    fn render(&mut self) {
        let frame = self.surface.render(self.position.x, self.position.y);
        self.sink.present(&frame);
        self.metrics.frames += 1;
    }
}

impl Actuator for Agent<'_> {
    fn extent(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    fn position(&self) -> Pos {
        self.position
    }

    fn move_to(&mut self, x: i32, y: i32) -> bool {
        Agent::move_to(self, x, y)
    }

    fn clean_current_spot(&mut self) -> bool {
        Agent::clean_current_spot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::{CellState, Glyph, Seed};
    use sweep_test_utils::{demo_surface, surface_with, CountingSink, RecordingSink};

    #[test]
    fn start_must_be_in_bounds() {
        let mut s = surface_with(3, 3, &[]);
        let mut sink = CountingSink::new();
        let err = Agent::new(&mut s, &mut sink, Pos::new(3, 0)).err();
        assert_eq!(
            err,
            Some(ConfigError::StartOutOfBounds {
                start: Pos::new(3, 0),
                width: 3,
                height: 3,
            })
        );
    }

    #[test]
    fn start_must_not_be_obstacle() {
        let mut s = demo_surface();
        let mut sink = CountingSink::new();
        let err = Agent::new(&mut s, &mut sink, Pos::new(2, 2)).err();
        assert_eq!(err, Some(ConfigError::StartOnObstacle { start: Pos::new(2, 2) }));
    }

    #[test]
    fn placement_renders_nothing() {
        let mut s = demo_surface();
        let mut sink = CountingSink::new();
        let agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        assert_eq!(agent.metrics().frames, 0);
        drop(agent);
        assert_eq!(sink.count, 0);
    }

    #[test]
    fn move_into_obstacle_is_blocked() {
        let mut s = demo_surface();
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::new(1, 2)).unwrap();
        assert!(!agent.move_to(2, 2));
        assert_eq!(agent.position(), Pos::new(1, 2));
        assert_eq!(agent.metrics().blocked_moves, 1);
        assert_eq!(agent.metrics().frames, 0);
    }

    #[test]
    fn move_out_of_bounds_is_blocked() {
        let mut s = surface_with(2, 2, &[]);
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (i32::MAX, i32::MIN)] {
            assert!(!agent.move_to(x, y));
            assert_eq!(agent.position(), Pos::ORIGIN);
        }
        assert_eq!(agent.metrics().blocked_moves, 5);
        drop(agent);
        assert_eq!(sink.count, 0);
    }

    #[test]
    fn successful_move_renders_agent_at_target() {
        let mut s = surface_with(3, 1, &[]);
        let mut sink = RecordingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        assert!(agent.move_to(2, 0));
        drop(agent);
        assert_eq!(sink.len(), 1);
        let frame = sink.last().unwrap();
        assert_eq!(frame.agent(), Pos::new(2, 0));
        assert_eq!(frame.glyph(2, 0), Some(Glyph::Agent));
        assert_eq!(frame.glyph(0, 0), Some(Glyph::Empty));
    }

    #[test]
    fn moves_are_not_limited_to_neighbours() {
        let mut s = surface_with(5, 5, &[Seed::obstacle(1, 0)]);
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        assert!(agent.move_to(4, 4));
        assert_eq!(agent.position(), Pos::new(4, 4));
    }

    #[test]
    fn clean_only_renders_when_dirt_removed() {
        let mut s = demo_surface();
        let mut sink = RecordingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::new(1, 1)).unwrap();
        assert!(agent.clean_current_spot());
        assert!(!agent.clean_current_spot());
        assert_eq!(agent.metrics().cleaned, 1);
        assert_eq!(agent.metrics().frames, 1);
        drop(agent);
        assert_eq!(sink.len(), 1);
        assert_eq!(s.cell(1, 1), Some(CellState::Cleaned));
    }

    #[test]
    fn clean_on_empty_cell_is_noop() {
        let mut s = demo_surface();
        let before = s.clone();
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        assert!(!agent.clean_current_spot());
        drop(agent);
        assert_eq!(sink.count, 0);
        assert_eq!(s, before);
    }

    #[test]
    fn cleaning_after_blocked_move_acts_on_actual_position() {
        let mut s = surface_with(3, 1, &[Seed::dirt(1, 0), Seed::obstacle(2, 0)]);
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::new(1, 0)).unwrap();
        assert!(!agent.move_to(2, 0));
        assert!(agent.clean_current_spot());
        drop(agent);
        assert_eq!(s.cell(1, 0), Some(CellState::Cleaned));
        assert_eq!(s.cell(2, 0), Some(CellState::Obstacle));
    }

    #[test]
    fn actuator_reports_extent_and_delegates() {
        let mut s = surface_with(4, 2, &[Seed::dirt(3, 1)]);
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        let actuator: &mut dyn Actuator = &mut agent;
        assert_eq!(actuator.extent(), (4, 2));
        assert!(actuator.move_to(3, 1));
        assert!(actuator.clean_current_spot());
        assert_eq!(actuator.position(), Pos::new(3, 1));
    }

    #[test]
    fn run_metrics_are_per_run() {
        let mut s = surface_with(2, 2, &[Seed::dirt(1, 1)]);
        let mut sink = CountingSink::new();
        let mut agent = Agent::new(&mut s, &mut sink, Pos::ORIGIN).unwrap();
        let first = agent.run_policy(&sweep_policy::RowSweep);
        assert_eq!(first.targets, 4);
        assert_eq!(first.cleaned, 1);
        let second = agent.run_policy(&sweep_policy::RowSweep);
        assert_eq!(second.targets, 4);
        assert_eq!(second.cleaned, 0);
        assert_eq!(agent.metrics().targets, 8);
    }
}
