//! Test utilities and mock types for Sweep development.
//!
//! Provides mock implementations of core traits ([`RenderSink`],
//! [`Actuator`]) and reusable surface fixtures for constructing test
//! scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use sweep_core::{Actuator, Frame, Pos, RenderSink};

pub use fixtures::{demo_seeds, demo_surface, surface_with};

/// Sink that keeps every frame it is shown.
///
/// Inspect with [`frames`](RecordingSink::frames) after a run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<Frame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Agent position of every recorded frame, in order.
    pub fn agent_trail(&self) -> Vec<Pos> {
        self.frames.iter().map(Frame::agent).collect()
    }
}

impl RenderSink for RecordingSink {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

/// Sink that only counts frames.
#[derive(Debug, Default)]
pub struct CountingSink {
    pub count: usize,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for CountingSink {
    fn present(&mut self, _frame: &Frame) {
        self.count += 1;
    }
}

/// One call made against a [`ScriptedActuator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActuatorCall {
    Move(Pos),
    Clean,
}

/// In-memory [`Actuator`] with no surface behind it.
///
/// Cells are passable unless marked with [`block`](ScriptedActuator::block);
/// cells marked with [`dirty`](ScriptedActuator::dirty) report a clean the
/// first time the actuator stands on them. Every call is recorded.
#[derive(Debug)]
pub struct ScriptedActuator {
    width: u32,
    height: u32,
    position: Pos,
    blocked_cells: HashSet<Pos>,
    dirty_cells: HashSet<Pos>,
    calls: Vec<ActuatorCall>,
    blocked: usize,
}

impl ScriptedActuator {
    /// An obstacle-free `width x height` grid with the actuator at the origin.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            position: Pos::ORIGIN,
            blocked_cells: HashSet::new(),
            dirty_cells: HashSet::new(),
            calls: Vec::new(),
            blocked: 0,
        }
    }

    pub fn block(mut self, pos: Pos) -> Self {
        self.blocked_cells.insert(pos);
        self
    }

    pub fn dirty(mut self, pos: Pos) -> Self {
        self.dirty_cells.insert(pos);
        self
    }

    pub fn calls(&self) -> &[ActuatorCall] {
        &self.calls
    }

    /// Number of rejected moves.
    pub fn blocked(&self) -> usize {
        self.blocked
    }

    /// Targets of every move call, successful or not.
    pub fn move_targets(&self) -> Vec<Pos> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Move(p) => Some(*p),
                ActuatorCall::Clean => None,
            })
            .collect()
    }
}

impl Actuator for ScriptedActuator {
    fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn position(&self) -> Pos {
        self.position
    }

    fn move_to(&mut self, x: i32, y: i32) -> bool {
        let target = Pos::new(x, y);
        self.calls.push(ActuatorCall::Move(target));
        let in_bounds = x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height;
        if in_bounds && !self.blocked_cells.contains(&target) {
            self.position = target;
            true
        } else {
            self.blocked += 1;
            false
        }
    }

    fn clean_current_spot(&mut self) -> bool {
        self.calls.push(ActuatorCall::Clean);
        self.dirty_cells.remove(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_actuator_blocks_and_bounds() {
        let mut a = ScriptedActuator::open(2, 2).block(Pos::new(1, 0));
        assert!(!a.move_to(1, 0));
        assert!(!a.move_to(2, 0));
        assert!(a.move_to(1, 1));
        assert_eq!(a.position(), Pos::new(1, 1));
        assert_eq!(a.blocked(), 2);
    }

    #[test]
    fn scripted_actuator_cleans_dirt_once() {
        let mut a = ScriptedActuator::open(2, 2).dirty(Pos::ORIGIN);
        assert!(a.clean_current_spot());
        assert!(!a.clean_current_spot());
    }

    #[test]
    fn recording_sink_tracks_agent_trail() {
        let mut sink = RecordingSink::new();
        let s = surface_with(2, 1, &[]);
        sink.present(&s.render(0, 0));
        sink.present(&s.render(1, 0));
        assert_eq!(sink.agent_trail(), vec![Pos::new(0, 0), Pos::new(1, 0)]);
    }
}
