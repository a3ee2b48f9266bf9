//! Coverage test helpers.
//!
//! These functions verify that a policy's plan satisfies the invariants
//! of the trait contract. Reused across every policy's test module.

use crate::policy::TraversalPolicy;
use indexmap::IndexSet;
use sweep_core::Pos;

/// Assert that every planned target lies inside the grid.
pub fn assert_plan_in_bounds(policy: &dyn TraversalPolicy, width: u32, height: u32) {
    for p in policy.plan(width, height) {
        assert!(
            p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height,
            "{} planned {p} outside {width}x{height}",
            policy.name()
        );
    }
}

/// Assert that the plan visits exactly `width * height` distinct cells.
pub fn assert_plan_visits_each_cell_once(policy: &dyn TraversalPolicy, width: u32, height: u32) {
    let plan = policy.plan(width, height);
    let expected = (width as usize) * (height as usize);
    assert_eq!(
        plan.len(),
        expected,
        "{} plan length ({}) != cell count ({expected}) for {width}x{height}",
        policy.name(),
        plan.len()
    );
    let unique: IndexSet<Pos> = plan.iter().copied().collect();
    assert_eq!(
        unique.len(),
        expected,
        "{} plan has duplicates for {width}x{height}",
        policy.name()
    );
}

/// Assert that two calls to `plan` return the same sequence.
pub fn assert_plan_deterministic(policy: &dyn TraversalPolicy, width: u32, height: u32) {
    let a = policy.plan(width, height);
    let b = policy.plan(width, height);
    assert_eq!(a, b, "{} plan is non-deterministic", policy.name());
}

/// Run all coverage checks on a policy for one grid shape.
pub fn run_full_coverage(policy: &dyn TraversalPolicy, width: u32, height: u32) {
    assert_plan_in_bounds(policy, width, height);
    assert_plan_visits_each_cell_once(policy, width, height);
    assert_plan_deterministic(policy, width, height);
}
