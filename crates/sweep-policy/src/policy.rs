//! The [`TraversalPolicy`] trait.
//!
//! Policies are stateless strategies: the same dimensions always yield
//! the same plan, and nothing is carried between runs.

use sweep_core::{Actuator, Pos};

/// A deterministic full-coverage traversal strategy.
///
/// # Contract
///
/// - `plan()` MUST be deterministic and cover every cell of a
///   `width x height` grid.
/// - `&self`: policies hold no per-run state; anything that changes
///   during a run lives in the agent or the surface.
/// - `drive()` issues `move_to` then `clean_current_spot` for every
///   planned target, in that order, whether or not the move succeeded.
///
/// # Object safety
///
/// This trait is object-safe; drivers select a policy at runtime as
/// `Box<dyn TraversalPolicy>`.
///
/// # Examples
///
/// A policy that only visits the first row:
///
/// ```
/// use sweep_core::Pos;
/// use sweep_policy::TraversalPolicy;
///
/// struct FirstRow;
///
/// impl TraversalPolicy for FirstRow {
///     fn name(&self) -> &str { "first_row" }
///
///     fn plan(&self, width: u32, _height: u32) -> Vec<Pos> {
///         (0..width as i32).map(|x| Pos::new(x, 0)).collect()
///     }
/// }
///
/// assert_eq!(FirstRow.plan(3, 9).len(), 3);
/// ```
pub trait TraversalPolicy {
    /// Human-readable name for logs and reports.
    fn name(&self) -> &str;

    /// Target cells, in visiting order, for a `width x height` grid.
    fn plan(&self, width: u32, height: u32) -> Vec<Pos>;

    /// Drive `agent` through the whole plan.
    ///
    /// The default implementation is the standard move-then-clean loop;
    /// policies normally only override [`plan`](TraversalPolicy::plan).
    fn drive(&self, agent: &mut dyn Actuator) {
        let (width, height) = agent.extent();
        for target in self.plan(width, height) {
            agent.move_to(target.x, target.y);
            agent.clean_current_spot();
        }
    }
}

impl<P: TraversalPolicy + ?Sized> TraversalPolicy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn plan(&self, width: u32, height: u32) -> Vec<Pos> {
        (**self).plan(width, height)
    }

    fn drive(&self, agent: &mut dyn Actuator) {
        (**self).drive(agent)
    }
}
