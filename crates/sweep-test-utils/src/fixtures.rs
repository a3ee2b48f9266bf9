//! Reusable surface fixtures.
//!
//! - [`demo_seeds`] / [`demo_surface`]: the 5x5 reference scenario:
//!   dirt at (1,1) and (3,3), an obstacle at (2,2).
//! - [`surface_with`]: any size, any seeds.

use sweep_core::Seed;
use sweep_surface::Surface;

/// Seeds for the 5x5 reference scenario.
pub fn demo_seeds() -> Vec<Seed> {
    vec![Seed::dirt(1, 1), Seed::dirt(3, 3), Seed::obstacle(2, 2)]
}

/// The 5x5 reference surface with [`demo_seeds`] applied.
pub fn demo_surface() -> Surface {
    surface_with(5, 5, &demo_seeds())
}

/// A `width x height` surface with `seeds` applied in order.
///
/// Panics on invalid dimensions or out-of-range seeds; fixtures are
/// expected to be well-formed.
pub fn surface_with(width: u32, height: u32, seeds: &[Seed]) -> Surface {
    let mut surface = Surface::new(width, height).expect("fixture dimensions must be non-zero");
    surface
        .apply_seeds(seeds)
        .expect("fixture seeds must be in bounds");
    surface
}
