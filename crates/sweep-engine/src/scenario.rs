//! Seed generation for surfaces.
//!
//! Random scenarios draw from a caller-supplied RNG, so the same seed
//! always reproduces the same layout. Sessions use a [`ChaCha8Rng`]
//! seeded from [`ScenarioConfig::Random`]'s `seed`.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sweep_core::{Pos, Seed};

use crate::config::ScenarioConfig;

/// Scatter `obstacles` obstacle seeds and `dirt` dirt seeds over a
/// `width x height` grid.
///
/// Every seed lands on a distinct cell and none lands on `start`.
/// Requests beyond the number of free cells are truncated; obstacles
/// are placed first.
pub fn random_seeds<R: Rng + ?Sized>(
    rng: &mut R,
    width: u32,
    height: u32,
    start: Pos,
    dirt: usize,
    obstacles: usize,
) -> Vec<Seed> {
    let mut free: Vec<Pos> = (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Pos::new(x, y)))
        .filter(|&p| p != start)
        .collect();
    free.shuffle(rng);

    let obstacles = obstacles.min(free.len());
    let dirt = dirt.min(free.len() - obstacles);
    let (obstacle_cells, rest) = free.split_at(obstacles);
    obstacle_cells
        .iter()
        .map(|p| Seed::obstacle(p.x, p.y))
        .chain(rest[..dirt].iter().map(|p| Seed::dirt(p.x, p.y)))
        .collect()
}

impl ScenarioConfig {
    /// Concrete seeds for a `width x height` surface with the agent at
    /// `start`.
    pub fn seeds(&self, width: u32, height: u32, start: Pos) -> Vec<Seed> {
        match self {
            ScenarioConfig::Fixed(seeds) => seeds.clone(),
            ScenarioConfig::Random {
                seed,
                dirt,
                obstacles,
            } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                random_seeds(&mut rng, width, height, start, *dirt, *obstacles)
            }
        }
    }
}
