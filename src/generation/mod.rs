//! # Generation Module
//!
//! Random tile spawning.
//!
//! After every effective move one new tile appears on a uniformly chosen
//! empty cell. Its value is a 2, or a 4 with a configurable probability.
//! Every draw goes through a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a game exactly.

use crate::config::DEFAULT_FOUR_PROBABILITY;
use crate::game::{Position, Tile};
use crate::{GameError, GameResult};
use rand::Rng;

/// Value of the common spawned tile.
pub const SMALL_SPAWN_VALUE: u32 = 2;

/// Value of the rare spawned tile.
pub const LARGE_SPAWN_VALUE: u32 = 4;

/// Picks where new tiles appear and what value they carry.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use slide2048::{Position, TileSpawner};
///
/// let spawner = TileSpawner::default();
/// let mut rng = StdRng::seed_from_u64(1);
/// let empty = [Position::new(0, 1), Position::new(2, 3)];
///
/// let tile = spawner.spawn(&empty, &mut rng).unwrap();
/// assert!(empty.contains(&tile.position()));
/// assert!(tile.value() == 2 || tile.value() == 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpawner {
    /// Probability that a spawned tile is a 4 (0.0 to 1.0)
    four_probability: f64,
}

impl TileSpawner {
    /// Creates a spawner, rejecting probabilities outside `[0, 1]`.
    pub fn new(four_probability: f64) -> GameResult<Self> {
        if !(0.0..=1.0).contains(&four_probability) {
            return Err(GameError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {four_probability}"
            )));
        }
        Ok(Self { four_probability })
    }

    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Draws a spawn value: 4 with the configured probability, otherwise 2.
    pub fn spawn_value<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if rng.gen_bool(self.four_probability) {
            LARGE_SPAWN_VALUE
        } else {
            SMALL_SPAWN_VALUE
        }
    }

    /// Chooses one of `empty` uniformly and builds the tile to place there.
    ///
    /// Returns `None` when there is no empty cell.
    pub fn spawn<R: Rng + ?Sized>(&self, empty: &[Position], rng: &mut R) -> Option<Tile> {
        if empty.is_empty() {
            return None;
        }
        let position = empty[rng.gen_range(0..empty.len())];
        let value = self.spawn_value(rng);
        Some(Tile::new(value, position.row, position.col))
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self {
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}
