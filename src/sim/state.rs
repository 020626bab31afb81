//! Game state and core simulation types
//!
//! [`GameState`] owns everything a tick needs: the worm's vertical position,
//! the scrolling entity collections, the scroll speed, the round controller,
//! and the world geometry. Entities are value-like records; nothing carries
//! identity beyond its position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::round::{Round, RoundPhase};
use super::world::{SpriteSizes, WorldDims};
use crate::tuning::Tuning;

/// A collectible coin scrolling right-to-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
}

/// A lethal obstacle scrolling right-to-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub dims: WorldDims,
    pub sizes: SpriteSizes,
    /// Worm vertical position; horizontal position is fixed at x = 0
    pub worm_y: f32,
    pub coins: Vec<Coin>,
    pub obstacles: Vec<Obstacle>,
    /// Current scroll speed (pixels per tick)
    pub speed: f32,
    pub round: Round,
    pub tuning: Tuning,
}

impl GameState {
    pub fn new(dims: WorldDims, tuning: Tuning) -> Self {
        let sizes = SpriteSizes::derive(dims, &tuning);
        Self {
            dims,
            sizes,
            worm_y: dims.height / 2.0,
            coins: Vec::new(),
            obstacles: Vec::new(),
            speed: tuning.initial_speed,
            round: Round::new(tuning.round_duration_ms),
            tuning,
        }
    }

    /// Begin a fresh round: clear entities, reset speed and score, recenter
    /// the worm, refill the timer. Valid from any phase.
    pub fn start(&mut self) {
        self.coins.clear();
        self.obstacles.clear();
        self.speed = self.tuning.initial_speed;
        self.worm_y = self.dims.height / 2.0;
        self.round.start(self.tuning.round_duration_ms);
        log::info!(
            "Round started: {}ms on the clock, speed {}",
            self.round.time_left_ms(),
            self.speed
        );
    }

    /// Move the worm one step up (-1) or down (+1), clamped to the world
    pub fn move_worm(&mut self, direction: f32) {
        self.worm_y += direction * self.tuning.move_step;
        self.clamp_worm();
    }

    /// Re-clamp the worm into `[0, height - worm_size]`
    pub fn clamp_worm(&mut self) {
        let max_y = (self.dims.height - self.sizes.worm).max(0.0);
        self.worm_y = self.worm_y.clamp(0.0, max_y);
    }

    /// Apply new world dimensions: re-derive sprite sizes and keep the worm
    /// in bounds. Existing entities keep their positions; obstacle spacing is
    /// not re-validated after a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.dims = WorldDims::new(width, height);
        self.sizes = SpriteSizes::derive(self.dims, &self.tuning);
        if self.dims.is_valid() {
            self.clamp_worm();
        }
    }

    /// Render-sink view of the current tick, for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            worm: Vec2::new(0.0, self.worm_y),
            sizes: self.sizes,
            coins: self.coins.iter().map(|c| c.pos).collect(),
            obstacles: self.obstacles.iter().map(|o| o.pos).collect(),
            score: self.round.score(),
            time_left_ms: self.round.time_left_ms(),
            phase: self.round.phase(),
        }
    }
}

/// Per-tick snapshot handed to the presentation layer
///
/// The core makes no assumption about how (or whether) this gets drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub worm: Vec2,
    pub sizes: SpriteSizes,
    pub coins: Vec<Vec2>,
    pub obstacles: Vec<Vec2>,
    pub score: u32,
    pub time_left_ms: u32,
    pub phase: RoundPhase,
}
