//! Data-driven game balance
//!
//! Every gameplay constant lives here so the tick logic never hard-codes a
//! magic number. Defaults reproduce the original game's feel (800x600 world,
//! 100px worm, 2 minute rounds).

use serde::{Deserialize, Serialize};

/// All gameplay tunables in one place
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation tick interval in milliseconds
    pub tick_interval_ms: u32,
    /// Round duration in milliseconds
    pub round_duration_ms: u32,
    /// Scroll speed at round start (pixels per tick)
    pub initial_speed: f32,
    /// Scroll speed increase per tick
    pub speed_increment: f32,
    /// Chance of spawning a coin each tick, in [0, 1]
    pub coin_spawn_chance: f32,
    /// Chance of proposing an obstacle each tick, in [0, 1]
    pub obstacle_spawn_chance: f32,
    /// Extra vertical clearance (beyond worm size) required between obstacles at spawn
    pub min_gap_margin: f32,
    /// Vertical distance covered by one movement step (pixels)
    pub move_step: f32,
    /// Movement cadence while a direction is held, in milliseconds
    pub move_repeat_ms: u32,
    /// Worm sprite size as a fraction of world width
    pub worm_size_frac: f32,
    /// Coin sprite size as a fraction of world width
    pub coin_size_frac: f32,
    /// Obstacle sprite size as a fraction of world width
    pub obstacle_size_frac: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            round_duration_ms: 120_000, // 2 minutes
            initial_speed: 10.0,
            speed_increment: 0.001,
            coin_spawn_chance: 0.02,
            obstacle_spawn_chance: 0.01,
            min_gap_margin: 20.0,
            move_step: 10.0,
            move_repeat_ms: 50,
            // Fractions of an 800px-wide world: 100px worm, 70px coins/obstacles
            worm_size_frac: 0.125,
            coin_size_frac: 0.0875,
            obstacle_size_frac: 0.0875,
        }
    }
}

impl Tuning {
    /// Minimum vertical gap between obstacles at spawn time, for a given worm size
    pub fn min_gap(&self, worm_size: f32) -> f32 {
        worm_size + self.min_gap_margin
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {} - using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }
}
