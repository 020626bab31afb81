//! World dimensions and derived sprite sizes
//!
//! Sprite sizes are fractions of world width, so everything rescales together
//! when the window resizes. Sizes must be recomputed whenever dimensions
//! change; [`crate::sim::GameState::resize`] is the only place that does so.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// World extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldDims {
    pub width: f32,
    pub height: f32,
}

impl WorldDims {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Degenerate dimensions pause the simulation instead of crashing it
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl Default for WorldDims {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Per-sprite pixel sizes derived from the current world width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub worm: f32,
    pub coin: f32,
    pub obstacle: f32,
}

impl SpriteSizes {
    pub fn derive(dims: WorldDims, tuning: &Tuning) -> Self {
        Self {
            worm: dims.width * tuning.worm_size_frac,
            coin: dims.width * tuning.coin_size_frac,
            obstacle: dims.width * tuning.obstacle_size_frac,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dims_give_original_sizes() {
        let sizes = SpriteSizes::derive(WorldDims::default(), &Tuning::default());
        assert_eq!(sizes.worm, 100.0);
        assert_eq!(sizes.coin, 70.0);
        assert_eq!(sizes.obstacle, 70.0);
    }

    #[test]
    fn test_sizes_track_width() {
        let sizes = SpriteSizes::derive(WorldDims::new(400.0, 600.0), &Tuning::default());
        assert_eq!(sizes.worm, 50.0);
        assert_eq!(sizes.coin, 35.0);
    }

    #[test]
    fn test_degenerate_dims_invalid() {
        assert!(WorldDims::default().is_valid());
        assert!(!WorldDims::new(0.0, 600.0).is_valid());
        assert!(!WorldDims::new(800.0, -1.0).is_valid());
    }
}
