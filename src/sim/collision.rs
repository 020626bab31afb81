//! Proximity tests between the worm and scrolling entities
//!
//! Both tests use independent per-axis thresholds (a box-shaped hitbox), not
//! Euclidean distance. The horizontal term compares `entity.x` against the
//! worm's *size* rather than its left edge (the worm is pinned at x = 0), so
//! the reference point is effectively the worm's right edge. That convention
//! is load-bearing for game feel and must not be "corrected" into a symmetric
//! box test.

use glam::Vec2;

/// Coin pickup test: within half-size-sum of the worm on both axes
pub fn coin_touches_worm(coin: Vec2, worm_y: f32, worm_size: f32, coin_size: f32) -> bool {
    let reach = worm_size / 2.0 + coin_size / 2.0;
    (coin.x - worm_size).abs() < reach && (coin.y - worm_y).abs() < reach
}

/// Obstacle collision test: a tighter box, one obstacle-size on both axes
pub fn obstacle_hits_worm(obstacle: Vec2, worm_y: f32, worm_size: f32, obstacle_size: f32) -> bool {
    (obstacle.x - worm_size).abs() < obstacle_size && (obstacle.y - worm_y).abs() < obstacle_size
}

#[cfg(test)]
mod tests {
    use super::*;

    // Original world: worm 100, coin/obstacle 70
    const WORM: f32 = 100.0;
    const COIN: f32 = 70.0;
    const OBSTACLE: f32 = 70.0;

    #[test]
    fn test_coin_dead_on() {
        assert!(coin_touches_worm(Vec2::new(WORM, 300.0), 300.0, WORM, COIN));
    }

    #[test]
    fn test_coin_horizontal_threshold() {
        // Threshold is 85 around x = worm_size = 100
        assert!(coin_touches_worm(Vec2::new(184.0, 300.0), 300.0, WORM, COIN));
        assert!(!coin_touches_worm(Vec2::new(185.0, 300.0), 300.0, WORM, COIN));
        assert!(coin_touches_worm(Vec2::new(16.0, 300.0), 300.0, WORM, COIN));
        assert!(!coin_touches_worm(Vec2::new(15.0, 300.0), 300.0, WORM, COIN));
    }

    #[test]
    fn test_coin_vertical_threshold() {
        assert!(coin_touches_worm(Vec2::new(WORM, 384.0), 300.0, WORM, COIN));
        assert!(!coin_touches_worm(Vec2::new(WORM, 385.0), 300.0, WORM, COIN));
    }

    #[test]
    fn test_coin_box_not_circle() {
        // Both axes right at 84/85 of the threshold: a circular test would
        // reject this corner, the box test accepts it
        assert!(coin_touches_worm(Vec2::new(184.0, 384.0), 300.0, WORM, COIN));
    }

    #[test]
    fn test_obstacle_dead_on() {
        assert!(obstacle_hits_worm(Vec2::new(WORM, 300.0), 300.0, WORM, OBSTACLE));
    }

    #[test]
    fn test_obstacle_tighter_box() {
        // Obstacle threshold is 70, not 85
        assert!(obstacle_hits_worm(Vec2::new(169.0, 300.0), 300.0, WORM, OBSTACLE));
        assert!(!obstacle_hits_worm(Vec2::new(170.0, 300.0), 300.0, WORM, OBSTACLE));
        assert!(obstacle_hits_worm(Vec2::new(WORM, 369.0), 300.0, WORM, OBSTACLE));
        assert!(!obstacle_hits_worm(Vec2::new(WORM, 370.0), 300.0, WORM, OBSTACLE));
    }

    #[test]
    fn test_far_right_entities_miss() {
        // Fresh spawns at the right edge never touch the worm
        assert!(!coin_touches_worm(Vec2::new(800.0, 300.0), 300.0, WORM, COIN));
        assert!(!obstacle_hits_worm(Vec2::new(800.0, 300.0), 300.0, WORM, OBSTACLE));
    }
}
