//! Fixed timestep simulation tick
//!
//! [`tick`] advances one simulation step in a fixed order: scroll, coin
//! resolution, obstacle resolution, spawns, speed ramp, countdown. It runs
//! only while the round is running and the world has sane dimensions.
//!
//! [`movement_tick`] is the companion step for worm movement. The driver
//! calls it on its own, faster cadence (50ms vs 100ms by default) with the
//! currently-held direction flags, which replaces the original's nested
//! key-repeat timers with a plain discrete-time intent model.

use glam::Vec2;
use rand::Rng;

use super::collision::{coin_touches_worm, obstacle_hits_worm};
use super::state::{Coin, GameState, Obstacle};

/// Held-direction input flags for one movement tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Map a touch y-coordinate to a direction by comparing against the
    /// worm's current center: touches above the worm steer up, below steer down.
    pub fn toward(touch_y: f32, worm_y: f32, worm_size: f32) -> Self {
        let center = worm_y + worm_size / 2.0;
        Self {
            up: touch_y < center,
            down: touch_y > center,
        }
    }
}

/// Fire-and-forget notifications out of the simulation
///
/// The presentation layer hangs sounds (or nothing) off these; the core never
/// cares whether they did anything.
pub trait EventSink {
    /// A coin was picked up this tick
    fn coin_collected(&mut self) {}
    /// The worm hit an obstacle this tick
    fn obstacle_hit(&mut self) {}
}

/// Sink that ignores every event
pub struct NullSink;

impl EventSink for NullSink {}

/// Advance the simulation by one fixed tick
///
/// No-op unless the round is running and the world dimensions are valid;
/// degenerate dimensions pause the simulation rather than dividing by them.
pub fn tick(state: &mut GameState, rng: &mut impl Rng, sink: &mut dyn EventSink) {
    if !state.round.is_running() || !state.dims.is_valid() {
        return;
    }

    let speed = state.speed;
    let sizes = state.sizes;
    let worm_y = state.worm_y;

    // Scroll everything left
    for coin in &mut state.coins {
        coin.pos.x -= speed;
    }
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }

    // Coins: off-screen ones vanish unscored, touched ones score one point each
    let mut collected = 0u32;
    state.coins.retain(|coin| {
        if coin.pos.x < 0.0 {
            return false;
        }
        if coin_touches_worm(coin.pos, worm_y, sizes.worm, sizes.coin) {
            collected += 1;
            return false;
        }
        true
    });
    for _ in 0..collected {
        state.round.add_score(1);
        sink.coin_collected();
    }

    // Obstacles: off-screen ones vanish; any touching the worm ends the round
    // (the obstacle itself stays put)
    state.obstacles.retain(|o| o.pos.x >= 0.0);
    let hit = state
        .obstacles
        .iter()
        .any(|o| obstacle_hits_worm(o.pos, worm_y, sizes.worm, sizes.obstacle));
    if hit {
        state.round.on_collision();
        sink.obstacle_hit();
        log::info!("Worm down - final score {}", state.round.score());
    }

    // Coin spawn at the right edge
    if rng.random::<f32>() < state.tuning.coin_spawn_chance {
        let span = state.dims.height - sizes.coin;
        if span > 0.0 {
            let y = rng.random_range(0.0..span);
            state.coins.push(Coin {
                pos: Vec2::new(state.dims.width, y),
            });
        }
    }

    // Obstacle spawn, subject to the minimum vertical gap against every
    // existing obstacle. A rejected proposal is dropped, not retried.
    if rng.random::<f32>() < state.tuning.obstacle_spawn_chance {
        let span = state.dims.height - sizes.obstacle;
        if span > 0.0 {
            let y = rng.random_range(0.0..span);
            let min_gap = state.tuning.min_gap(sizes.worm);
            if obstacle_gap_clear(&state.obstacles, y, min_gap) {
                state.obstacles.push(Obstacle {
                    pos: Vec2::new(state.dims.width, y),
                });
            }
        }
    }

    // Linear difficulty ramp, uncapped; the round timer bounds it in practice
    state.speed += state.tuning.speed_increment;

    // Countdown last. If the collision above already ended the round this is
    // a no-op, so a collision tick never also burns timer.
    state.round.tick(state.tuning.tick_interval_ms);
}

/// True if a proposed spawn height keeps the minimum vertical gap to every
/// existing obstacle
pub fn obstacle_gap_clear(obstacles: &[Obstacle], y: f32, min_gap: f32) -> bool {
    obstacles.iter().all(|o| (o.pos.y - y).abs() >= min_gap)
}

/// Apply one movement step in the held direction, clamped to the world.
/// Opposing or absent inputs cancel out. No-op outside a running round.
pub fn movement_tick(state: &mut GameState, input: TickInput) {
    if !state.round.is_running() || !state.dims.is_valid() {
        return;
    }
    let direction = match (input.up, input.down) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => return,
    };
    state.move_worm(direction);
}
