//! Headless demo driver
//!
//! Runs a full round without a renderer: a scripted pilot chases coins and
//! dodges obstacles while the simulation ticks at its fixed cadence, with two
//! movement ticks per sim tick (50ms vs 100ms). Useful for smoke-testing
//! balance changes to a tuning file.
//!
//! Usage: `worm-crowley [--seed N] [--tuning path.json]`

use rand::SeedableRng;
use rand_pcg::Pcg32;

use worm_crowley::sim::{movement_tick, tick, EventSink, GameState, TickInput, WorldDims};
use worm_crowley::Tuning;

/// Counts notifications the way a presentation layer would play sounds
#[derive(Default)]
struct TallySink {
    pickups: u32,
    collisions: u32,
}

impl EventSink for TallySink {
    fn coin_collected(&mut self) {
        self.pickups += 1;
        log::debug!("pickup sound");
    }
    fn obstacle_hit(&mut self) {
        self.collisions += 1;
        log::debug!("collision sound");
    }
}

/// Pick this tick's input: dodge the nearest threatening obstacle, otherwise
/// chase the nearest coin still ahead of the worm
fn pilot(state: &GameState) -> TickInput {
    let worm_center = state.worm_y + state.sizes.worm / 2.0;

    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.pos.x < 300.0 && (o.pos.y - state.worm_y).abs() < state.sizes.worm * 1.5)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));
    if let Some(obstacle) = threat {
        // Steer away from the obstacle's row
        return TickInput {
            up: obstacle.pos.y >= state.worm_y,
            down: obstacle.pos.y < state.worm_y,
        };
    }

    let target = state
        .coins
        .iter()
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));
    match target {
        Some(coin) => TickInput::toward(coin.pos.y + state.sizes.coin / 2.0, state.worm_y, state.sizes.worm),
        None => TickInput::default(),
    }
}

fn main() {
    env_logger::init();

    let mut seed: u64 = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut tuning = Tuning::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(value) = args.next().and_then(|v| v.parse().ok()) {
                    seed = value;
                }
            }
            "--tuning" => {
                if let Some(path) = args.next() {
                    tuning = Tuning::load_or_default(&path);
                }
            }
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
    }

    log::info!("Worm Crowley headless run, seed {}", seed);

    let mut state = GameState::new(WorldDims::default(), tuning);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut sink = TallySink::default();
    state.start();

    let mut ticks = 0u32;
    while state.round.is_running() {
        // Movement runs at twice the sim cadence, like the browser timers did
        let input = pilot(&state);
        movement_tick(&mut state, input);
        let input = pilot(&state);
        movement_tick(&mut state, input);
        tick(&mut state, &mut rng, &mut sink);
        ticks += 1;
    }

    let snapshot = state.snapshot();
    log::info!(
        "Round over after {} ticks: score {}, {} pickups, {} collisions, final speed {:.3}",
        ticks,
        snapshot.score,
        sink.pickups,
        sink.collisions,
        state.speed,
    );
    println!(
        "score {} in {} ticks ({})",
        snapshot.score,
        ticks,
        if sink.collisions > 0 { "hit an obstacle" } else { "timer expired" }
    );
}
