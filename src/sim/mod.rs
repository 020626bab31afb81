//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - No rendering or platform dependencies
//!
//! The presentation layer calls [`tick`] on a fixed interval while the round
//! is running, [`movement_tick`] on its own (faster) cadence, and draws the
//! [`Snapshot`] the state hands back.

pub mod collision;
pub mod round;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{coin_touches_worm, obstacle_hits_worm};
pub use round::{Round, RoundPhase};
pub use state::{Coin, GameState, Obstacle, Snapshot};
pub use tick::{movement_tick, tick, EventSink, NullSink, TickInput};
pub use world::{SpriteSizes, WorldDims};
