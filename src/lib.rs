//! Worm Crowley - a side-scrolling coin-chase arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, round lifecycle)
//! - `tuning`: Data-driven game balance
//!
//! The crate contains no rendering or platform code. A presentation layer
//! drives the simulation on a fixed timer, feeds it held-direction input,
//! and draws the [`sim::Snapshot`] it gets back each tick.

pub mod sim;
pub mod tuning;

pub use sim::{EventSink, GameState, NullSink, RoundPhase, Snapshot, TickInput};
pub use tuning::Tuning;
