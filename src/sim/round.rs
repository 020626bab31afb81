//! Round lifecycle: phase state machine, countdown timer, score
//!
//! The only transitions are `NotStarted --start--> Running`,
//! `Running --timeout|collision--> Over`, and `Over --start--> Running`.
//! Timer and collision handling are no-ops outside `Running`.

use serde::{Deserialize, Serialize};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the first start
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Round ended (timeout or collision)
    Over,
}

/// Round controller: owns phase, remaining time, and score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    phase: RoundPhase,
    /// Remaining time in milliseconds, counts down from the round duration
    time_left_ms: u32,
    score: u32,
}

impl Round {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            phase: RoundPhase::NotStarted,
            time_left_ms: duration_ms,
            score: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left_ms(&self) -> u32 {
        self.time_left_ms
    }

    /// Begin a fresh round: score to zero, timer refilled, phase to Running
    pub fn start(&mut self, duration_ms: u32) {
        self.phase = RoundPhase::Running;
        self.time_left_ms = duration_ms;
        self.score = 0;
    }

    /// Advance the countdown; at or below zero the round ends with the timer
    /// clamped to exactly zero. No-op unless running.
    pub fn tick(&mut self, delta_ms: u32) {
        if !self.is_running() {
            return;
        }
        if self.time_left_ms <= delta_ms {
            self.time_left_ms = 0;
            self.phase = RoundPhase::Over;
        } else {
            self.time_left_ms -= delta_ms;
        }
    }

    /// End the round immediately, regardless of remaining time. No-op unless running.
    pub fn on_collision(&mut self) {
        if self.is_running() {
            self.phase = RoundPhase::Over;
        }
    }

    /// Award points for a coin pickup. No-op unless running.
    pub fn add_score(&mut self, points: u32) {
        if self.is_running() {
            self.score += points;
        }
    }
}
