//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as timestamps, never read from a clock
//! - Seeded RNG only, passed in by the caller
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Square, overlaps, squares_overlap};
pub use motion::{distance, seek_toward, step_toward};
pub use score::{ClockTime, compute_score};
pub use spawner::{SpawnKind, SpawnTimers, spawn, spawn_enemy, spawn_food};
pub use state::{Arena, Enemy, Food, GamePhase, GameState, Player};
pub use tick::{TickInput, TickOutcome, tick};
