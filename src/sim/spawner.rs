//! Periodic enemy and food spawning
//!
//! Spawns are due-time tasks rather than wall-clock timers: the frame driver
//! drains whatever has come due before each tick, so a test can drive the
//! schedule with plain timestamps.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, Food, GameState};

/// Recurring spawn task kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Enemy,
    Food,
}

/// Next due time for each recurring spawn task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTimers {
    enemy_interval_ms: f64,
    food_interval_ms: f64,
    next_enemy_ms: f64,
    next_food_ms: f64,
}

impl SpawnTimers {
    /// Both tasks fire immediately at `start_ms`, then every interval
    pub fn new(start_ms: f64, enemy_interval_ms: f64, food_interval_ms: f64) -> Self {
        Self {
            enemy_interval_ms,
            food_interval_ms,
            next_enemy_ms: start_ms,
            next_food_ms: start_ms,
        }
    }

    /// Pop every spawn due at or before `now_ms`, earliest first.
    /// Enemy wins ties.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<SpawnKind> {
        let mut due = Vec::new();
        loop {
            let enemy_due = self.next_enemy_ms <= now_ms;
            let food_due = self.next_food_ms <= now_ms;
            match (enemy_due, food_due) {
                (false, false) => break,
                (true, food) if !food || self.next_enemy_ms <= self.next_food_ms => {
                    due.push(SpawnKind::Enemy);
                    self.next_enemy_ms += self.enemy_interval_ms;
                }
                _ => {
                    due.push(SpawnKind::Food);
                    self.next_food_ms += self.food_interval_ms;
                }
            }
        }
        due
    }

    pub fn next_enemy_ms(&self) -> f64 {
        self.next_enemy_ms
    }

    pub fn next_food_ms(&self) -> f64 {
        self.next_food_ms
    }
}

/// Append one enemy at a random arena point
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let pos = state.arena.random_point(rng);
    log::debug!("Enemy spawned at ({:.0}, {:.0})", pos.x, pos.y);
    state.enemies.push(Enemy::new(pos, &state.tuning));
}

/// Append one food pellet at a random arena point with a random size
pub fn spawn_food(state: &mut GameState, rng: &mut impl Rng) {
    let pos = state.arena.random_point(rng);
    let tuning = &state.tuning;
    let size = tuning.food_min_size
        + rng.random::<f32>() * (tuning.food_max_size - tuning.food_min_size);
    state.food.push(Food::new(pos, size));
}

/// Run one spawn task
pub fn spawn(state: &mut GameState, kind: SpawnKind, rng: &mut impl Rng) {
    match kind {
        SpawnKind::Enemy => spawn_enemy(state, rng),
        SpawnKind::Food => spawn_food(state, rng),
    }
}
