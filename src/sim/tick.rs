//! Per-frame simulation tick
//!
//! Order matters: enemies feed before the player does, so a bite that ends
//! the game also cancels this frame's player update.

use rand::Rng;

use super::collision::overlaps;
use super::score::{ClockTime, compute_score};
use super::state::{GamePhase, GameState};

/// Inputs for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Frame timestamp (ms)
    pub now_ms: f64,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Score after this tick
    pub score: u64,
    pub clock: ClockTime,
    /// The player was eaten this tick
    pub game_over: bool,
    /// Food pellets eaten this tick
    pub food_eaten: usize,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) -> TickOutcome {
    let clock = ClockTime::from_elapsed_ms(state.elapsed_ms(input.now_ms));

    if state.phase == GamePhase::GameOver {
        return TickOutcome {
            score: state.score,
            clock,
            ..Default::default()
        };
    }

    update_score(state, clock);
    let mut outcome = TickOutcome {
        score: state.score,
        clock,
        ..Default::default()
    };

    if update_enemies(state, rng) {
        enter_game_over(state, input.now_ms);
        outcome.game_over = true;
        return outcome;
    }

    outcome.food_eaten = update_player(state);
    outcome
}

fn update_score(state: &mut GameState, clock: ClockTime) {
    state.score = compute_score(state.player.size, state.tuning.player_min_size, clock);
}

/// Chase, wander and bite. Returns true if the player was eaten.
fn update_enemies(state: &mut GameState, rng: &mut impl Rng) -> bool {
    let tuning = &state.tuning;
    let player = &mut state.player;

    for enemy in &mut state.enemies {
        enemy.angry = enemy.seek(player.pos, tuning.aggression_range);

        if !enemy.angry {
            let wander = state.arena.random_point(rng);
            enemy.seek(wander, f32::INFINITY);
        } else if overlaps(&*enemy, &*player) {
            enemy.feed(tuning);
            if player.shrink(tuning.feed_increment, tuning) {
                return true;
            }
        }
    }
    false
}

/// Follow the pointer and eat any food touched. Returns the number eaten.
fn update_player(state: &mut GameState) -> usize {
    let tuning = &state.tuning;
    let player = &mut state.player;

    player.seek(state.pointer, f32::INFINITY);
    player.decay_speed(tuning);

    let before = state.food.len();
    let mut gained = 0.0;
    state.food.retain(|food| {
        if overlaps(&*player, food) {
            gained += food.size;
            false
        } else {
            true
        }
    });
    let eaten = before - state.food.len();

    if eaten > 0 {
        player.size += gained;
        player.speed = tuning.player_max_speed;
    }
    eaten
}

fn enter_game_over(state: &mut GameState, now_ms: f64) {
    log::info!(
        "Game over: eaten at size {:.1} by one of {} enemies",
        state.player.size,
        state.enemies.len()
    );
    state.phase = GamePhase::GameOver;
    state.session_start_ms = now_ms;
    state.score = 0;
}
