//! Cell Chomp - grow by eating, avoid being eaten
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, feeding, spawning)
//! - `game`: Frame driver that owns the state and schedules spawn tasks
//! - `renderer`: Presentation interface and draw-list generation
//! - `best_score`: Best-score persistence
//! - `tuning`: Data-driven game balance

pub mod best_score;
pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use best_score::{BestScore, ScoreStore};
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Player speed bounds (units per frame)
    pub const PLAYER_MAX_SPEED: f32 = 4.0;
    pub const PLAYER_MIN_SPEED: f32 = 1.0;
    /// Speed lost every frame the player doesn't eat
    pub const PLAYER_SPEED_DECAY: f32 = 0.01;

    /// Player size (side of the square)
    pub const PLAYER_INIT_SIZE: f32 = 20.0;
    pub const PLAYER_MIN_SIZE: f32 = 5.0;

    /// Spawn periods (milliseconds)
    pub const ENEMY_INTERVAL_MS: f64 = 4000.0;
    pub const FOOD_INTERVAL_MS: f64 = 1000.0;

    /// Enemy size bounds and growth per bite
    pub const ENEMY_INIT_SIZE: f32 = 30.0;
    pub const ENEMY_MAX_SIZE: f32 = 90.0;
    pub const FEED_INCREMENT: f32 = 5.0;

    /// Enemy speed bounds; each bite slows the enemy down
    pub const ENEMY_MAX_SPEED: f32 = 2.0;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_DECREMENT: f32 = 0.1;

    /// Distance at which enemies stop wandering and chase the player
    pub const AGGRESSION_RANGE: f32 = 300.0;

    /// Food size range
    pub const FOOD_MIN_SIZE: f32 = 2.0;
    pub const FOOD_MAX_SIZE: f32 = 10.0;

    /// Default arena size, used when no canvas is available
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Shown when the player gets eaten
    pub const GAME_OVER_MESSAGE: &str = "You dead! Click to continue";
}
