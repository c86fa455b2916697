//! Game state and core simulation types

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Square;
use super::motion::seek_toward;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was eaten; frozen until acknowledged
    GameOver,
}

/// Playable area (canvas size in pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniformly random point inside the arena
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }
}

/// The player's cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.player_init_size,
            speed: tuning.player_max_speed,
        }
    }

    /// Step toward a target within range
    pub fn seek(&mut self, target: Vec2, range: f32) -> bool {
        seek_toward(&mut self.pos, self.speed, target, range)
    }

    /// Lose a little speed (called every frame)
    pub fn decay_speed(&mut self, tuning: &Tuning) {
        self.speed = (self.speed - tuning.player_speed_decay).max(tuning.player_min_speed);
    }

    /// Shrink after being bitten. Returns true if the size floor was reached.
    pub fn shrink(&mut self, amount: f32, tuning: &Tuning) -> bool {
        self.size -= amount;
        if self.size <= tuning.player_min_size {
            self.size = tuning.player_min_size;
            return true;
        }
        false
    }
}

impl Square for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}

/// A hostile cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Chasing the player this frame
    pub angry: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.enemy_init_size,
            speed: tuning.enemy_max_speed,
            angry: false,
        }
    }

    pub fn seek(&mut self, target: Vec2, range: f32) -> bool {
        seek_toward(&mut self.pos, self.speed, target, range)
    }

    /// Grow after a bite, unless that would reach the size cap.
    /// Bigger enemies are slower.
    pub fn feed(&mut self, tuning: &Tuning) {
        if self.size + tuning.feed_increment < tuning.enemy_max_size {
            self.size += tuning.feed_increment;
            self.speed = (self.speed - tuning.enemy_speed_decrement).max(tuning.enemy_min_speed);
        }
    }
}

impl Square for Enemy {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}

/// A stationary food pellet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    pub size: f32,
}

impl Food {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }
}

impl Square for Food {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance in effect for this run
    pub tuning: Tuning,
    pub arena: Arena,
    /// Timestamp (ms) the current session started
    pub session_start_ms: f64,
    /// Score as of the last tick
    pub score: u64,
    pub phase: GamePhase,
    /// Latest pointer position in arena coordinates
    pub pointer: Vec2,
    pub player: Player,
    /// Enemies in spawn order (never removed)
    pub enemies: Vec<Enemy>,
    pub food: Vec<Food>,
}

impl GameState {
    /// Create a new session with the player at a random spot
    pub fn new(
        seed: u64,
        tuning: Tuning,
        arena: Arena,
        now_ms: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let player = Player::new(arena.random_point(rng), &tuning);
        Self {
            seed,
            tuning,
            arena,
            session_start_ms: now_ms,
            score: 0,
            phase: GamePhase::Playing,
            pointer: Vec2::ZERO,
            player,
            enemies: Vec::new(),
            food: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Milliseconds since the session started
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.session_start_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state() {
        let mut rng = Pcg32::seed_from_u64(7);
        let arena = Arena::new(800.0, 600.0);
        let state = GameState::new(7, Tuning::default(), arena, 1000.0, &mut rng);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.size, 20.0);
        assert_eq!(state.player.speed, 4.0);
        assert!(state.player.pos.x >= 0.0 && state.player.pos.x <= 800.0);
        assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= 600.0);
        assert!(state.enemies.is_empty());
        assert!(state.food.is_empty());
        assert_eq!(state.elapsed_ms(1500.0), 500.0);
    }

    #[test]
    fn test_enemy_feed_caps_size_and_slows() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(Vec2::ZERO, &tuning);
        for _ in 0..50 {
            enemy.feed(&tuning);
            assert!(enemy.size <= tuning.enemy_max_size);
            assert!(enemy.speed >= tuning.enemy_min_speed);
        }
        // 30 + 5n stays below 90
        assert_eq!(enemy.size, 85.0);
        assert_eq!(enemy.speed, tuning.enemy_min_speed);
    }

    #[test]
    fn test_player_shrink_floor() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        assert!(!player.shrink(5.0, &tuning));
        assert_eq!(player.size, 15.0);
        assert!(!player.shrink(5.0, &tuning));
        assert!(player.shrink(5.0, &tuning));
        assert_eq!(player.size, tuning.player_min_size);
    }

    #[test]
    fn test_player_speed_decay_floor() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO, &tuning);
        for _ in 0..1000 {
            player.decay_speed(&tuning);
        }
        assert_eq!(player.speed, tuning.player_min_speed);
    }
}
