//! Frame driver
//!
//! Owns the session state and runs the three recurring tasks (enemy spawn,
//! food spawn, frame tick) against host-supplied timestamps. Pointer moves
//! and the game-over acknowledgement arrive as plain method calls, so the
//! whole loop can be driven deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::best_score::{BestScore, ScoreStore};
use crate::consts::GAME_OVER_MESSAGE;
use crate::renderer::{Frame, Hud, Presenter};
use crate::sim::{Arena, GameState, SpawnTimers, TickInput, TickOutcome, spawn, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game {
    state: GameState,
    timers: SpawnTimers,
    rng: Pcg32,
    best: BestScore,
    /// Last readout shown; held while the game is frozen
    hud: Hud,
    frames: u64,
}

impl Game {
    /// Start a session at `now_ms`. Both spawners fire on the first frame.
    pub fn new(
        seed: u64,
        tuning: Tuning,
        arena: Arena,
        store: Box<dyn ScoreStore>,
        now_ms: f64,
    ) -> Self {
        let best = BestScore::load(store);
        let mut rng = Pcg32::seed_from_u64(seed);
        let timers = SpawnTimers::new(now_ms, tuning.enemy_interval_ms, tuning.food_interval_ms);
        let state = GameState::new(seed, tuning, arena, now_ms, &mut rng);
        log::info!(
            "Game started with seed {} in a {}x{} arena",
            seed,
            arena.width,
            arena.height
        );

        Self {
            state,
            timers,
            rng,
            hud: Hud {
                best: best.value(),
                ..Default::default()
            },
            best,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn best_score(&self) -> u64 {
        self.best.value()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Latest pointer position in arena coordinates
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.state.pointer = Vec2::new(x, y);
    }

    /// Canvas was resized. Later spawns and wander targets use the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.arena = Arena::new(width, height);
    }

    /// Run one frame: due spawns, then the tick, then the presenter handoff
    pub fn frame(&mut self, now_ms: f64, presenter: &mut impl Presenter) -> TickOutcome {
        // Spawners keep running through game over
        for kind in self.timers.drain_due(now_ms) {
            spawn(&mut self.state, kind, &mut self.rng);
        }

        let was_playing = !self.state.is_game_over();
        let outcome = tick(&mut self.state, &TickInput { now_ms }, &mut self.rng);
        if self.best.record(outcome.score) {
            log::debug!("New best score: {}", outcome.score);
        }
        self.frames += 1;

        if outcome.game_over {
            log::info!(
                "Final score {} (best {}) after {} frames",
                outcome.score,
                self.best.value(),
                self.frames
            );
            presenter.game_over(GAME_OVER_MESSAGE);
        }

        presenter.render(&Frame {
            player: &self.state.player,
            enemies: &self.state.enemies,
            food: &self.state.food,
        });

        // A frozen game keeps showing the score and time it died with
        if was_playing {
            self.hud.score = outcome.score;
            self.hud.clock = outcome.clock;
        }
        self.hud.best = self.best.value();
        self.hud.game_over = self.state.is_game_over();
        presenter.show_hud(&self.hud);

        outcome
    }

    /// Game-over acknowledgement: start a brand new session.
    /// Ignored (returns false) while the game is still running.
    pub fn acknowledge(&mut self, now_ms: f64) -> bool {
        if !self.state.is_game_over() {
            return false;
        }

        let seed = self.rng.random::<u64>();
        let tuning = self.state.tuning.clone();
        let arena = self.state.arena;

        self.rng = Pcg32::seed_from_u64(seed);
        self.timers = SpawnTimers::new(now_ms, tuning.enemy_interval_ms, tuning.food_interval_ms);
        self.state = GameState::new(seed, tuning, arena, now_ms, &mut self.rng);
        self.hud = Hud {
            best: self.best.value(),
            ..Default::default()
        };
        self.frames = 0;

        log::info!("Game restarted with seed {} (best {})", seed, self.best.value());
        true
    }
}
