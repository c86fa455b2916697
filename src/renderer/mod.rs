//! Presentation interface
//!
//! The simulation never draws. Each frame the driver hands a [`Frame`] and a
//! [`Hud`] to a [`Presenter`]; hosts decide what that means (canvas, logs,
//! a recording in tests).

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use shapes::{Color, Quad, frame_quads};

use crate::sim::{ClockTime, Enemy, Food, Player};

/// Entity snapshot handed to the presenter every frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub food: &'a [Food],
}

/// Score/timer readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u64,
    pub best: u64,
    pub clock: ClockTime,
    /// Waiting for the game-over acknowledgement
    pub game_over: bool,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn best_text(&self) -> String {
        format!("Record: {}", self.best)
    }

    pub fn time_text(&self) -> String {
        format!("Game time: {}:{}", self.clock.minutes, self.clock.seconds)
    }
}

/// Output side of the game
pub trait Presenter {
    /// Draw the entities
    fn render(&mut self, frame: &Frame<'_>);

    /// Update score and timer display
    fn show_hud(&mut self, hud: &Hud);

    /// Player was eaten. Called once per game over; the host should block
    /// play until it calls [`crate::Game::acknowledge`].
    fn game_over(&mut self, message: &str);
}
