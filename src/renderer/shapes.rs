//! Draw-list generation for square entities

use glam::Vec2;

use super::Frame;
use crate::sim::Player;

/// RGBA color, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

pub const PLAYER_BODY: Color = Color::rgb(0x29, 0x98, 0x3B);
pub const PLAYER_CORE: Color = Color::rgb(0, 255, 255);
pub const ENEMY_ANGRY: Color = Color::rgb(0xE1, 0x4B, 0x4B);
pub const ENEMY_CALM: Color = Color::rgb(0x8B, 0x13, 0x13);
pub const FOOD: Color = Color::rgb(0, 0x80, 0);

/// A filled axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub center: Vec2,
    pub size: f32,
    pub color: Color,
}

impl Quad {
    /// Top-left corner, for canvas-style `fill_rect`
    pub fn top_left(&self) -> Vec2 {
        self.center - Vec2::splat(self.size / 2.0)
    }
}

/// Opacity of the player's inner square: full at top speed, clear at speed 1
pub fn core_opacity(speed: f32) -> f32 {
    ((speed - 1.0) / 4.0).clamp(0.0, 1.0)
}

fn player_quads(player: &Player) -> [Quad; 2] {
    [
        Quad {
            center: player.pos,
            size: player.size,
            color: PLAYER_BODY,
        },
        Quad {
            center: player.pos,
            size: player.size / 2.0,
            color: PLAYER_CORE.with_alpha(core_opacity(player.speed)),
        },
    ]
}

/// Squares to draw for a frame, back to front: player, enemies, food
pub fn frame_quads(frame: &Frame<'_>) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(2 + frame.enemies.len() + frame.food.len());
    quads.extend(player_quads(frame.player));
    quads.extend(frame.enemies.iter().map(|e| Quad {
        center: e.pos,
        size: e.size,
        color: if e.angry { ENEMY_ANGRY } else { ENEMY_CALM },
    }));
    quads.extend(frame.food.iter().map(|f| Quad {
        center: f.pos,
        size: f.size,
        color: FOOD,
    }));
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, Food};
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_quads_layout() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(50.0, 50.0), &tuning);
        player.speed = 3.0;
        let mut angry = Enemy::new(Vec2::new(10.0, 10.0), &tuning);
        angry.angry = true;
        let calm = Enemy::new(Vec2::new(20.0, 20.0), &tuning);
        let food = [Food::new(Vec2::new(5.0, 5.0), 4.0)];
        let enemies = [angry, calm];

        let quads = frame_quads(&Frame {
            player: &player,
            enemies: &enemies,
            food: &food,
        });

        assert_eq!(quads.len(), 5);
        assert_eq!(quads[0].color, PLAYER_BODY);
        assert_eq!(quads[1].size, 10.0);
        assert!((quads[1].color.a - 0.5).abs() < 1e-6);
        assert_eq!(quads[2].color, ENEMY_ANGRY);
        assert_eq!(quads[3].color, ENEMY_CALM);
        assert_eq!(quads[4].color, FOOD);
        assert_eq!(quads[4].top_left(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_css_color() {
        assert_eq!(PLAYER_BODY.to_css(), "rgba(41,152,59,1)");
        assert_eq!(PLAYER_CORE.with_alpha(0.25).to_css(), "rgba(0,255,255,0.25)");
    }
}
