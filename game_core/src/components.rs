use glam::Vec2;

use crate::{Aabb, Config};

/// Which end of the arena a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Bottom paddle, driven by the tracked hand
    Human,
    /// Top paddle, driven by the opponent controller
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// Wire id: 0 = human, 1 = opponent
    pub fn id(self) -> u8 {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }
}

/// Paddle component - a horizontal bar on the top or bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, x: f32) -> Self {
        Self { side, x }
    }

    pub fn center_x(&self, config: &Config) -> f32 {
        self.x + config.paddle_width / 2.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, config.paddle_y(self.side)),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Units per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Move back to the serve point. Velocity (and any accumulated speed-up)
    /// is kept.
    pub fn reset_position(&mut self, config: &Config) {
        self.pos = config.ball_spawn();
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_corner_size(self.pos, Vec2::splat(config.ball_size))
    }
}
