use glam::Vec2;
use serde::Deserialize;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ball_speed_increment: f32,
    pub opponent_speed: f32,
    pub win_score: u32,
    pub win_margin: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            opponent_speed: Params::OPPONENT_SPEED,
            win_score: Params::WIN_SCORE,
            win_margin: Params::WIN_MARGIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default geometry with the much faster opponent controller
    pub fn fast_opponent() -> Self {
        Self {
            opponent_speed: Params::OPPONENT_SPEED_FAST,
            ..Self::default()
        }
    }

    /// Reject geometry and tunables the engine cannot run with
    pub fn validate(&self) -> Result<(), String> {
        let dims = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be positive and finite, got {value}"));
            }
        }

        let speeds = [
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("ball_speed_increment", self.ball_speed_increment),
            ("opponent_speed", self.opponent_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        if self.opponent_speed < 0.0 || self.ball_speed_increment < 0.0 {
            return Err("opponent_speed and ball_speed_increment must not be negative".into());
        }

        if self.paddle_width > self.arena_width || self.ball_size > self.arena_width {
            return Err("paddle and ball must fit inside the arena width".into());
        }
        if self.paddle_height * 2.0 > self.arena_height {
            return Err("both paddles must fit inside the arena height".into());
        }
        if self.win_score == 0 || self.win_margin == 0 {
            return Err("win_score and win_margin must be at least 1".into());
        }
        Ok(())
    }

    /// Largest legal paddle x (left edge)
    pub fn paddle_max_x(&self) -> f32 {
        self.arena_width - self.paddle_width
    }

    /// Clamp paddle x to arena bounds
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.paddle_max_x())
    }

    /// Horizontally centered paddle x
    pub fn paddle_spawn_x(&self) -> f32 {
        self.paddle_max_x() / 2.0
    }

    /// Get Y position (top edge) for the paddle of a side
    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Opponent => 0.0,                                 // Top edge
            Side::Human => self.arena_height - self.paddle_height, // Bottom edge
        }
    }

    /// Center of the arena, where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Initial ball velocity
    pub fn ball_spawn_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}
