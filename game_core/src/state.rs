use glam::Vec2;
use hecs::World;

use crate::{create_ball, create_paddle, step, Ball, Config, Events, MatchPhase, Paddle, Score, Side};

/// Paddle as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Immutable per-tick view of the match, for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u32,
    pub arena: Vec2,
    pub human: PaddleView,
    pub opponent: PaddleView,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub ball_size: f32,
    pub score: Score,
    pub phase: MatchPhase,
}

/// Owns everything a match mutates: the entity world, score, phase and tick.
///
/// `reset` and `advance` both take `&mut self`, so a restart can never land in
/// the middle of a tick.
pub struct GameState {
    world: World,
    config: Config,
    score: Score,
    phase: MatchPhase,
    events: Events,
    tick: u32,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        let mut state = Self {
            world: World::new(),
            config,
            score: Score::new(),
            phase: MatchPhase::Playing,
            events: Events::new(),
            tick: 0,
        };
        state.reset();
        state
    }

    /// Serve from the center with the initial velocity, center both paddles
    /// and zero the score.
    pub fn reset(&mut self) {
        self.world.clear();

        let paddle_x = self.config.paddle_spawn_x();
        create_paddle(&mut self.world, Side::Human, paddle_x);
        create_paddle(&mut self.world, Side::Opponent, paddle_x);
        create_ball(
            &mut self.world,
            self.config.ball_spawn(),
            self.config.ball_spawn_velocity(),
        );

        self.score = Score::new();
        self.phase = MatchPhase::Playing;
        self.events = Events::new();
        self.tick = 0;
    }

    /// Advance one tick with the latest human coordinate. No-op once finished.
    pub fn advance(&mut self, human_x: f32) -> &Events {
        if !self.phase.is_finished() {
            step(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.phase,
                &mut self.events,
                human_x,
            );
            self.tick = self.tick.wrapping_add(1);
        }
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| {
                Ball::new(self.config.ball_spawn(), self.config.ball_spawn_velocity())
            });

        let mut human_x = self.config.paddle_spawn_x();
        let mut opponent_x = self.config.paddle_spawn_x();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Human => human_x = paddle.x,
                Side::Opponent => opponent_x = paddle.x,
            }
        }

        Snapshot {
            tick: self.tick,
            arena: Vec2::new(self.config.arena_width, self.config.arena_height),
            human: self.paddle_view(Side::Human, human_x),
            opponent: self.paddle_view(Side::Opponent, opponent_x),
            ball_pos: ball.pos,
            ball_vel: ball.vel,
            ball_size: self.config.ball_size,
            score: self.score,
            phase: self.phase,
        }
    }

    fn paddle_view(&self, side: Side, x: f32) -> PaddleView {
        PaddleView {
            side,
            x,
            y: self.config.paddle_y(side),
            width: self.config.paddle_width,
            height: self.config.paddle_height,
        }
    }

    /// Place the ball directly (tests and scripted scenarios)
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Overwrite the score (tests and scripted scenarios)
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
