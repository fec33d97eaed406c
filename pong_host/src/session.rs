use std::io;

use game_core::{Config, GameState, Side, Snapshot};
use proto::{Frame, FrameState};
use tracing::{debug, info};

use crate::input::InputAdapter;
use crate::render::FrameSink;

/// What a single tick produced, for the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Side that won a point on this tick
    pub scored: Option<Side>,
    /// Set only on the tick the match is decided
    pub winner: Option<Side>,
}

/// One match wired to its collaborators: the input that drives the human
/// paddle and the sink that receives a frame after every tick.
pub struct Session {
    state: GameState,
    input: Box<dyn InputAdapter>,
    sink: Box<dyn FrameSink>,
    log_every: u32,
}

impl Session {
    pub fn new(
        config: Config,
        input: Box<dyn InputAdapter>,
        sink: Box<dyn FrameSink>,
        log_every: u32,
    ) -> Self {
        Self {
            state: GameState::new(config),
            input,
            sink,
            log_every: log_every.max(1),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Describe the arena and the opening position to the renderer
    pub fn start(&mut self) -> io::Result<()> {
        self.sink.send(&self.arena_frame())?;
        self.sink.send(&self.generate_state_frame())
    }

    /// Advance one tick and send the resulting state frame.
    ///
    /// Once the match is finished the state is frozen: the events of the
    /// deciding tick stay in place but are not reported again.
    pub fn tick(&mut self) -> io::Result<TickReport> {
        let human_x = self.input.human_x();
        let was_playing = !self.state.phase().is_finished();
        let events = *self.state.advance(human_x);
        let tick = self.state.tick();

        if !was_playing {
            self.sink.send(&self.generate_state_frame())?;
            return Ok(TickReport::default());
        }

        if tick % self.log_every == 0 && events.match_over.is_none() {
            debug!("Game running, tick={}, human_x={:.1}", tick, human_x);
        }

        if let Some(side) = events.scored {
            let score = self.state.score();
            info!(
                "{:?} scored (human {} - opponent {})",
                side, score.human, score.opponent
            );
        }

        self.sink.send(&self.generate_state_frame())?;

        let mut report = TickReport {
            scored: events.scored,
            winner: None,
        };
        let Some(winner) = events.match_over else {
            return Ok(report);
        };

        let score = self.state.score();
        info!(
            "Match over: {:?} wins {}-{} after {} ticks",
            winner,
            score.get(winner),
            score.get(winner.other()),
            tick
        );
        self.sink.send(&Frame::MatchOver { winner: winner.id() })?;
        report.winner = Some(winner);
        Ok(report)
    }

    /// Reset the match and re-announce the arena
    pub fn restart(&mut self) -> io::Result<()> {
        info!("Restarting match");
        self.state.reset();
        self.start()
    }

    pub fn arena_frame(&self) -> Frame {
        let config = self.state.config();
        Frame::Arena {
            width: config.arena_width,
            height: config.arena_height,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            ball_size: config.ball_size,
        }
    }

    pub fn generate_state_frame(&self) -> Frame {
        Frame::State(frame_state(&self.state.snapshot()))
    }
}

fn frame_state(snap: &Snapshot) -> FrameState {
    FrameState {
        tick: snap.tick,
        ball_x: snap.ball_pos.x,
        ball_y: snap.ball_pos.y,
        ball_vx: snap.ball_vel.x,
        ball_vy: snap.ball_vel.y,
        human_x: snap.human.x,
        opponent_x: snap.opponent.x,
        score_human: snap.score.human,
        score_opponent: snap.score.opponent,
    }
}
