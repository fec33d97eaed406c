use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        }
    }

    /// Side ahead on points, None when level
    pub fn leader(&self) -> Option<Side> {
        if self.human > self.opponent {
            Some(Side::Human)
        } else if self.opponent > self.human {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Absolute point difference
    pub fn margin(&self) -> u32 {
        self.human.abs_diff(self.opponent)
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    Finished { winner: Side },
}

impl MatchPhase {
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchPhase::Finished { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchPhase::Playing => None,
            MatchPhase::Finished { winner } => Some(*winner),
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<Side>,
    pub match_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
