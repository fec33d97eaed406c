//! Messages exchanged between the Pong host and its external collaborators
//!
//! Uses postcard for compact binary serialization. Byte streams (pipes to a
//! hand-tracking process or a renderer) carry COBS-encoded frames, each
//! terminated by a single zero byte.

use postcard::{from_bytes, from_bytes_cobs, to_allocvec, to_allocvec_cobs};

/// Delimiter between COBS-encoded messages on a byte stream
pub const FRAME_DELIMITER: u8 = 0;

// ============================================================================
// Control Messages (Input adapter to host)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Control {
    /// Latest horizontal coordinate of the tracked hand, in arena pixels
    HumanX { x: f32 },

    /// Restart the match from the initial state
    Restart,

    /// Stop scheduling ticks and shut down
    Quit,

    /// Hand coordinate as a fraction of the camera frame width, in [0, 1].
    /// The host scales it by the arena width.
    HumanXNormalized { x: f32 },
}

// ============================================================================
// Frame Messages (Host to renderer)
// ============================================================================

/// Per-tick state needed to draw the arena
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    pub tick: u32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub human_x: f32,
    pub opponent_x: f32,
    pub score_human: u32,
    pub score_opponent: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Frame {
    /// Fixed geometry, sent at start and after every restart
    Arena {
        width: f32,
        height: f32,
        paddle_width: f32,
        paddle_height: f32,
        ball_size: f32,
    },

    /// Game state snapshot
    State(FrameState),

    /// Match finished
    MatchOver {
        winner: u8, // 0 = human, 1 = opponent
    },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Control {
    /// Serialize control message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize control message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    /// Serialize as a delimited stream frame
    pub fn to_frame_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec_cobs(self)
    }

    /// Deserialize one stream frame (delimiter optional)
    pub fn from_frame_bytes(bytes: &mut [u8]) -> Result<Self, postcard::Error> {
        from_bytes_cobs(strip_delimiter(bytes))
    }
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    /// Serialize as a delimited stream frame
    pub fn to_frame_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec_cobs(self)
    }

    /// Deserialize one stream frame (delimiter optional)
    pub fn from_frame_bytes(bytes: &mut [u8]) -> Result<Self, postcard::Error> {
        from_bytes_cobs(strip_delimiter(bytes))
    }
}

fn strip_delimiter(bytes: &mut [u8]) -> &mut [u8] {
    let end = bytes
        .iter()
        .position(|&b| b == FRAME_DELIMITER)
        .unwrap_or(bytes.len());
    &mut bytes[..end]
}
