use std::io::{self, Write};

use proto::Frame;
use tracing::{debug, info};

/// Destination for rendered frames (a renderer pipe, a log, a test buffer)
pub trait FrameSink {
    fn send(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Writes zero-delimited postcard frames to any byte stream
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for StreamSink<W> {
    fn send(&mut self, frame: &Frame) -> io::Result<()> {
        let bytes = frame
            .to_frame_bytes()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()
    }
}

/// Text "renderer" for headless runs: logs a line every `every` frames
pub struct LogSink {
    every: u32,
}

impl LogSink {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl FrameSink for LogSink {
    fn send(&mut self, frame: &Frame) -> io::Result<()> {
        match frame {
            Frame::Arena { width, height, .. } => {
                debug!("Arena {}x{}", width, height);
            }
            Frame::State(state) => {
                if state.tick % self.every == 0 {
                    debug!(
                        "tick={} ball=({:.1}, {:.1}) human_x={:.1} opponent_x={:.1} score={}-{}",
                        state.tick,
                        state.ball_x,
                        state.ball_y,
                        state.human_x,
                        state.opponent_x,
                        state.score_human,
                        state.score_opponent
                    );
                }
            }
            Frame::MatchOver { winner } => {
                let name = if *winner == 0 { "Human" } else { "Opponent" };
                info!("{} wins!", name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::FrameState;

    #[test]
    fn test_stream_sink_writes_delimited_frames() {
        let mut sink = StreamSink::new(Vec::new());
        sink.send(&Frame::MatchOver { winner: 1 }).expect("write");
        sink.send(&Frame::State(FrameState {
            tick: 7,
            ball_x: 370.0,
            ball_y: 270.0,
            ball_vx: 10.0,
            ball_vy: 10.0,
            human_x: 250.0,
            opponent_x: 313.0,
            score_human: 0,
            score_opponent: 0,
        }))
        .expect("write");

        let mut bytes = sink.into_inner();
        let frames: Vec<Frame> = bytes
            .split_mut(|&b| b == proto::FRAME_DELIMITER)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| Frame::from_frame_bytes(chunk).expect("decode"))
            .collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], Frame::MatchOver { winner: 1 });
        assert!(matches!(frames[1], Frame::State(s) if s.tick == 7));
    }

    #[test]
    fn test_log_sink_never_fails() {
        let mut sink = LogSink::new(0);
        assert!(sink.send(&Frame::MatchOver { winner: 0 }).is_ok());
    }
}
