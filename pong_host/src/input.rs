//! Human paddle input
//!
//! The engine only consumes a scalar: the latest horizontal coordinate of the
//! tracked hand in arena pixels. Trackers that report a fraction of the
//! camera frame are scaled by the arena width on arrival. Producers (a hand-tracking process piping
//! `Control` frames into stdin, or a synthetic sweep) write it at their own
//! cadence; the tick loop reads whatever is newest.

use std::cell::Cell;
use std::io::{BufRead, BufReader, Read};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use proto::{Control, FRAME_DELIMITER};
use tracing::{debug, info, warn};

/// Source of the human paddle's target coordinate
pub trait InputAdapter {
    /// Latest valid reading; may be stale
    fn human_x(&self) -> f32;
}

impl<T: InputAdapter + ?Sized> InputAdapter for Arc<T> {
    fn human_x(&self) -> f32 {
        (**self).human_x()
    }
}

/// Last-writer-wins coordinate shared between a producer thread and the tick
/// loop. Stores the `f32` bit pattern in an atomic.
#[derive(Debug)]
pub struct SharedHumanX {
    bits: AtomicU32,
}

impl SharedHumanX {
    pub fn new(initial: f32) -> Self {
        Self {
            bits: AtomicU32::new(initial.to_bits()),
        }
    }

    /// Store a new reading. Non-finite readings are dropped and the previous
    /// value is kept; returns whether the reading was accepted.
    pub fn publish(&self, x: f32) -> bool {
        if !x.is_finite() {
            return false;
        }
        self.bits.store(x.to_bits(), Ordering::Relaxed);
        true
    }
}

impl InputAdapter for SharedHumanX {
    fn human_x(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Synthetic hand that sweeps back and forth across the arena, for headless
/// demo runs.
#[derive(Debug)]
pub struct SweepInput {
    width: f32,
    speed: f32,
    pos: Cell<f32>,
    dir: Cell<f32>,
}

impl SweepInput {
    pub fn new(width: f32, speed: f32) -> Self {
        Self {
            width,
            speed: speed.abs(),
            pos: Cell::new(width / 2.0),
            dir: Cell::new(1.0),
        }
    }
}

impl InputAdapter for SweepInput {
    fn human_x(&self) -> f32 {
        let current = self.pos.get();
        let mut next = current + self.dir.get() * self.speed;
        if next >= self.width {
            next = self.width;
            self.dir.set(-1.0);
        } else if next <= 0.0 {
            next = 0.0;
            self.dir.set(1.0);
        }
        self.pos.set(next);
        current
    }
}

/// Commands that must be applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    Quit,
}

/// Read zero-delimited `Control` frames on a background thread.
///
/// Coordinates go straight into `shared`, normalized ones scaled by
/// `arena_width` first; restart and quit are forwarded to the tick loop over
/// `commands`. Undecodable frames are logged and skipped.
pub fn spawn_control_reader<R>(
    reader: R,
    shared: Arc<SharedHumanX>,
    commands: Sender<Command>,
    arena_width: f32,
    quit_on_eof: bool,
) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(FRAME_DELIMITER, &mut buf) {
                Ok(0) => {
                    info!("Control stream closed");
                    if quit_on_eof {
                        let _ = commands.send(Command::Quit);
                    }
                    return;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Control stream read failed: {}", e);
                    if quit_on_eof {
                        let _ = commands.send(Command::Quit);
                    }
                    return;
                }
            }

            if buf.first() == Some(&FRAME_DELIMITER) {
                continue; // Empty frame
            }

            let command = match Control::from_frame_bytes(&mut buf) {
                Ok(Control::HumanX { x }) => {
                    if !shared.publish(x) {
                        debug!("Ignoring non-finite coordinate {}", x);
                    }
                    continue;
                }
                Ok(Control::HumanXNormalized { x }) => {
                    if !shared.publish(x * arena_width) {
                        debug!("Ignoring non-finite coordinate {}", x);
                    }
                    continue;
                }
                Ok(Control::Restart) => Command::Restart,
                Ok(Control::Quit) => Command::Quit,
                Err(e) => {
                    warn!("Dropping undecodable control frame ({} bytes): {}", buf.len(), e);
                    continue;
                }
            };

            if commands.send(command).is_err() || command == Command::Quit {
                return;
            }
        }
    })
}
