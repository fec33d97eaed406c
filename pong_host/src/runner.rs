use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::input::Command;
use crate::session::Session;

/// How far behind schedule the loop may fall before it stops catching up
const MAX_LAG_TICKS: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Fixed tick period; zero runs ticks back-to-back
    pub period: Duration,
    /// Stop after this many scheduled ticks
    pub max_ticks: Option<u64>,
    /// Stop on the tick the match is decided instead of idling for a restart
    pub stop_on_finish: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A quit command arrived
    Quit,
    /// The external stop flag was raised
    Stopped,
    /// `max_ticks` reached
    TickLimit,
    /// The match was decided and `stop_on_finish` is set
    MatchOver,
    /// The frame sink could not be written
    SinkFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub restarts: u32,
    pub reason: StopReason,
}

/// Deadline-based sleeper for a fixed tick period
struct Pacer {
    period: Duration,
    next: Instant,
}

impl Pacer {
    fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    fn wait(&mut self) {
        if self.period.is_zero() {
            return;
        }
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else if now - self.next > self.period * MAX_LAG_TICKS {
            // Too far behind; resync instead of bursting ticks
            self.next = now;
        }
        self.next += self.period;
    }
}

/// Drive `session` at a fixed period until one of the `StopReason`s occurs.
///
/// Commands are drained between ticks, so a restart is never applied in the
/// middle of an advance.
pub fn run(
    session: &mut Session,
    commands: &Receiver<Command>,
    stop: &AtomicBool,
    options: RunOptions,
) -> RunSummary {
    let mut pacer = Pacer::new(options.period);
    let mut ticks = 0u64;
    let mut restarts = 0u32;

    let reason = loop {
        if stop.load(Ordering::Relaxed) {
            break StopReason::Stopped;
        }

        match drain_commands(commands) {
            Some(Command::Quit) => break StopReason::Quit,
            Some(Command::Restart) => {
                restarts += 1;
                if let Err(e) = session.restart() {
                    warn!("Frame sink failed: {}", e);
                    break StopReason::SinkFailed;
                }
            }
            None => {}
        }

        if options.max_ticks.is_some_and(|max| ticks >= max) {
            break StopReason::TickLimit;
        }

        let report = match session.tick() {
            Ok(report) => report,
            Err(e) => {
                warn!("Frame sink failed: {}", e);
                break StopReason::SinkFailed;
            }
        };
        ticks += 1;

        if report.winner.is_some() && options.stop_on_finish {
            break StopReason::MatchOver;
        }

        pacer.wait();
    };

    info!(
        "Tick loop stopped ({:?}) after {} ticks, {} restarts",
        reason, ticks, restarts
    );
    RunSummary {
        ticks,
        restarts,
        reason,
    }
}

/// Collapse pending commands: quit wins, otherwise any number of restarts
/// become one.
fn drain_commands(commands: &Receiver<Command>) -> Option<Command> {
    let mut pending = None;
    loop {
        match commands.try_recv() {
            Ok(Command::Quit) => return Some(Command::Quit),
            Ok(Command::Restart) => pending = Some(Command::Restart),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return pending,
        }
    }
}
