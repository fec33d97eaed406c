//! Native host for the Pong engine
//!
//! Owns the tick schedule and connects the engine to its external
//! collaborators: an input adapter supplying the human paddle coordinate, and
//! a frame sink receiving a snapshot after every tick.

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod runner;
pub mod session;

pub use cli::{parse_args, CliArgs, USAGE};
pub use config::HostConfig;
pub use input::{spawn_control_reader, Command, InputAdapter, SharedHumanX, SweepInput};
pub use render::{FrameSink, LogSink, StreamSink};
pub use runner::{run, RunOptions, RunSummary, StopReason};
pub use session::{Session, TickReport};
