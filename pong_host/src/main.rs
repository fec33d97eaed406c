use std::error::Error;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::sync::Arc;

use game_core::Params;
use pong_host::{
    parse_args, run, spawn_control_reader, FrameSink, HostConfig, InputAdapter, LogSink,
    RunOptions, Session, SharedHumanX, StreamSink, SweepInput, USAGE,
};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

/// Speed of the synthetic demo hand, in arena pixels per tick
const DEMO_SWEEP_SPEED: f32 = 6.0;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing; stdout is reserved for frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    if args.fast_opponent {
        config.game.opponent_speed = Params::OPPONENT_SPEED_FAST;
    }
    config.validate()?;

    info!(
        "Starting Pong host: arena {}x{}, tick {}ms, opponent speed {}, first to {} by {}",
        config.game.arena_width,
        config.game.arena_height,
        config.tick_ms,
        config.game.opponent_speed,
        config.game.win_score,
        config.game.win_margin
    );

    let (tx, rx) = mpsc::channel();
    let input: Box<dyn InputAdapter>;
    let sink: Box<dyn FrameSink>;
    if args.demo {
        info!("Demo mode: synthetic hand, frames logged");
        drop(tx);
        input = Box::new(SweepInput::new(config.game.arena_width, DEMO_SWEEP_SPEED));
        sink = Box::new(LogSink::new(config.log_every));
    } else {
        let shared = Arc::new(SharedHumanX::new(config.game.arena_width / 2.0));
        // Detached: the reader blocks on stdin and ends with the process
        let _reader = spawn_control_reader(
            io::stdin(),
            Arc::clone(&shared),
            tx,
            config.game.arena_width,
            config.quit_on_eof,
        );
        input = Box::new(shared);
        sink = Box::new(StreamSink::new(io::stdout()));
    }

    let mut session = Session::new(config.game.clone(), input, sink, config.log_every);
    session.start()?;

    let stop = AtomicBool::new(false);
    let summary = run(
        &mut session,
        &rx,
        &stop,
        RunOptions {
            period: config.tick_period(),
            max_ticks: args.ticks,
            stop_on_finish: args.demo,
        },
    );

    let score = session.state().score();
    info!(
        "Final score: human {} - opponent {} ({} ticks, {:?})",
        score.human, score.opponent, summary.ticks, summary.reason
    );
    Ok(())
}
