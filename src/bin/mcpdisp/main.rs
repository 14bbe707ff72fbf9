//! mcpdisp - Mackie Control display emulator
//!
//! Run with: cargo run -- [--master [--time]]

mod app;
mod logging;
mod settings;
mod ui;

use std::time::Duration;

use app::App;
use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use mcpdisp::{
    io::JackSession,
    surface::MeterDecay,
    transport::{frame_queue, lock_memory},
    CaptureStats, IoError, Poller,
};
use settings::{Args, Settings};

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let settings = Settings::load(&args)?;

    let log_path = logging::init_logger(settings.log_file.clone(), &settings.log_level)?;
    log::info!("logging to {}", log_path.display());
    log::debug!("{settings:?}");

    let mode = settings.display_mode();
    let (frames_tx, frames_rx) = frame_queue(settings.queue_capacity);
    lock_memory().wrap_err("can't lock queue memory")?;
    log::info!("locked {} byte queue in memory", settings.queue_capacity);
    let stats = CaptureStats::new();

    let session = JackSession::start(settings.jack_client_name(), frames_tx, stats.clone())
        .wrap_err("can't start JACK client")?;
    log::info!(
        "running as {} (master={}, timecode={})",
        session.client_name(),
        mode.master,
        mode.timecode()
    );

    let poller = Poller::new(frames_rx, mode, MeterDecay::new(settings.decay_ticks));
    let mut app = App::new(
        poller,
        &session,
        stats,
        Duration::from_millis(settings.poll_interval_ms),
    );

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    drop(app);
    finish(result, session.stop())
}

/// Combine the run result with the session teardown. The run error wins;
/// a stop failure after it is only logged.
fn finish(result: EyreResult<()>, stopped: Result<(), IoError>) -> EyreResult<()> {
    match (stopped, &result) {
        (Err(err), Ok(())) => return Err(err).wrap_err("can't stop JACK client"),
        (Err(err), Err(_)) => log::error!("can't stop JACK client: {err}"),
        (Ok(()), _) => log::info!("shut down"),
    }
    result
}
