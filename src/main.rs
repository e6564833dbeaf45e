//! termgrid — a raw-mode cursor playground over a blank grid.
//!
//! Puts the terminal into raw mode, tracks a cursor you steer with the
//! arrow and navigation keys, and repaints the grid as one batched write
//! per frame. Ctrl-Q quits.
//!
//! Diagnostics go to `~/.termgrid/termgrid.log` — stdout belongs to the
//! renderer, so nothing is ever logged onto the screen.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use termgrid::config::Config;
use termgrid::error::Error;
use termgrid::input::KeyReader;
use termgrid::renderer::FrameRenderer;
use termgrid::screen::Screen;
use termgrid::session;
use termgrid::terminal::{self, RawMode, StdinTty, TtyInput, TtyOutput};

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "termgrid starting");

    let result = run(&config);
    if let Err(err) = &result {
        error!("fatal: {err}");
    }
    result?;
    Ok(())
}

/// Run one raw-mode session.
///
/// Raw mode is held by a guard for the whole body, so the original
/// terminal attributes come back on every path out of here — quit, error
/// or panic. The screen is cleared before the attributes are handed back.
fn run(config: &Config) -> Result<(), Error> {
    let mut raw = RawMode::enter(StdinTty::stdin(), config.escape_timeout_ds)?;
    let mut input = TtyInput::stdin();
    let mut output = TtyOutput::stdout();

    let viewport = terminal::window_size(&mut output, &mut input)?;
    info!(rows = viewport.rows, cols = viewport.cols, "viewport sized");

    let mut screen = Screen::new(viewport);
    let mut keys = KeyReader::new(input);
    let mut renderer = FrameRenderer::new(config.show_welcome);

    let result = session::event_loop(&mut renderer, &mut output, &mut screen, &mut keys);

    // Hand the shell a clean screen, then the original attributes.
    let _ = renderer.clear(&mut output);
    let restored = raw.restore();
    if restored.is_ok() {
        info!("terminal restored");
    }

    result.and(restored)
}

/// Route tracing output to the log file under `~/.termgrid`.
fn init_logging(config: &Config) {
    let log_path = Config::state_dir()
        .map(|dir| dir.join("termgrid.log"))
        .unwrap_or_else(|| PathBuf::from("termgrid.log"));

    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter =
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
