//! termgrid — the I/O core of a raw-mode terminal program.
//!
//! Four pieces, leaves first:
//!
//! - [`terminal`]: raw-mode entry with guaranteed restoration, bounded
//!   byte reads, unbuffered writes, viewport sizing (with the
//!   cursor-position fallback for terminals without a size query)
//! - [`input`]: decodes the raw keystroke byte stream — including the
//!   VT100-family escape sequences for arrows and navigation keys — into
//!   logical key events, with a timeout-based fallback for a lone Escape
//! - [`screen`]: cursor position over the virtual grid, movement under
//!   boundary clamping
//! - [`renderer`]: one batched write per frame; the terminal never sees a
//!   partial repaint
//!
//! The control flow is a single synchronous loop: paint the current
//! screen, block (bounded) for the next key, apply it, repeat. Blocking
//! happens only inside the driver's timed byte reads.
//!
//! ```rust,no_run
//! use termgrid::{FrameRenderer, KeyReader, RawMode, Screen};
//! use termgrid::terminal::{self, StdinTty, TtyInput, TtyOutput};
//!
//! # fn main() -> Result<(), termgrid::Error> {
//! let mut raw = RawMode::enter(StdinTty::stdin(), 1)?;
//! let mut output = TtyOutput::stdout();
//! let mut input = TtyInput::stdin();
//! let viewport = terminal::window_size(&mut output, &mut input)?;
//!
//! let mut screen = Screen::new(viewport);
//! let mut keys = KeyReader::new(input);
//! let mut renderer = FrameRenderer::new(true);
//!
//! renderer.draw(&mut output, &screen)?;
//! let key = keys.next_key()?;
//! screen.apply_movement(&key);
//! raw.restore()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod renderer;
pub mod screen;
pub mod session;
pub mod terminal;

// Re-exports for convenience
pub use error::Error;
pub use input::{Key, KeyReader};
pub use renderer::{FrameRenderer, OutputBuffer};
pub use screen::Screen;
pub use terminal::{RawMode, Viewport};
