//! Error types for terminal setup and I/O.

use std::io;
use thiserror::Error;

/// Errors raised by the terminal core.
///
/// Everything here is fatal: the caller is expected to tear down the
/// session (clear screen, restore attributes) and exit nonzero. The one
/// benign condition, no input within the driver read timeout, is not an
/// error at all; it surfaces as `Ok(None)` from
/// [`ByteSource::read_byte`](crate::terminal::ByteSource::read_byte).
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the current terminal attributes failed (not a TTY, closed
    /// descriptor, ...).
    #[error("Failed to read terminal attributes: {0}")]
    TerminalQuery(io::Error),

    /// Applying terminal attributes failed.
    #[error("Failed to apply terminal attributes: {0}")]
    TerminalConfigure(io::Error),

    /// Neither the window-size query nor the cursor-position fallback
    /// produced usable viewport dimensions.
    #[error("Cannot determine terminal size")]
    WindowSize,

    /// A read or write on the terminal device failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
