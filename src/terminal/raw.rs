//! Raw mode entry and guaranteed restoration.
//!
//! The terminal attributes are captured once before any mutation, and the
//! captured snapshot is re-applied on every exit path through [`RawMode`].
//! Raw mode disables echo, canonical input, extended input processing,
//! signal characters, output post-processing and software flow control,
//! and configures reads as non-blocking-with-timeout (`VMIN = 0`,
//! `VTIME = timeout`).

use std::io;
use std::mem;

use crate::error::Error;

/// Snapshot of the terminal driver attributes.
///
/// Wraps the platform `termios` so snapshots can be held, compared and
/// re-applied. Equality covers every mode-flag word and control-character
/// slot, which is what "restored" means for a terminal.
#[derive(Clone, Copy)]
pub struct Termios(pub(crate) libc::termios);

impl PartialEq for Termios {
    fn eq(&self, other: &Self) -> bool {
        self.0.c_iflag == other.0.c_iflag
            && self.0.c_oflag == other.0.c_oflag
            && self.0.c_cflag == other.0.c_cflag
            && self.0.c_lflag == other.0.c_lflag
            && self.0.c_cc == other.0.c_cc
    }
}

impl Eq for Termios {}

impl std::fmt::Debug for Termios {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Termios")
            .field("c_iflag", &self.0.c_iflag)
            .field("c_oflag", &self.0.c_oflag)
            .field("c_cflag", &self.0.c_cflag)
            .field("c_lflag", &self.0.c_lflag)
            .finish_non_exhaustive()
    }
}

/// Attribute get/set seam over the terminal device.
///
/// The real implementation is [`StdinTty`]; tests substitute an in-memory
/// store so raw-mode entry and restoration run deterministically without a
/// TTY.
pub trait TtyAttrs {
    /// Read the current attributes.
    fn get(&self) -> Result<Termios, Error>;
    /// Apply attributes, flushing pending input first.
    fn set(&mut self, attrs: &Termios) -> Result<(), Error>;
}

/// The controlling terminal's input descriptor.
pub struct StdinTty {
    fd: libc::c_int,
}

impl StdinTty {
    /// Attribute access over stdin.
    pub fn stdin() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

impl TtyAttrs for StdinTty {
    fn get(&self) -> Result<Termios, Error> {
        let mut attrs: libc::termios = unsafe { mem::zeroed() };
        if unsafe { libc::tcgetattr(self.fd, &mut attrs) } != 0 {
            return Err(Error::TerminalQuery(io::Error::last_os_error()));
        }
        Ok(Termios(attrs))
    }

    fn set(&mut self, attrs: &Termios) -> Result<(), Error> {
        if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, &attrs.0) } != 0 {
            return Err(Error::TerminalConfigure(io::Error::last_os_error()));
        }
        Ok(())
    }
}

/// Derive raw-mode attributes from a captured snapshot.
///
/// Pure: the snapshot is not touched, so the transformation stays
/// reversible. `timeout_ds` is the driver read timeout in deciseconds.
pub fn raw_settings(original: &Termios, timeout_ds: u8) -> Termios {
    let mut raw = original.0;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = timeout_ds;
    Termios(raw)
}

/// Scoped raw-mode session.
///
/// Entering captures the original attributes and applies the raw settings.
/// [`RawMode::restore`] re-applies the snapshot exactly once; `Drop` does a
/// best-effort restore if it hasn't happened yet, so the shell is never
/// left in raw mode on panic or early return.
pub struct RawMode<T: TtyAttrs> {
    tty: T,
    original: Termios,
    active: bool,
}

impl<T: TtyAttrs> RawMode<T> {
    /// Capture the current attributes and switch the terminal to raw mode.
    pub fn enter(mut tty: T, timeout_ds: u8) -> Result<Self, Error> {
        let original = tty.get()?;
        tty.set(&raw_settings(&original, timeout_ds))?;
        Ok(Self {
            tty,
            original,
            active: true,
        })
    }

    /// The snapshot captured before raw mode was applied.
    pub fn original(&self) -> &Termios {
        &self.original
    }

    /// Re-apply the original attributes.
    ///
    /// Idempotent: after the first successful restore, further calls (and
    /// the eventual drop) do nothing.
    pub fn restore(&mut self) -> Result<(), Error> {
        if !self.active {
            return Ok(());
        }
        self.tty.set(&self.original)?;
        self.active = false;
        Ok(())
    }
}

impl<T: TtyAttrs> Drop for RawMode<T> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
