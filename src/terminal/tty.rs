//! Byte-level I/O on the terminal device.
//!
//! Reads go through [`ByteSource`], a one-byte-with-timeout interface that
//! decouples the decoder and size fallback from the real descriptor for
//! deterministic testing. Writes go through [`TtyOutput`], which bypasses
//! the standard library's line-buffered stdout so one flushed frame is one
//! `write` on the device.

use std::io;

use crate::error::Error;

/// Bounded single-byte reads from the terminal.
///
/// `Ok(None)` is the benign no-data-within-timeout condition — the only
/// condition in the system that callers silently retry.
pub trait ByteSource {
    /// Read one byte, waiting at most the driver's configured timeout.
    fn read_byte(&mut self) -> Result<Option<u8>, Error>;
}

/// Raw byte reads from stdin.
///
/// Meaningful only under raw mode, where `VMIN = 0` / `VTIME = n` makes the
/// underlying `read` return empty after the timeout instead of blocking
/// indefinitely.
pub struct TtyInput {
    fd: libc::c_int,
}

impl TtyInput {
    /// Reader over stdin.
    pub fn stdin() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

impl ByteSource for TtyInput {
    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut byte = 0u8;
        let n = unsafe { libc::read(self.fd, (&mut byte as *mut u8).cast(), 1) };
        match n {
            1 => Ok(Some(byte)),
            // Timeout expired with no data.
            0 => Ok(None),
            _ => {
                let err = io::Error::last_os_error();
                match err.raw_os_error() {
                    Some(libc::EAGAIN) | Some(libc::EINTR) => Ok(None),
                    _ => Err(Error::Io(err)),
                }
            }
        }
    }
}

/// Unbuffered writes to stdout.
///
/// `write` maps directly onto the `write(2)` syscall, so a frame flushed
/// with a single `write_all` reaches the terminal in one piece instead of
/// being split at newlines by library-side buffering.
pub struct TtyOutput {
    fd: libc::c_int,
}

impl TtyOutput {
    /// Writer over stdout.
    pub fn stdout() -> Self {
        Self {
            fd: libc::STDOUT_FILENO,
        }
    }
}

impl io::Write for TtyOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = unsafe { libc::write(self.fd, buf.as_ptr().cast(), buf.len()) };
        if n < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        // Nothing buffered at this layer.
        Ok(())
    }
}
