//! Terminal device control: raw mode, byte I/O, viewport sizing.
//!
//! Everything the rest of the crate needs from the operating system lives
//! here — attribute get/set, bounded single-byte reads, unbuffered writes
//! and the window-size query with its cursor-position fallback. The
//! decoder, screen model and renderer stay free of `libc`.

pub mod raw;
pub mod size;
pub mod tty;

pub use raw::{RawMode, StdinTty, Termios, TtyAttrs, raw_settings};
pub use size::{Viewport, parse_cursor_report, window_size};
pub use tty::{ByteSource, TtyInput, TtyOutput};
