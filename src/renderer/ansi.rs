//! ANSI escape sequences for terminal control.
//!
//! The sequences this core emits: cursor visibility and positioning,
//! line/screen erasure, and the probes used by the window-size fallback.
//! All VT100-family, supported by every terminal emulator in use.

use std::io::Write;

/// Escape character.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Move cursor to absolute position (input 0-indexed, wire 1-indexed).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Move cursor to the top-left origin.
#[inline]
pub fn cursor_home<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[H")
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

/// Erase from cursor to end of line.
#[inline]
pub fn erase_line<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[K")
}

/// Clear the entire screen.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J")
}

/// Push the cursor toward the bottom-right corner.
///
/// The terminal clamps the move at the screen edge, which is what makes
/// the position-report fallback measure the viewport.
#[inline]
pub fn cursor_bottom_right<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[999C\x1b[999B")
}

/// Ask the terminal to report the cursor position.
#[inline]
pub fn cursor_position_query<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[6n")
}
