//! Viewport sizing.
//!
//! The size is queried once at startup and treated as immutable for the
//! run. The primary path is the `TIOCGWINSZ` ioctl; terminals where that is
//! unavailable (or reports zero columns) are measured by parking the cursor
//! at the bottom-right corner and asking the terminal where it ended up.

use std::io::Write;
use std::mem;

use crate::error::Error;
use crate::renderer::ansi;
use crate::terminal::ByteSource;

/// Terminal grid dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible rows.
    pub rows: u16,
    /// Visible columns.
    pub cols: u16,
}

/// Determine the viewport dimensions.
///
/// Tries the direct window-size ioctl first; falls back to the
/// cursor-position report. The fallback needs raw mode to be active so the
/// terminal's reply arrives unbuffered and unechoed.
pub fn window_size<W: Write, S: ByteSource>(
    out: &mut W,
    input: &mut S,
) -> Result<Viewport, Error> {
    if let Some(viewport) = ioctl_size() {
        return Ok(viewport);
    }
    fallback_size(out, input)
}

fn ioctl_size() -> Option<Viewport> {
    let mut ws: libc::winsize = unsafe { mem::zeroed() };
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if rc == -1 || ws.ws_col == 0 {
        return None;
    }
    Some(Viewport {
        rows: ws.ws_row,
        cols: ws.ws_col,
    })
}

/// Measure the viewport by cursor position.
///
/// Moves the cursor toward the far corner (the terminal clamps it at the
/// edge), issues a position query, then reads the `ESC [ rows ; cols R`
/// reply through the bounded byte source.
fn fallback_size<W: Write, S: ByteSource>(out: &mut W, input: &mut S) -> Result<Viewport, Error> {
    let mut query = Vec::new();
    ansi::cursor_bottom_right(&mut query)?;
    ansi::cursor_position_query(&mut query)?;
    out.write_all(&query)?;
    out.flush()?;

    let mut reply = Vec::with_capacity(16);
    loop {
        match input.read_byte()? {
            Some(byte) => {
                reply.push(byte);
                if byte == b'R' || reply.len() > 32 {
                    break;
                }
            }
            // Terminal never answered.
            None => break,
        }
    }

    parse_cursor_report(&reply).ok_or(Error::WindowSize)
}

/// Parse a cursor-position report, `ESC [ rows ; cols R`.
pub fn parse_cursor_report(reply: &[u8]) -> Option<Viewport> {
    let body = reply
        .strip_prefix(b"\x1b[".as_slice())?
        .strip_suffix(b"R".as_slice())?;
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    let viewport = Viewport {
        rows: rows.parse().ok()?,
        cols: cols.parse().ok()?,
    };
    (viewport.rows > 0 && viewport.cols > 0).then_some(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Scripted {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                pos: 0,
            }
        }
    }

    impl ByteSource for Scripted {
        fn read_byte(&mut self) -> Result<Option<u8>, Error> {
            let byte = self.bytes.get(self.pos).copied();
            self.pos += 1;
            Ok(byte)
        }
    }

    #[test]
    fn parses_standard_report() {
        let viewport = parse_cursor_report(b"\x1b[24;80R").unwrap();
        assert_eq!(viewport, Viewport { rows: 24, cols: 80 });
    }

    #[test]
    fn parses_large_report() {
        let viewport = parse_cursor_report(b"\x1b[382;1027R").unwrap();
        assert_eq!(
            viewport,
            Viewport {
                rows: 382,
                cols: 1027
            }
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_cursor_report(b"").is_none());
        assert!(parse_cursor_report(b"24;80R").is_none());
        assert!(parse_cursor_report(b"\x1b[24;80").is_none());
        assert!(parse_cursor_report(b"\x1b[24R").is_none());
        assert!(parse_cursor_report(b"\x1b[a;bR").is_none());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(parse_cursor_report(b"\x1b[0;80R").is_none());
        assert!(parse_cursor_report(b"\x1b[24;0R").is_none());
    }

    #[test]
    fn fallback_round_trip() {
        let mut out = Vec::new();
        let mut input = Scripted::new(b"\x1b[24;80R");
        let viewport = fallback_size(&mut out, &mut input).unwrap();
        assert_eq!(viewport, Viewport { rows: 24, cols: 80 });
        // Query asks for bottom-right then the position report.
        assert_eq!(out, b"\x1b[999C\x1b[999B\x1b[6n");
    }

    #[test]
    fn fallback_fails_on_silence() {
        let mut out = Vec::new();
        let mut input = Scripted::new(b"");
        assert!(matches!(
            fallback_size(&mut out, &mut input),
            Err(Error::WindowSize)
        ));
    }
}
