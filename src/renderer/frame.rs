//! Frame assembly and painting.
//!
//! A frame is built into an [`OutputBuffer`] and reaches the terminal as a
//! single write: hide cursor, repaint every row, position the cursor,
//! show it again. Hiding during the repaint keeps the cursor from being
//! seen mid-flight; erasing each line to its end replaces whatever the
//! previous frame left there without a full-screen clear.

use std::io::Write;

use crate::error::Error;
use crate::renderer::ansi;
use crate::renderer::output::OutputBuffer;
use crate::screen::Screen;

/// Marker drawn on every grid row, kept clear of real content.
const ROW_MARKER: &str = "~";

/// Paints [`Screen`] states to a terminal sink.
pub struct FrameRenderer {
    buf: OutputBuffer,
    banner: Option<String>,
}

impl FrameRenderer {
    /// A renderer, with the welcome banner enabled or not.
    pub fn new(show_welcome: bool) -> Self {
        Self {
            buf: OutputBuffer::new(),
            banner: show_welcome
                .then(|| format!("termgrid -- version {}", env!("CARGO_PKG_VERSION"))),
        }
    }

    /// Paint one frame.
    ///
    /// Exactly one write on `out` per call; the frame buffer is discarded
    /// after the flush. A write failure is fatal and propagated untouched —
    /// there is no retry.
    pub fn draw<W: Write>(&mut self, out: &mut W, screen: &Screen) -> Result<(), Error> {
        self.buf.clear();
        let viewport = screen.viewport();

        ansi::cursor_hide(&mut self.buf)?;
        ansi::cursor_home(&mut self.buf)?;

        for y in 0..viewport.rows {
            self.draw_row(y, viewport.rows, viewport.cols);
            ansi::erase_line(&mut self.buf)?;
            if y + 1 < viewport.rows {
                self.buf.write_str("\r\n");
            }
        }

        let (x, y) = screen.cursor();
        ansi::cursor_to(&mut self.buf, x, y)?;
        ansi::cursor_show(&mut self.buf)?;

        self.buf.flush_to(out)?;
        Ok(())
    }

    /// Clear the screen and park the cursor at the origin.
    ///
    /// Used on every exit path, before the terminal attributes are handed
    /// back, so the shell resumes on a clean screen.
    pub fn clear<W: Write>(&mut self, out: &mut W) -> Result<(), Error> {
        self.buf.clear();
        ansi::clear_screen(&mut self.buf)?;
        ansi::cursor_home(&mut self.buf)?;
        self.buf.flush_to(out)?;
        Ok(())
    }

    fn draw_row(&mut self, y: u16, rows: u16, cols: u16) {
        if let Some(banner) = &self.banner {
            if y == rows / 3 {
                let text = &banner[..banner.len().min(cols as usize)];
                let mut padding = (cols as usize - text.len()) / 2;
                if padding > 0 {
                    self.buf.write_str(ROW_MARKER);
                    padding -= 1;
                }
                for _ in 0..padding {
                    self.buf.write_str(" ");
                }
                self.buf.write_str(text);
                return;
            }
        }
        self.buf.write_str(ROW_MARKER);
    }
}
