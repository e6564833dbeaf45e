//! Key event assembly over bounded byte reads.
//!
//! A full escape sequence arrives as a burst within one scheduling quantum
//! on an interactive terminal, so each byte read is bounded by the driver
//! timeout: if a sequence stalls mid-way, the escape byte was a lone Escape
//! keypress, not the start of a sequence.

use crate::error::Error;
use crate::input::parser::{self, ESC, Key, SeqResult};
use crate::terminal::ByteSource;

/// Blocking-with-timeout key event reader.
pub struct KeyReader<S: ByteSource> {
    source: S,
}

impl<S: ByteSource> KeyReader<S> {
    /// Wrap a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read the next key event.
    ///
    /// Blocks at most the driver timeout per underlying byte read; the
    /// benign no-data condition is retried until a byte arrives. Once an
    /// escape byte is seen, up to three follow-up reads assemble the
    /// sequence — a timeout or an unrecognized pattern yields
    /// [`Key::Escape`] rather than an error, so unparseable input can never
    /// abort the program.
    pub fn next_key(&mut self) -> Result<Key, Error> {
        let first = loop {
            if let Some(byte) = self.source.read_byte()? {
                break byte;
            }
        };

        if first != ESC {
            return Ok(Key::Byte(first));
        }

        let mut seq = [0u8; 3];
        let mut len = 0;
        loop {
            match self.source.read_byte()? {
                // Lone Escape, or a sequence that stalled.
                None => return Ok(Key::Escape),
                Some(byte) => {
                    seq[len] = byte;
                    len += 1;
                }
            }
            match parser::decode_sequence(&seq[..len]) {
                SeqResult::Key(key) => return Ok(key),
                SeqResult::Incomplete if len < seq.len() => {}
                _ => return Ok(Key::Escape),
            }
        }
    }
}
