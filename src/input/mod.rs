//! Keyboard input: raw bytes in, logical key events out.
//!
//! [`parser`] holds the pure decoding tables for the VT100-family escape
//! sequences; [`reader`] drives them with bounded reads so a lone Escape
//! keypress is told apart from the start of a sequence by timeout.

pub mod parser;
pub mod reader;

pub use parser::{Key, SeqResult, decode_sequence};
pub use reader::KeyReader;
