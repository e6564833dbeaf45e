//! Terminal renderer — the output layer.
//!
//! The renderer knows only about the screen grid. It assembles each frame
//! into an in-memory buffer ([`output`]) out of escape sequences ([`ansi`])
//! and hands it to the terminal in a single write ([`frame`]), so a frame
//! can never appear half-painted.

pub mod ansi;
pub mod frame;
pub mod output;

pub use frame::FrameRenderer;
pub use output::OutputBuffer;
