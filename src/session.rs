//! The interactive session loop.
//!
//! One synchronous loop owns the whole lifetime of a session: paint the
//! current screen, block (bounded) for the next key event, interpret it.
//! Movement keys go to the screen model; the quit byte ends the loop; any
//! error aborts it with the terminal still restorable by the caller's
//! raw-mode guard.

use std::io::Write;

use tracing::{debug, info};

use crate::error::Error;
use crate::input::{Key, KeyReader};
use crate::renderer::FrameRenderer;
use crate::screen::Screen;
use crate::terminal::ByteSource;

/// Ctrl-Q, the quit keystroke.
pub const QUIT_BYTE: u8 = 0x11;

/// Run the paint/read/apply loop until quit or a fatal error.
pub fn event_loop<W: Write, S: ByteSource>(
    renderer: &mut FrameRenderer,
    out: &mut W,
    screen: &mut Screen,
    keys: &mut KeyReader<S>,
) -> Result<(), Error> {
    loop {
        renderer.draw(out, screen)?;
        match keys.next_key()? {
            Key::Byte(QUIT_BYTE) => {
                info!("quit requested");
                return Ok(());
            }
            key => {
                debug!(?key, "key event");
                screen.apply_movement(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{RawMode, Termios, TtyAttrs, Viewport};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone)]
    struct MockTty {
        attrs: Rc<RefCell<Termios>>,
    }

    impl TtyAttrs for MockTty {
        fn get(&self) -> Result<Termios, Error> {
            Ok(*self.attrs.borrow())
        }

        fn set(&mut self, attrs: &Termios) -> Result<(), Error> {
            *self.attrs.borrow_mut() = *attrs;
            Ok(())
        }
    }

    struct Scripted {
        reads: Vec<Option<u8>>,
        pos: usize,
    }

    impl ByteSource for Scripted {
        fn read_byte(&mut self) -> Result<Option<u8>, Error> {
            let read = self.reads.get(self.pos).copied().flatten();
            self.pos += 1;
            Ok(read)
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn cooked() -> Termios {
        let mut attrs: libc::termios = unsafe { std::mem::zeroed() };
        attrs.c_lflag = libc::ECHO | libc::ICANON;
        Termios(attrs)
    }

    #[test]
    fn quit_byte_ends_the_loop() {
        let mut renderer = FrameRenderer::new(false);
        let mut out = Vec::new();
        let mut screen = Screen::new(Viewport { rows: 24, cols: 80 });
        let mut keys = KeyReader::new(Scripted {
            reads: vec![Some(b'\x1b'), Some(b'['), Some(b'C'), Some(QUIT_BYTE)],
            pos: 0,
        });

        event_loop(&mut renderer, &mut out, &mut screen, &mut keys).unwrap();
        // The arrow before the quit byte moved the cursor.
        assert_eq!(screen.cursor(), (1, 0));
    }

    #[test]
    fn fatal_write_error_still_restores_the_terminal() {
        let tty = MockTty {
            attrs: Rc::new(RefCell::new(cooked())),
        };
        let raw = RawMode::enter(tty.clone(), 1).unwrap();
        assert_ne!(*tty.attrs.borrow(), cooked());

        let mut renderer = FrameRenderer::new(false);
        let mut screen = Screen::new(Viewport { rows: 24, cols: 80 });
        let mut keys = KeyReader::new(Scripted {
            reads: vec![],
            pos: 0,
        });

        let result = event_loop(&mut renderer, &mut FailingSink, &mut screen, &mut keys);
        assert!(matches!(result, Err(Error::Io(_))));

        // The guard unwinds raw mode no matter how the loop ended.
        drop(raw);
        assert_eq!(*tty.attrs.borrow(), cooked());
    }
}
