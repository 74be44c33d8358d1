use std::io::{ErrorKind, Read, Write};

/// Output half of a console transport.
///
/// The console emits prompts, echoes, and diagnostics through this trait.
/// Emission is best-effort: the signature is infallible and implementations
/// swallow transport errors, because there is nowhere useful to report a
/// broken console to except the console itself.
///
/// A blanket implementation covers every [`std::io::Write`], so process
/// stdio, files, sockets, and `Vec<u8>` buffers all work without an adapter.
pub trait TextSink {
    /// Write `text` to the transport.
    fn emit(&mut self, text: &str);
}

impl<W: Write> TextSink for W {
    fn emit(&mut self, text: &str) {
        let _ = self.write_all(text.as_bytes());
        let _ = self.flush();
    }
}

/// Input half of a console transport.
///
/// A blanket implementation covers every [`std::io::Read`], pulling one byte
/// per call, so `Stdin`, sockets, and `Cursor`-backed scripts plug in
/// directly.
pub trait CharSource {
    /// Block until the next character arrives.
    ///
    /// Returns `None` once the transport is exhausted (EOF, peer closed).
    /// This is the only blocking point in the whole crate.
    fn read_char(&mut self) -> Option<char>;

    /// Whether a character can be read without blocking.
    ///
    /// Unused by the console loop today; reserved for non-blocking
    /// extensions. The default claims readiness, which is the right answer
    /// for sources that only ever block.
    fn char_available(&self) -> bool {
        true
    }
}

impl<R: Read> CharSource for R {
    fn read_char(&mut self) -> Option<char> {
        let mut byte = [0u8; 1];
        loop {
            match self.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0] as char),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_blanket_yields_bytes_then_none() {
        let mut src = Cursor::new(b"ab".to_vec());
        assert_eq!(src.read_char(), Some('a'));
        assert_eq!(src.read_char(), Some('b'));
        assert_eq!(src.read_char(), None);
    }

    #[test]
    fn write_blanket_captures_emitted_text() {
        let mut sink: Vec<u8> = Vec::new();
        sink.emit("ok> ");
        sink.emit("done");
        assert_eq!(sink, b"ok> done");
    }

    #[test]
    fn char_available_defaults_to_ready() {
        let src = Cursor::new(Vec::<u8>::new());
        assert!(src.char_available());
    }
}
