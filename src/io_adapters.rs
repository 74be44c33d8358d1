//! Memory-backed console transports.
//!
//! These adapters stand in for a real serial line or stdio when driving a
//! [`Console`](crate::Console) from a script: [`MemSource`] replays a fixed
//! byte sequence as keystrokes, [`MemSink`] collects everything the console
//! emits so it can be inspected after the run. Both are used heavily by this
//! crate's own tests and are public so embedders can test their command sets
//! the same way.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use crate::port::{CharSource, TextSink};

/// Memory-backed input source replaying a scripted session.
pub struct MemSource {
    cursor: Cursor<Vec<u8>>,
}

impl MemSource {
    /// Create a MemSource that will feed the provided bytes, one per read.
    pub fn new(buf: Vec<u8>) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    /// Convenience: script from a string slice.
    pub fn from_script(script: &str) -> Self {
        Self::new(script.as_bytes().to_vec())
    }
}

impl CharSource for MemSource {
    fn read_char(&mut self) -> Option<char> {
        let pos = self.cursor.position() as usize;
        let byte = *self.cursor.get_ref().get(pos)?;
        self.cursor.set_position(pos as u64 + 1);
        Some(byte as char)
    }

    /// Unlike blocking sources, a script genuinely knows whether input
    /// remains.
    fn char_available(&self) -> bool {
        (self.cursor.position() as usize) < self.cursor.get_ref().len()
    }
}

/// Memory-backed sink capturing everything the console emits.
pub struct MemSink {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemSink {
    /// Public constructor.
    pub fn new() -> Self {
        Self {
            buf: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Return the inner Rc so the caller can read collected bytes after the
    /// console run has consumed the sink.
    pub fn into_inner(self) -> Rc<RefCell<Vec<u8>>> {
        self.buf
    }

    /// Convenience: create a sink and return (sink, rc_handle).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let sink = MemSink::new();
        let rc = sink.buf.clone();
        (sink, rc)
    }
}

impl Default for MemSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for MemSink {
    fn emit(&mut self, text: &str) {
        self.buf.borrow_mut().extend_from_slice(text.as_bytes());
    }
}
