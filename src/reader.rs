//! Interactive line reading over a console transport.

use crate::port::{CharSource, TextSink};

/// Size bound of one input line; at most `MAX_LINE - 1` characters are kept.
pub const MAX_LINE: usize = 100;

/// Accumulate one line of input, echoing as the user types.
///
/// Printable ASCII is appended and echoed until the line is one short of
/// [`MAX_LINE`]; backspace (BS or DEL) removes the last accepted character
/// and emits the `"\x08 \x08"` erase sequence, doing nothing at the start of
/// the line; CR or LF terminates the line, echoing `"\r\n"`. Everything else
/// is dropped without echo, as is any printable arriving once the buffer is
/// full.
///
/// Each call owns its buffer and returns a fresh `String`, so nested or
/// repeated invocations cannot trample each other. Returns `None` when the
/// source reports exhaustion before the line terminates; whatever had been
/// accumulated is discarded.
pub(crate) fn read_line(
    input: &mut dyn CharSource,
    echo: &mut dyn TextSink,
) -> Option<String> {
    let mut line = String::new();
    let mut utf8 = [0u8; 4];

    loop {
        let c = input.read_char()?;
        match c {
            '\x08' | '\x7f' => {
                if !line.is_empty() {
                    line.pop();
                    echo.emit("\x08 \x08");
                }
            }
            '\r' | '\n' => {
                echo.emit("\r\n");
                return Some(line);
            }
            c if (c.is_ascii_graphic() || c == ' ') && line.len() < MAX_LINE - 1 => {
                line.push(c);
                echo.emit(c.encode_utf8(&mut utf8));
            }
            _ => {}
        }
    }
}
