use std::fmt::Write as _;

use log::{debug, warn};

use crate::command::{Handler, Registry, RegistryError};
use crate::port::{CharSource, TextSink};
use crate::reader::{self, MAX_LINE};

/// Most tokens dispatched per line; the remainder of the line is ignored.
pub const MAX_TOKENS: usize = 10;

/// Longest prompt kept; longer prompts are truncated on construction.
pub const MAX_PROMPT_LEN: usize = 20;

/// An interactive command console with a swappable transport.
///
/// A `Console` owns a bounded [`Registry`] of commands and drives the
/// prompt/read/dispatch loop over whatever transport is currently bound.
/// When no transport (or only half of one) has been bound, the missing half
/// falls back to process stdio and the loop says so once at startup.
///
/// [`run`](Console::run) returns when the user types `exit` or the input
/// source dries up, and can be invoked again afterwards. Rebinding the
/// transport in between is the supported way to move a live console from,
/// say, stdio onto a serial line.
///
/// Example
/// ```
/// use tinycli::Console;
/// use tinycli::io_adapters::{MemSink, MemSource};
///
/// let mut console = Console::new("demo");
/// console
///     .register("ping", "Reply with pong", |_argv: &[&str]| println!("pong"))
///     .unwrap();
///
/// let (sink, output) = MemSink::with_handle();
/// console.bind(
///     Some(Box::new(sink)),
///     Some(Box::new(MemSource::from_script("help\rexit\r"))),
/// );
/// console.run();
///
/// let transcript = String::from_utf8(output.borrow().clone()).unwrap();
/// assert!(transcript.contains("ping"));
/// ```
pub struct Console {
    registry: Registry,
    prompt: String,
    output: Option<Box<dyn TextSink>>,
    input: Option<Box<dyn CharSource>>,
}

impl Console {
    /// Create a console with the given prompt text and no transport bound.
    pub fn new(prompt: &str) -> Self {
        let stored: String = prompt.chars().take(MAX_PROMPT_LEN).collect();
        if stored.len() < prompt.len() {
            debug!("prompt {:?} truncated to {:?}", prompt, stored);
        }
        Self {
            registry: Registry::new(),
            prompt: stored,
            output: None,
            input: None,
        }
    }

    /// Register a command. See [`Registry::register`] for the bounds.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        handler: impl Handler + 'static,
    ) -> Result<(), RegistryError> {
        self.registry.register(name, description, handler)
    }

    /// The command table, for embedders doing their own lookup or listing.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Replace both transport halves at once.
    ///
    /// `None` halves fall back to process stdio. Takes effect on the next
    /// read or emit, so swapping between two [`run`](Console::run)
    /// invocations is well-defined.
    pub fn bind(
        &mut self,
        output: Option<Box<dyn TextSink>>,
        input: Option<Box<dyn CharSource>>,
    ) {
        self.output = output;
        self.input = input;
    }

    /// Bind just the output half.
    pub fn bind_output(&mut self, sink: impl TextSink + 'static) {
        self.output = Some(Box::new(sink));
    }

    /// Bind just the input half.
    pub fn bind_input(&mut self, source: impl CharSource + 'static) {
        self.input = Some(Box::new(source));
    }

    /// Run the console until `exit` is typed or the input source dries up.
    pub fn run(&mut self) {
        if self.output.is_none() || self.input.is_none() {
            warn!("console transport incomplete, falling back to process stdio");
            self.emit("Warning: Using stdio as fallback IO\r\n");
        }

        self.emit("Console started. Type 'help' for commands.\r\n");
        self.emit("Type 'exit' to quit.\r\n\r\n");

        loop {
            let prompt = format!("{}> ", self.prompt);
            self.emit(&prompt);

            let Some(line) = self.read_line() else {
                break;
            };
            if line == "exit" {
                break;
            }
            self.process_line(&line);
        }

        self.emit("Console exited.\r\n");
    }

    /// Tokenize one line and dispatch it.
    ///
    /// The line is bounded to `MAX_LINE - 1` characters (the excess is
    /// dropped), split on spaces into at most [`MAX_TOKENS`] tokens, and the
    /// first token is resolved: `help` goes to the help listing, anything
    /// else to the first registry entry with that exact name. A line with no
    /// tokens does nothing; an unresolved name gets an `Unknown command`
    /// line. `exit` is intercepted by [`run`](Console::run) before
    /// tokenization and never reaches this method.
    pub fn process_line(&mut self, line: &str) {
        let bounded: String = line.chars().take(MAX_LINE - 1).collect();
        let argv: Vec<&str> = bounded
            .split(' ')
            .filter(|t| !t.is_empty())
            .take(MAX_TOKENS)
            .collect();

        let Some(&name) = argv.first() else {
            return;
        };

        if name == "help" {
            self.show_help();
            return;
        }

        match self.registry.find_mut(name) {
            Some(cmd) => cmd.handler_mut().invoke(&argv),
            None => {
                debug!("no handler for {:?}", name);
                self.emit(&format!("Unknown command: {}\r\n", name));
            }
        }
    }

    /// Emit the help listing: every registered command in registration
    /// order, then the two built-ins.
    pub fn show_help(&mut self) {
        let mut listing = String::from("\r\nAvailable Commands:\r\n------------------\r\n");
        for cmd in self.registry.iter() {
            let _ = writeln!(listing, "{:<15} - {}\r", cmd.name(), cmd.description());
        }
        let _ = writeln!(listing, "{:<15} - Show this help message\r", "help");
        let _ = writeln!(listing, "{:<15} - Exit the console\r\n\r", "exit");
        self.emit(&listing);
    }

    fn emit(&mut self, text: &str) {
        match self.output.as_mut() {
            Some(sink) => sink.emit(text),
            None => std::io::stdout().emit(text),
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut fallback_in;
        let mut fallback_out;
        let input: &mut dyn CharSource = match self.input.as_mut() {
            Some(source) => source.as_mut(),
            None => {
                fallback_in = std::io::stdin();
                &mut fallback_in
            }
        };
        let echo: &mut dyn TextSink = match self.output.as_mut() {
            Some(sink) => sink.as_mut(),
            None => {
                fallback_out = std::io::stdout();
                &mut fallback_out
            }
        };
        reader::read_line(input, echo)
    }
}
