//! Command handlers and the bounded command registry.

use log::{debug, warn};
use thiserror::Error;

/// Most entries a [`Registry`] will accept.
pub const MAX_COMMANDS: usize = 20;

/// Longest command name stored; longer names are truncated on registration.
pub const MAX_NAME_LEN: usize = 30;

/// Error returned by [`Registry::register`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry already holds its maximum number of commands.
    #[error("command registry full (capacity {0})")]
    Full(usize),
}

/// Object-safe trait for anything invocable as a console command.
///
/// The handler receives the full token list for the line, its own invoked
/// name included as `argv[0]`; the token count is `argv.len()`. Handlers
/// produce output by writing to the process's standard output directly, not
/// through the console's bound [`TextSink`](crate::port::TextSink). Embedders
/// redirecting console I/O must account for that asymmetry.
///
/// A blanket implementation covers every `FnMut(&[&str])` closure, so plain
/// functions and capturing closures register without ceremony.
pub trait Handler {
    /// Invoke the command with the tokenized line.
    fn invoke(&mut self, argv: &[&str]);
}

impl<F: FnMut(&[&str])> Handler for F {
    fn invoke(&mut self, argv: &[&str]) {
        self(argv)
    }
}

/// One registered console command.
pub struct Command {
    name: String,
    description: String,
    handler: Box<dyn Handler>,
}

impl Command {
    /// Name the command is dispatched under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short description shown by `help`.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn handler_mut(&mut self) -> &mut dyn Handler {
        self.handler.as_mut()
    }
}

/// Bounded, insertion-ordered command table.
///
/// Entries are append-only; there is no removal API. Lookup is exact and
/// case-sensitive, and the first matching entry wins, so a duplicate name
/// shadows every later registration under it. Descriptions and handlers are
/// owned by the registry and dropped with it.
pub struct Registry {
    commands: Vec<Command>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command.
    ///
    /// Fails only when the table is at [`MAX_COMMANDS`]; the registry is left
    /// untouched in that case. Names longer than [`MAX_NAME_LEN`] characters
    /// are silently truncated, not rejected.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        handler: impl Handler + 'static,
    ) -> Result<(), RegistryError> {
        if self.commands.len() >= MAX_COMMANDS {
            return Err(RegistryError::Full(MAX_COMMANDS));
        }

        let stored: String = name.chars().take(MAX_NAME_LEN).collect();
        if stored.len() < name.len() {
            debug!("command name {:?} truncated to {:?}", name, stored);
        }
        if self.commands.iter().any(|c| c.name == stored) {
            warn!(
                "duplicate registration of {:?}; the first entry keeps winning dispatch",
                stored
            );
        }

        self.commands.push(Command {
            name: stored,
            description: description.to_string(),
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// First entry registered under `name`, if any.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.commands.iter_mut().find(|c| c.name == name)
    }

    /// Registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn noop(_: &[&str]) {}

    #[test]
    fn register_succeeds_below_capacity_and_fails_at_it() {
        let mut reg = Registry::new();
        for i in 0..MAX_COMMANDS {
            assert_eq!(reg.register(&format!("cmd{i}"), "d", noop), Ok(()));
        }
        assert_eq!(reg.len(), MAX_COMMANDS);
        assert_eq!(
            reg.register("one-more", "d", noop),
            Err(RegistryError::Full(MAX_COMMANDS))
        );
        assert_eq!(reg.len(), MAX_COMMANDS, "failed registration must not grow the table");
    }

    #[test]
    fn long_names_are_truncated_not_rejected() {
        let mut reg = Registry::new();
        let long = "x".repeat(MAX_NAME_LEN + 5);
        reg.register(&long, "d", noop).unwrap();
        let stored = reg.iter().next().unwrap().name().to_string();
        assert_eq!(stored.len(), MAX_NAME_LEN);
        assert!(reg.find_mut(&stored).is_some());
        assert!(reg.find_mut(&long).is_none());
    }

    #[test]
    fn first_registered_duplicate_shadows_later_ones() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut reg = Registry::new();

        let h = hits.clone();
        reg.register("dup", "first", move |_: &[&str]| h.borrow_mut().push("first"))
            .unwrap();
        let h = hits.clone();
        reg.register("dup", "second", move |_: &[&str]| h.borrow_mut().push("second"))
            .unwrap();

        reg.find_mut("dup").unwrap().handler_mut().invoke(&["dup"]);
        assert_eq!(*hits.borrow(), vec!["first"]);
    }

    #[test]
    fn closures_receive_the_full_token_list() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut reg = Registry::new();

        let s = seen.clone();
        reg.register("echo", "repeat args", move |argv: &[&str]| {
            s.borrow_mut()
                .extend(argv.iter().map(|t| t.to_string()));
        })
        .unwrap();

        reg.find_mut("echo")
            .unwrap()
            .handler_mut()
            .invoke(&["echo", "a", "b"]);
        assert_eq!(*seen.borrow(), vec!["echo", "a", "b"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut reg = Registry::new();
        reg.register("status", "d", noop).unwrap();
        assert!(reg.find_mut("status").is_some());
        assert!(reg.find_mut("Status").is_none());
    }
}
