//! A tiny, embeddable interactive console with swappable I/O.
//!
//! This crate provides a minimal set of building blocks for embedding an
//! interactive command console into a program whose input/output transport is
//! not known up front: a serial line in firmware, process stdio in a test
//! harness, an in-memory script in unit tests. Command logic registers once;
//! the transport can be rebound at any time, even between two runs of the
//! same console.
//!
//! The main entry point is [`Console`], which owns the command registry and
//! drives the prompt/read/dispatch loop. The public modules [`port`] and
//! [`command`] expose the traits for supplying your own transports and for
//! implementing command handlers, and [`io_adapters`] ships memory-backed
//! transports for scripted and captured sessions.

pub mod command;
mod console;
pub mod io_adapters;
pub mod port;
mod reader;

/// Just a convenient re-export of the interactive console driver.
///
/// See [`Console`] for the high-level API and examples.
pub use console::Console;
pub use console::{MAX_PROMPT_LEN, MAX_TOKENS};
pub use reader::MAX_LINE;
