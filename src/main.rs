//! Demonstration console: two example commands over two transports.
//!
//! Runs the console once over plain process stdio, then rebinds it to a
//! tagged transport standing in for a UART and runs it again, showing that
//! command logic survives a transport swap untouched.

use std::io::{Stdout, stdout};

use anyhow::Result;
use argh::FromArgs;
use chrono::Local;
use tinycli::Console;
use tinycli::port::TextSink;

#[derive(FromArgs)]
/// Interactive demo console with swappable I/O.
struct Options {
    /// prompt shown before each command line
    #[argh(option, default = "String::from(\"myapp\")")]
    prompt: String,

    /// skip the second pass over the tagged demo transport
    #[argh(switch)]
    skip_swap: bool,
}

/// Sink standing in for a UART: tags every emission so the transport swap is
/// visible in the output.
struct UartSink(Stdout);

impl TextSink for UartSink {
    fn emit(&mut self, text: &str) {
        self.0.emit("[UART] ");
        self.0.emit(text);
    }
}

fn cmd_time(_argv: &[&str]) {
    println!("Current time: {}", Local::now().format("%a %b %e %T %Y"));
}

fn cmd_echo(argv: &[&str]) {
    if argv.len() < 2 {
        println!("Usage: echo <message>\r");
        return;
    }
    let mut line = String::new();
    for arg in &argv[1..] {
        line.push_str(arg);
        line.push(' ');
    }
    println!("{line}\r");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let options: Options = argh::from_env();

    let mut console = Console::new(&options.prompt);
    console.register("time", "Get current time", cmd_time)?;
    console.register("echo", "Echo arguments", cmd_echo)?;

    // First pass: explicit stdio binding, the same transport the fallback
    // would pick, bound by hand to show the API.
    console.bind(Some(Box::new(stdout())), Some(Box::new(std::io::stdin())));
    println!("Using stdio transport:");
    console.run();

    if options.skip_swap {
        return Ok(());
    }

    // Second pass: same console, same commands, different wire.
    println!("\nSwapping to the tagged UART-style transport:");
    console.bind(
        Some(Box::new(UartSink(stdout()))),
        Some(Box::new(std::io::stdin())),
    );
    console.run();

    Ok(())
}
