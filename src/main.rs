//! Console Tic Tac Toe - interactive session or scripted demo.

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Two-player tic-tac-toe on the console.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Play the fixed scripted demo instead of prompting for moves.
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Capability check, decided once: interactive mode needs a terminal
    // on stdin. Anything else gets the scripted demo.
    let stdin = io::stdin();
    if cli.demo || !stdin.is_terminal() {
        tictactoe_console::console::run_demo(io::stdout().lock())
    } else {
        tictactoe_console::console::run_interactive(stdin.lock(), io::stdout().lock())
    }
}
