//! Holo arena command-line front end.
//!
//! Runs battles and training sessions over the arena runtime with an
//! in-memory repository, printing the battle log or a JSON report.
//!
//! # Examples
//!
//! ```bash
//! arena-cli roster
//! arena-cli battle --left ace --right kuma --seed 7
//! arena-cli train --combatant tora --opponent wolf --difficulty hard --json
//! ```

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Battle, ContentArgs, Roster, Train};

/// Turn-based holobot battles from the terminal
#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Holobot arena battles from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    content: ContentArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a freeform battle between two archetypes
    Battle(Battle),

    /// Run a training battle that costs energy
    Train(Train),

    /// List the available archetypes
    Roster(Roster),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Battle(cmd) => cmd.execute(&cli.content),
        Command::Train(cmd) => cmd.execute(&cli.content),
        Command::Roster(cmd) => cmd.execute(&cli.content),
    }
}
