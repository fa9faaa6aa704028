//! Console front-end for tarot readings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tarot_core::Spread;

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Tarot card readings in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform a single reading and print it
    Read {
        /// Spread to lay out: single, three, celtic-cross
        spread: Spread,

        /// RNG seed for a reproducible shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// Save the reading to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Display a previously saved reading
    Show {
        /// Path to a saved reading (.rdg or .json)
        file: PathBuf,
    },

    /// List the available reading types
    Spreads,

    /// Start the interactive reading menu
    Console {
        /// RNG seed for reproducible shuffles
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Read { spread, seed, save } => {
            commands::read::run(spread, seed, save.as_deref())
        }
        Commands::Show { file } => commands::show::run(&file),
        Commands::Spreads => commands::spreads::run(),
        Commands::Console { seed } => commands::console::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), String> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TAROT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}
