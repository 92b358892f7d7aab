//! Terminal frontend for the Kaffeepause text adventure.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::StoryOptions;

#[derive(Parser)]
#[command(
    name = "kp",
    about = "Kaffeepause, a very small text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one numbered choice at a time
    Play {
        #[command(flatten)]
        options: StoryOptions,
    },

    /// Play in a full-screen terminal UI
    Tui {
        #[command(flatten)]
        options: StoryOptions,
    },

    /// Check the story for undefined states and dead ends
    Check {
        /// State play would start in (default: kitchen)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// List the states of the story
    List {
        /// Only show states that are locations
        #[arg(short, long)]
        locations: bool,
    },

    /// Display the story as an ASCII transition graph
    Graph {
        /// Only show edges into and out of this state
        #[arg(short, long)]
        focus: Option<String>,
    },

    /// Export the story to a different format
    Export {
        /// Output format: json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { options } => commands::play::run(&options),
        Commands::Tui { options } => {
            commands::start_engine(&options, kp_core::Screen::new()).and_then(tui::run)
        }
        Commands::Check { start } => commands::check::run(start.as_deref()),
        Commands::List { locations } => commands::list::run(locations),
        Commands::Graph { focus } => commands::graph::run(focus.as_deref()),
        Commands::Export { format, output } => commands::export::run(&format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
