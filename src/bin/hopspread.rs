//! CLI entry point for the `hopspread` command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use hopspread::cli::commands;
use hopspread::types::{EdgeMode, GraphError};

#[derive(Parser)]
#[command(
    name = "hopspread",
    about = "Time-bounded breadth-first propagation over adjacency-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Insert edges in one direction only, overriding the input's mode
    #[arg(long)]
    directed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Input file: .json or .toml config, or the plain-text stream. Reads stdin when omitted or "-"
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list, then the propagation count from the start vertex
    Run {
        #[command(flatten)]
        input: Input,
    },
    /// Count vertices reached within the time limit
    Propagate {
        #[command(flatten)]
        input: Input,
        /// Start vertex (defaults to the input's start)
        #[arg(long)]
        start: Option<usize>,
        /// Time limit in hops (defaults to the input's limit)
        #[arg(long)]
        time: Option<u32>,
    },
    /// Find the vertex whose spread reaches the most vertices
    Source {
        #[command(flatten)]
        input: Input,
    },
    /// Print the adjacency list
    Render {
        #[command(flatten)]
        input: Input,
    },
    /// Cumulative reach at each time step
    Timeline {
        #[command(flatten)]
        input: Input,
        /// Start vertex (defaults to the input's start)
        #[arg(long)]
        start: Option<usize>,
        /// Time limit in hops (defaults to the input's limit)
        #[arg(long)]
        time: Option<u32>,
    },
    /// Summary statistics about the graph
    Stats {
        #[command(flatten)]
        input: Input,
    },
}

impl Commands {
    fn input(&self) -> Option<&Path> {
        let input = match self {
            Self::Run { input }
            | Self::Propagate { input, .. }
            | Self::Source { input }
            | Self::Render { input }
            | Self::Timeline { input, .. }
            | Self::Stats { input } => input,
        };
        input.input.as_deref()
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let mode = cli.directed.then_some(EdgeMode::Directed);

    let result = commands::load_input(cli.command.input(), mode).and_then(|config| {
        match cli.command {
            Commands::Run { .. } => commands::cmd_run(&config, json),
            Commands::Propagate { start, time, .. } => {
                commands::cmd_propagate(&config, start, time, json)
            }
            Commands::Source { .. } => commands::cmd_source(&config, json),
            Commands::Render { .. } => commands::cmd_render(&config, json),
            Commands::Timeline { start, time, .. } => {
                commands::cmd_timeline(&config, start, time, json)
            }
            Commands::Stats { .. } => commands::cmd_stats(&config, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse(_) | GraphError::Config(_) => 2,
            GraphError::InvalidVertex { .. } => 3,
            GraphError::NegativeVertexCount(_) | GraphError::NegativeTimeLimit(_) => 4,
        };
        process::exit(code);
    }
}
