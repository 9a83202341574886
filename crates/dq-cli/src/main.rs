//! CLI frontend for Detective Quest, the mansion exploration game.

mod commands;
mod logging;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "detective-quest",
    about = "Detective Quest: explore a haunted mansion room by room",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore the mansion interactively (default)
    Explore {
        /// Skip the map overview before exploring
        #[arg(long)]
        no_map: bool,
    },

    /// Print the mansion map and exit
    Map {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = MapFormat::Tree)]
        format: MapFormat,
    },

    /// List every room with its depth and exits
    Rooms,
}

#[derive(Clone, Copy, ValueEnum)]
enum MapFormat {
    /// Indented tree
    Tree,
    /// Nested JSON objects
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let result = match cli.command.unwrap_or(Commands::Explore { no_map: false }) {
        Commands::Explore { no_map } => commands::explore::run(!no_map),
        Commands::Map { format } => match format {
            MapFormat::Tree => commands::map::run_tree(),
            MapFormat::Json => commands::map::run_json(),
        },
        Commands::Rooms => commands::rooms::run(),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("error: {e}").red());
        process::exit(1);
    }
}
