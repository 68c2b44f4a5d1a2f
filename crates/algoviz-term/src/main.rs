//! algoviz - step-animated pathfinding and sorting in the terminal.

mod canvas;
mod commands;
mod input;
mod terminal;
mod view;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "algoviz")]
#[command(author, version, about = "Step-animated pathfinding and sorting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a grid with A*, Dijkstra or BFS
    Path(commands::path::PathArgs),

    /// Sort an array with one of six comparison sorts
    Sort(commands::sort::SortArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Path(args) => commands::path::run(args),
        Commands::Sort(args) => commands::sort::run(args),
    }
}
