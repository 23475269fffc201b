//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cardfloor",
    version,
    about = "Simulate high-card tournaments among automated participants"
)]
pub struct CardfloorCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one tournament and print the standings
    Run {
        /// Number of participants on the roster
        #[arg(long)]
        participants: Option<usize>,
        /// Participants per table
        #[arg(long)]
        group_size: Option<usize>,
        /// Hands played at every table
        #[arg(long)]
        hands: Option<usize>,
        /// Seed for a reproducible tournament
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy every bot runs
        #[arg(long)]
        strategy: Option<String>,
        /// Print the full tournament record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal and score a single hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2)]
        players: usize,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
