use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fasim", about = "Finite automaton acceptance checker", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether an automaton accepts one input string.
    Check {
        /// Automaton description file (.txt, .csv, or .json).
        file: PathBuf,
        /// The string to check.
        input: String,
        /// Print the active state set after each consumed symbol.
        #[arg(long)]
        trace: bool,
    },
    /// Interactively check strings against automaton description files.
    Shell {
        /// Description file to start with; prompted for when omitted.
        file: Option<PathBuf>,
    },
}
