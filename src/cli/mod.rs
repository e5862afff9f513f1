pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqcheck",
    version,
    about = "Sequence type classification and input validation for gene validation submissions",
    long_about = "Seqcheck classifies DNA, RNA and protein sequences by residue composition, \
                  applies the input rules a validation server expects (single sequence type, \
                  length bounds, selected validations) and submits accepted input for validation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,

    /// Configuration file (TOML)
    #[arg(short, long, env = "SEQCHECK_CONFIG", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify each sequence as DNA, RNA or protein
    Classify(commands::classify::ClassifyArgs),

    /// Check input against the submission rules
    Validate(commands::validate::ValidateArgs),

    /// Print an example input
    Example(commands::example::ExampleArgs),

    /// Validate input and submit it to a validation server
    Submit(commands::submit::SubmitArgs),

    /// Manage the configuration file
    Config(commands::config::ConfigArgs),
}
