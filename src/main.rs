use clap::Parser;
use colored::*;
use seqcheck::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // SEQCHECK_LOG wins, then RUST_LOG, then the -v count
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("SEQCHECK_LOG")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<seqcheck::SeqcheckError>() {
            Some(seqcheck::SeqcheckError::Config(_)) => 2,
            Some(seqcheck::SeqcheckError::Io(_)) => 3,
            Some(seqcheck::SeqcheckError::Parse(_)) => 4,
            Some(seqcheck::SeqcheckError::Network(_)) => 5,
            Some(seqcheck::SeqcheckError::Validation(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = seqcheck::core::config::load_or_default(cli.config.as_ref())?;

    seqcheck::utils::parallel::configure_thread_pool(cli.threads)?;
    tracing::debug!(
        "Using {} threads",
        seqcheck::utils::parallel::resolve_threads(cli.threads)
    );

    match cli.command {
        Commands::Classify(args) => seqcheck::cli::commands::classify::run(args, &config),
        Commands::Validate(args) => seqcheck::cli::commands::validate::run(args, &config),
        Commands::Example(args) => seqcheck::cli::commands::example::run(args),
        Commands::Submit(args) => seqcheck::cli::commands::submit::run(args, &config),
        Commands::Config(args) => seqcheck::cli::commands::config::run(args, &config),
    }
}
