use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::core::config::{default_config, save_config, Config};
use crate::SeqcheckError;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a configuration file with default values
    Init {
        /// Destination file
        #[arg(value_name = "FILE", default_value = "seqcheck.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

pub fn run(args: ConfigArgs, config: &Config) -> anyhow::Result<()> {
    use crate::cli::output::*;

    match args.command {
        ConfigCommand::Init { path, force } => {
            if path.exists() && !force {
                return Err(SeqcheckError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            save_config(&path, &default_config())?;
            success(&format!("Wrote default configuration to {}", path.display()));
        }
        ConfigCommand::Show => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| SeqcheckError::Config(format!("Failed to serialize config: {}", e)))?;
            print!("{}", rendered);
        }
    }

    Ok(())
}
