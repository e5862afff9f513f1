use clap::Args;
use std::path::PathBuf;

use crate::core::config::Config;
use crate::submit::{SubmissionForm, SubmitClient, SubmitFailure};
use crate::SeqcheckError;

#[derive(Args)]
pub struct SubmitArgs {
    /// Input FASTA file or bare sequence ("-" for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Server form URL (overrides server.url from the config)
    #[arg(long, env = "SEQCHECK_URL")]
    pub url: Option<String>,

    /// Validation method to run (repeatable)
    #[arg(short = 'V', long = "validation", value_name = "NAME")]
    pub validations: Vec<String>,

    /// Advanced parameter passed to the server as-is (repeatable)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Write the returned HTML to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("empty parameter name in '{}'", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

pub fn run(args: SubmitArgs, config: &Config) -> anyhow::Result<()> {
    use crate::cli::output::*;
    use crate::utils::progress::create_spinner;

    let mut config = config.clone();
    if let Some(url) = args.url {
        config.server.url = Some(url);
    }
    let client = SubmitClient::from_config(&config)?;

    let text = super::read_input(&args.input)?;
    let form = SubmissionForm {
        seq: text,
        validations: args.validations,
        params: args.params,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let pb = create_spinner(&format!("Submitting to {}...", client.url()));
    let outcome = runtime.block_on(client.submit(&form));
    pb.finish_and_clear();

    match outcome {
        Ok(fragment) => {
            match args.output {
                Some(path) => {
                    std::fs::write(&path, &fragment.html).map_err(SeqcheckError::from)?;
                    success(&format!("Results written to {}", path.display()));
                }
                None => println!("{}", fragment.html),
            }
            Ok(())
        }
        Err(SubmitFailure::Invalid(report)) => {
            for issue in &report.issues {
                error(&format!("[{}] {}", issue.field(), issue));
            }
            Err(SeqcheckError::Validation("input was not submitted".to_string()).into())
        }
        Err(failure) => {
            // The server's error page is still what the user needs to read
            match args.output {
                Some(path) => {
                    std::fs::write(&path, failure.display_html()).map_err(SeqcheckError::from)?;
                    info(&format!("Error output written to {}", path.display()));
                }
                None => println!("{}", failure.display_html()),
            }
            Err(SeqcheckError::Network(failure.to_string()).into())
        }
    }
}
