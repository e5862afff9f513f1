use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::bio::classify::ClassifyOptions;
use crate::core::config::Config;
use crate::core::validator::{InputReport, InputValidator};
use crate::report::{Format, ReportGenerator, ReportOptions};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Input FASTA file or bare sequence ("-" for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Minimum fraction of matching residues (0-1]
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// End of the analysis window within each sequence
    #[arg(short, long)]
    pub window: Option<usize>,

    /// 1-based position where the analysis window starts
    #[arg(short, long)]
    pub start: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

impl ClassifyArgs {
    /// Configured classifier options with command-line overrides applied
    pub fn options(&self, config: &Config) -> ClassifyOptions {
        let mut options = config.classifier;
        if let Some(threshold) = self.threshold {
            options.threshold = threshold;
        }
        if let Some(window) = self.window {
            options.window_length = window;
        }
        if let Some(start) = self.start {
            options.start_index = start;
        }
        options
    }
}

pub fn run(args: ClassifyArgs, config: &Config) -> anyhow::Result<()> {
    let options = args.options(config);
    options.validate()?;
    debug!(?options, "Classifying {}", args.input.display());

    let records = if super::is_stdin(&args.input) {
        crate::bio::fasta::split_records(&super::read_input(&args.input)?)
    } else {
        crate::bio::fasta::parse_fasta(&args.input)?
    };

    let validator = InputValidator::new(config.validation.clone(), options);
    let report = validator.classify_sequences(records);

    match args.format {
        Format::Text => print_text_report(&report),
        format => {
            let generator = ReportGenerator::new(ReportOptions {
                format,
                include_records: true,
            });
            print!("{}", generator.generate(&report)?);
        }
    }

    Ok(())
}

fn print_text_report(report: &InputReport) {
    use crate::cli::output::*;

    section_header("Sequence Classification");

    let table = records_table(&report.records);
    println!("{table}");

    match report.sequence_type {
        Some(kind) => success(&format!(
            "{} record(s), all {}",
            format_number(report.records.len()),
            kind
        )),
        None => {
            for issue in &report.issues {
                warning(&issue.to_string());
            }
        }
    }
}
