use clap::Args;
use std::path::PathBuf;

use crate::bio::sequence::SequenceType;
use crate::core::config::Config;
use crate::core::validator::{InputReport, InputValidator};
use crate::report::{Format, ReportGenerator, ReportOptions};
use crate::SeqcheckError;

#[derive(Args)]
pub struct ValidateArgs {
    /// Input FASTA file or bare sequence ("-" for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Validation method that would be requested (repeatable)
    #[arg(short = 'V', long = "validation", value_name = "NAME")]
    pub validations: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

pub fn run(args: ValidateArgs, config: &Config) -> anyhow::Result<()> {
    let text = super::read_input(&args.input)?;
    let validator = InputValidator::from_config(config);
    let report = validator.validate(&text, &args.validations);

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

    if report.is_valid() {
        Ok(())
    } else {
        Err(SeqcheckError::Validation(format!(
            "{} issue(s) found in {}",
            report.issues.len(),
            args.input.display()
        ))
        .into())
    }
}

fn print_text_report(report: &InputReport) {
    use crate::cli::output::*;

    section_header("Input Validation");

    if !report.records.is_empty() {
        println!("{}", records_table(&report.records));
    }
    println!(
        "Sequence type: {}",
        SequenceType::label(report.sequence_type)
    );

    if report.is_valid() {
        success("Input accepted");
    } else {
        for issue in &report.issues {
            error(&format!("[{}] {}", issue.field(), issue));
        }
    }
}
