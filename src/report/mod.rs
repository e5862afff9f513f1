use crate::bio::sequence::SequenceType;
use crate::core::validator::{display_id, InputReport};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

pub mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: Format,
    /// List every record rather than just the summary
    pub include_records: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: Format::Text,
            include_records: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct IssueSummary<'a> {
    field: &'a str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    valid: bool,
    sequence_type: &'a str,
    record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<RecordSummary>>,
    issues: Vec<IssueSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct RecordSummary {
    id: String,
    length: usize,
    sequence_type: &'static str,
}

pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn generate(&self, report: &InputReport) -> Result<String> {
        match self.options.format {
            Format::Text => self.generate_text_report(report),
            Format::Json => self.generate_json_report(report),
            Format::Csv => self.generate_csv_report(report),
        }
    }

    fn record_summaries(report: &InputReport) -> Vec<RecordSummary> {
        report
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| RecordSummary {
                id: display_id(i, &r.id),
                length: r.length,
                sequence_type: SequenceType::label(r.sequence_type),
            })
            .collect()
    }

    fn generate_text_report(&self, report: &InputReport) -> Result<String> {
        use std::fmt::Write;

        let mut output = String::new();
        writeln!(&mut output, "Records: {}", report.records.len())?;
        writeln!(&mut output, "Type: {}", SequenceType::label(report.sequence_type))?;

        if self.options.include_records {
            for record in Self::record_summaries(report) {
                writeln!(
                    &mut output,
                    "  {}\t{}\t{}",
                    record.id, record.length, record.sequence_type
                )?;
            }
        }

        if report.is_valid() {
            writeln!(&mut output, "Status: valid")?;
        } else {
            writeln!(&mut output, "Status: invalid")?;
            for issue in &report.issues {
                writeln!(&mut output, "  [{}] {}", issue.field(), issue)?;
            }
        }

        Ok(output)
    }

    fn generate_json_report(&self, report: &InputReport) -> Result<String> {
        let summary = ReportSummary {
            valid: report.is_valid(),
            sequence_type: SequenceType::label(report.sequence_type),
            record_count: report.records.len(),
            records: self
                .options
                .include_records
                .then(|| Self::record_summaries(report)),
            issues: report
                .issues
                .iter()
                .map(|issue| IssueSummary {
                    field: issue.field(),
                    message: issue.to_string(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }

    fn generate_csv_report(&self, report: &InputReport) -> Result<String> {
        use std::fmt::Write;

        let mut output = String::new();
        writeln!(&mut output, "id,length,type")?;
        for record in Self::record_summaries(report) {
            writeln!(
                &mut output,
                "\"{}\",{},{}",
                record.id.replace('"', "\"\""),
                record.length,
                record.sequence_type
            )?;
        }
        Ok(output)
    }
}
