//! Validation of a submitted sequence form.
//!
//! Mirrors the rules applied before a form is sent to the server: the
//! sequence field is required and length-bounded, at least one validation
//! method must be chosen, and every record must classify to the same
//! sequence type.

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::bio::classify::{classify, ClassifyOptions};
use crate::bio::fasta::split_records;
use crate::bio::sequence::{Sequence, SequenceType};
use crate::core::config::{Config, ValidationConfig};

pub const INPUT_TYPE_MESSAGE: &str = "The input must be either DNA or protein sequence(s). \
Please ensure that your sequences do not contain any non-letter character(s). \
If there are multiple sequences, ensure that they are all of one type.";

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("This field is required.")]
    Required,

    #[error("Please enter at least {min} characters.")]
    TooShort { min: usize, actual: usize },

    #[error("Please enter no more than {max} characters.")]
    TooLong { max: usize, actual: usize },

    /// At least one record matched no alphabet
    #[error("{}", INPUT_TYPE_MESSAGE)]
    UnknownType { records: Vec<String> },

    /// Records classified to different types
    #[error("{}", INPUT_TYPE_MESSAGE)]
    MixedTypes { found: Vec<SequenceType> },

    #[error("Please select at least one validation method.")]
    NoValidationSelected,
}

impl ValidationIssue {
    /// Form field the issue belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::NoValidationSelected => "validations[]",
            _ => "seq",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordClassification {
    pub id: String,
    pub length: usize,
    pub sequence_type: Option<SequenceType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputReport {
    pub records: Vec<RecordClassification>,
    /// Shared type of all records, when they agree
    pub sequence_type: Option<SequenceType>,
    pub issues: Vec<ValidationIssue>,
}

impl InputReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    config: ValidationConfig,
    options: ClassifyOptions,
}

impl InputValidator {
    pub fn new(config: ValidationConfig, options: ClassifyOptions) -> Self {
        Self { config, options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.validation.clone(), config.classifier)
    }

    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Split the input and classify every record, keeping input order.
    pub fn classify_records(&self, input: &str) -> Vec<RecordClassification> {
        self.classify_each(split_records(input))
    }

    fn classify_each(&self, records: Vec<Sequence>) -> Vec<RecordClassification> {
        records
            .into_par_iter()
            .map(|record| RecordClassification {
                sequence_type: classify(&record.sequence, &self.options),
                length: record.len(),
                id: record.id,
            })
            .collect()
    }

    /// Type-only report for already parsed records: no length or
    /// validation-method rules apply.
    pub fn classify_sequences(&self, records: Vec<Sequence>) -> InputReport {
        let records = self.classify_each(records);
        let (sequence_type, issues) = match agreed_type(&records) {
            Ok(kind) => (Some(kind), Vec::new()),
            Err(issue) => (None, vec![issue]),
        };
        InputReport {
            records,
            sequence_type,
            issues,
        }
    }

    /// Apply the sequence-type rule alone.
    pub fn check_input_type(&self, input: &str) -> Result<SequenceType, ValidationIssue> {
        let records = self.classify_records(input);
        agreed_type(&records)
    }

    /// Run every rule against a submission.
    pub fn validate(&self, input: &str, validations: &[String]) -> InputReport {
        let mut issues = Vec::new();
        let mut records = Vec::new();
        let mut sequence_type = None;

        if input.trim().is_empty() {
            issues.push(ValidationIssue::Required);
        } else {
            let actual = input.chars().count();
            if actual < self.config.min_length {
                issues.push(ValidationIssue::TooShort {
                    min: self.config.min_length,
                    actual,
                });
            }
            if let Some(max) = self.config.max_length {
                if actual > max {
                    issues.push(ValidationIssue::TooLong { max, actual });
                }
            }

            records = self.classify_records(input);
            match agreed_type(&records) {
                Ok(kind) => sequence_type = Some(kind),
                Err(issue) => issues.push(issue),
            }
        }

        if self.config.require_validation_method
            && validations.iter().all(|v| v.trim().is_empty())
        {
            issues.push(ValidationIssue::NoValidationSelected);
        }

        if issues.is_empty() {
            info!(
                "Input accepted: {} {} record(s)",
                records.len(),
                SequenceType::label(sequence_type)
            );
        } else {
            debug!("Input rejected with {} issue(s)", issues.len());
        }

        InputReport {
            records,
            sequence_type,
            issues,
        }
    }
}

/// The type every record agrees on, or the issue explaining why there is none.
fn agreed_type(records: &[RecordClassification]) -> Result<SequenceType, ValidationIssue> {
    let unknown: Vec<String> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.sequence_type.is_none())
        .map(|(i, r)| display_id(i, &r.id))
        .collect();

    if records.is_empty() || !unknown.is_empty() {
        return Err(ValidationIssue::UnknownType { records: unknown });
    }

    let mut found: Vec<SequenceType> = Vec::new();
    for kind in records.iter().filter_map(|r| r.sequence_type) {
        if !found.contains(&kind) {
            found.push(kind);
        }
    }

    match found.as_slice() {
        [single] => Ok(*single),
        _ => Err(ValidationIssue::MixedTypes { found }),
    }
}

/// Record id for messages, falling back to its 1-based position
pub fn display_id(index: usize, id: &str) -> String {
    if id.is_empty() {
        format!("#{}", index + 1)
    } else {
        id.to_string()
    }
}
