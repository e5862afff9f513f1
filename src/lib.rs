pub mod bio;
pub mod cli;
pub mod core;
pub mod report;
pub mod submit;
pub mod utils;

pub use crate::bio::classify::{classify, classify_default, ClassifyOptions};
pub use crate::bio::sequence::{Sequence, SequenceType};
pub use crate::core::validator::{InputReport, InputValidator, ValidationIssue};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqcheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SeqcheckError>;
