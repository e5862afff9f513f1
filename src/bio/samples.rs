//! Example inputs offered to users who want to try the tool.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const DNA_EXAMPLE: &str = include_str!("../../data/samples/dna.fasta");
const PROTEIN_EXAMPLE: &str = include_str!("../../data/samples/protein.fasta");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    /// Two insulin coding sequences, one carrying a duplication
    Dna,
    /// Two protein sequences
    Protein,
}

/// FASTA text for the requested example.
pub fn example_fasta(kind: ExampleKind) -> &'static str {
    match kind {
        ExampleKind::Dna => DNA_EXAMPLE,
        ExampleKind::Protein => PROTEIN_EXAMPLE,
    }
}
