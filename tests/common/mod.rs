#![allow(dead_code)]

/// Common test utilities for seqcheck integration tests
use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const DNA_SCENARIO: &str = "ATGGCTCTCTGGATCCGG";
pub const RNA_SCENARIO: &str = "AUGGCUCUCUGGAUCCGG";
pub const PROTEIN_SCENARIO: &str = "MAENNNLKLASTMEGRVEQLAEQRQ";

/// Build a command for the seqcheck binary with a clean environment
pub fn seqcheck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seqcheck").expect("seqcheck binary should build");
    cmd.env_remove("SEQCHECK_CONFIG")
        .env_remove("SEQCHECK_URL")
        .env_remove("SEQCHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a test FASTA file with the given content
pub fn create_test_fasta(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// FASTA with `n` DNA records
pub fn create_dna_fasta(n: usize) -> String {
    let mut content = String::new();
    for i in 0..n {
        content.push_str(&format!(">seq_{} Test sequence {}\n", i, i));
        content.push_str("ATGATGATGATGATGATGATGATGATGATGATGATGATGATGATG\n");
    }
    content
}

/// FASTA mixing a DNA and a protein record
pub fn create_mixed_fasta() -> String {
    format!(">dna_record\n{}\n>protein_record\n{}\n", DNA_SCENARIO, PROTEIN_SCENARIO)
}
