pub mod classify;
pub mod config;
pub mod example;
pub mod submit;
pub mod validate;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::SeqcheckError;

/// Path argument meaning standard input
pub const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Non-UTF-8 input is a parse failure, like a FASTA file that fails to decode.
fn input_error(e: std::io::Error, source: &str) -> SeqcheckError {
    if e.kind() == ErrorKind::InvalidData {
        SeqcheckError::Parse(format!("{} is not valid UTF-8", source))
    } else {
        SeqcheckError::from(e)
    }
}

/// Read an input file (plain or .gz) or standard input into a string.
pub fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();

    if is_stdin(path) {
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| input_error(e, "Standard input"))
            .context("Failed to read standard input")?;
    } else if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let file = File::open(path).map_err(SeqcheckError::from)?;
        GzDecoder::new(BufReader::new(file))
            .read_to_string(&mut text)
            .map_err(|e| input_error(e, &path.display().to_string()))?;
    } else {
        text = std::fs::read_to_string(path)
            .map_err(|e| input_error(e, &path.display().to_string()))?;
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.fasta");
        std::fs::write(&path, b">seq\n\xff\xfeACGT\n").unwrap();

        let err = read_input(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeqcheckError>(),
            Some(SeqcheckError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_input(&dir.path().join("absent.fasta")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeqcheckError>(),
            Some(SeqcheckError::Io(_))
        ));
    }
}
