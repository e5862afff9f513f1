//! Heuristic sequence type classification.
//!
//! A sequence is labelled by the fraction of its residues that fall into a
//! nucleotide or amino-acid alphabet. Ambiguity codes (`N` for nucleotides,
//! `X` for amino acids) are left out of the respective denominators so that
//! degenerate input still classifies.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bio::sequence::SequenceType;
use crate::SeqcheckError;

pub const DEFAULT_THRESHOLD: f64 = 0.9;
pub const DEFAULT_WINDOW_LENGTH: usize = 10_000;
pub const DEFAULT_START_INDEX: usize = 1;

/// The 20 standard amino acids plus the stop marker.
const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYV*";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyOptions {
    /// Minimum fraction of matching residues needed to accept a label
    pub threshold: f64,
    /// End of the analysis window, counted from the start of the sequence
    pub window_length: usize,
    /// 1-based position where the analysis window begins
    pub start_index: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            window_length: DEFAULT_WINDOW_LENGTH,
            start_index: DEFAULT_START_INDEX,
        }
    }
}

impl ClassifyOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_window_length(mut self, window_length: usize) -> Self {
        self.window_length = window_length;
        self
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Check the options are usable. `classify` itself never rejects input,
    /// so this is for configuration and command-line boundaries.
    pub fn validate(&self) -> Result<(), SeqcheckError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(SeqcheckError::Config(format!(
                "threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        if self.window_length == 0 {
            return Err(SeqcheckError::Config(
                "window length must be at least 1".to_string(),
            ));
        }
        if self.start_index == 0 {
            return Err(SeqcheckError::Config(
                "start index is 1-based and must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Slice out characters `[start_index - 1, window_length)`, clamped to
    /// the sequence. Bounds are character positions, not byte offsets.
    pub fn window<'a>(&self, sequence: &'a str) -> &'a str {
        let start = self.start_index.saturating_sub(1);
        let end = self.window_length;
        if start >= end {
            return "";
        }
        if sequence.is_ascii() {
            let len = sequence.len();
            return &sequence[start.min(len)..end.min(len)];
        }

        let byte_offset = |chars: usize| {
            sequence
                .char_indices()
                .nth(chars)
                .map_or(sequence.len(), |(i, _)| i)
        };
        &sequence[byte_offset(start)..byte_offset(end)]
    }
}

/// Residue fractions of an analysis window.
///
/// Fractions are plain `count / total` divisions. A zero total yields `NaN`,
/// which compares false against any threshold and therefore never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    pub acg: f64,
    pub t: f64,
    pub u: f64,
    pub protein: f64,
    /// Window length without `N`
    pub nucleotide_total: usize,
    /// Window length without `X`
    pub protein_total: usize,
}

impl Composition {
    pub fn of(window: &str) -> Self {
        let mut acg = 0usize;
        let mut t = 0usize;
        let mut u = 0usize;
        let mut n = 0usize;
        let mut x = 0usize;
        let mut amino = 0usize;
        let mut length = 0usize;

        for c in window.chars() {
            length += 1;
            let c = c.to_ascii_uppercase();
            match c {
                'A' | 'C' | 'G' => acg += 1,
                'T' => t += 1,
                'U' => u += 1,
                'N' => n += 1,
                'X' => x += 1,
                _ => {}
            }
            // Counted over the whole window; only the denominator drops X.
            if c.is_ascii() && AMINO_ACIDS.contains(&(c as u8)) {
                amino += 1;
            }
        }

        let nucleotide_total = length - n;
        let protein_total = length - x;

        Self {
            acg: fraction(acg, nucleotide_total),
            t: fraction(t, nucleotide_total),
            u: fraction(u, nucleotide_total),
            protein: fraction(amino, protein_total),
            nucleotide_total,
            protein_total,
        }
    }

    pub fn is_nucleotide(&self, threshold: f64) -> bool {
        self.acg + self.t >= threshold || self.acg + self.u >= threshold
    }

    pub fn is_protein(&self, threshold: f64) -> bool {
        self.protein >= threshold
    }
}

fn fraction(count: usize, total: usize) -> f64 {
    count as f64 / total as f64
}

/// Classify a sequence as DNA, RNA or protein.
///
/// Returns `None` when no alphabet reaches the threshold, including windows
/// that are empty or consist solely of ambiguity codes. Input is read as
/// UTF-8 (invalid bytes become U+FFFD) and counted in characters.
pub fn classify(sequence: impl AsRef<[u8]>, options: &ClassifyOptions) -> Option<SequenceType> {
    let text = String::from_utf8_lossy(sequence.as_ref());
    let window = options.window(&text);
    let composition = Composition::of(window);
    let threshold = options.threshold;

    trace!(
        window = window.chars().count(),
        acg = composition.acg,
        t = composition.t,
        u = composition.u,
        protein = composition.protein,
        "composition"
    );

    // Nothing but N: there is no residue left to vote on.
    if composition.nucleotide_total == 0 {
        return None;
    }

    if composition.is_nucleotide(threshold) {
        if composition.t >= composition.u {
            Some(SequenceType::Dna)
        } else {
            Some(SequenceType::Rna)
        }
    } else if composition.is_protein(threshold) {
        Some(SequenceType::Protein)
    } else {
        None
    }
}

/// Classify with the default window and the given threshold.
pub fn classify_default(sequence: impl AsRef<[u8]>, threshold: f64) -> Option<SequenceType> {
    classify(sequence, &ClassifyOptions::default().with_threshold(threshold))
}
