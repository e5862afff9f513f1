use serde::{Deserialize, Serialize};

use crate::bio::classify::{classify, ClassifyOptions};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

/// Label assigned by the classifier. An unclassifiable sequence has no
/// label at all (`Option<SequenceType>::None`), rendered as "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Dna,
    Rna,
    Protein,
}

impl SequenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dna => "dna",
            Self::Rna => "rna",
            Self::Protein => "protein",
        }
    }

    pub fn is_nucleotide(&self) -> bool {
        matches!(self, Self::Dna | Self::Rna)
    }

    /// Label for an optional classification, "unknown" when absent.
    pub fn label(kind: Option<SequenceType>) -> &'static str {
        kind.map(|k| k.as_str()).unwrap_or("unknown")
    }
}

impl std::fmt::Display for SequenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SequenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(Self::Dna),
            "rna" => Ok(Self::Rna),
            "protein" => Ok(Self::Protein),
            _ => Err(format!("Unknown sequence type: {}", s)),
        }
    }
}

impl Sequence {
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        Self {
            id,
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Number of residues, counted in characters rather than bytes.
    pub fn len(&self) -> usize {
        if self.sequence.is_ascii() {
            self.sequence.len()
        } else {
            String::from_utf8_lossy(&self.sequence).chars().count()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn detect_type(&self, options: &ClassifyOptions) -> Option<SequenceType> {
        classify(&self.sequence, options)
    }

    pub fn to_string(&self) -> String {
        String::from_utf8_lossy(&self.sequence).to_string()
    }

    pub fn header(&self) -> String {
        let mut header = format!(">{}", self.id);

        if let Some(desc) = &self.description {
            header.push(' ');
            header.push_str(desc);
        }

        header
    }
}
