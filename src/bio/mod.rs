pub mod classify;
pub mod fasta;
pub mod samples;
pub mod sequence;

pub use classify::{classify, classify_default, ClassifyOptions};
pub use sequence::{Sequence, SequenceType};
