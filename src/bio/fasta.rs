use crate::bio::sequence::Sequence;
use crate::SeqcheckError;
use flate2::read::GzDecoder;
use memmap2::Mmap;
use nom::{
    bytes::complete::take_till,
    character::complete::{char, not_line_ending, space1},
    combinator::opt,
    multi::many0,
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Whether the text block is in FASTA form rather than a bare sequence.
pub fn is_fasta(input: &str) -> bool {
    input.trim_start().starts_with('>')
}

/// Parse a header line into its identifier and optional description
fn parse_header(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, id) = take_till(|c: char| c.is_whitespace())(input)?;
    let (input, description) = opt(preceded(space1, not_line_ending))(input)?;
    let description = description.map(str::trim).filter(|d| !d.is_empty());
    Ok((input, (id, description)))
}

/// One record: a '>' marker followed by everything up to the next '>'
fn record_chunk(input: &str) -> IResult<&str, &str> {
    preceded(char('>'), take_till(|c| c == '>'))(input)
}

/// Turn a chunk into a record. The first non-blank line is the header and
/// the remaining lines are joined into the sequence. Chunks with no
/// non-blank lines carry no record.
fn chunk_to_record(chunk: &str) -> Option<Sequence> {
    let mut lines = chunk.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines.next()?;

    let (id, description) = match parse_header(header) {
        Ok((_, parsed)) => parsed,
        Err(_) => (header, None),
    };

    let sequence: Vec<u8> = lines
        .flat_map(str::bytes)
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let mut record = Sequence::new(id.to_string(), sequence);
    if let Some(desc) = description {
        record = record.with_description(desc.to_string());
    }
    Some(record)
}

/// Split a text block into sequence records.
///
/// FASTA input yields one record per '>' marker (header-only records are
/// kept with an empty sequence). Anything else is a single unnamed record
/// with line breaks and whitespace removed.
pub fn split_records(input: &str) -> Vec<Sequence> {
    let trimmed = input.trim_start();

    if !is_fasta(trimmed) {
        let sequence: Vec<u8> = trimmed
            .bytes()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        return vec![Sequence::new(String::new(), sequence)];
    }

    // record_chunk always consumes the '>' so many0 cannot stall
    let chunks = match many0(record_chunk)(trimmed) {
        Ok((_, chunks)) => chunks,
        Err(_) => Vec::new(),
    };

    let records: Vec<Sequence> = chunks.into_iter().filter_map(chunk_to_record).collect();
    debug!("Split input into {} records", records.len());
    records
}

/// Split FASTA (or bare sequence) bytes into records
pub fn parse_fasta_from_bytes(data: &[u8]) -> Result<Vec<Sequence>, SeqcheckError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| SeqcheckError::Parse(format!("Input is not valid UTF-8: {}", e)))?;
    Ok(split_records(text))
}

/// Parse a FASTA file into sequences (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, SeqcheckError> {
    let path = path.as_ref();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut buffer = Vec::new();
        decoder.read_to_end(&mut buffer)?;
        parse_fasta_from_bytes(&buffer)
    } else {
        let file = File::open(path)?;
        // Mapping a zero-length file fails on some platforms
        if file.metadata()?.len() == 0 {
            return Ok(split_records(""));
        }
        let mmap = unsafe { Mmap::map(&file)? };
        parse_fasta_from_bytes(&mmap[..])
    }
}
