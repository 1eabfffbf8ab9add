//! Sequence input parsing (FASTA or raw text)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bio::io::fasta;

use super::error::{Result, SeqError};
use super::types::SequenceRecord;

/// Normalize user input the way every entry point does: drop whitespace and
/// uppercase. No alphabet filtering; invalid characters are left for the
/// individual algorithms to handle.
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Parse sequence input text.
///
/// Text starting with '>' is read as (multi-)FASTA. Anything else is taken as
/// a single raw sequence spread over any number of lines.
pub fn parse_sequence_text(text: &str) -> Result<Vec<SequenceRecord>> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(SeqError::Parse("No sequence found in input".to_string()));
    }

    if !trimmed.starts_with('>') {
        return Ok(vec![SequenceRecord {
            name: "Sequence_1".to_string(),
            sequence: normalize_sequence(trimmed),
        }]);
    }

    parse_fasta_records(trimmed.as_bytes())
}

/// Read sequences from a FASTA or raw text file
pub fn read_sequence_file(path: &Path) -> Result<Vec<SequenceRecord>> {
    let mut content = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut content)?;
    parse_sequence_text(&content)
}

fn parse_fasta_records<R: Read>(input: R) -> Result<Vec<SequenceRecord>> {
    let reader = fasta::Reader::new(input);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| SeqError::Parse(e.to_string()))?;
        let name = if record.id().is_empty() {
            format!("Sequence_{}", records.len() + 1)
        } else {
            record.id().to_string()
        };
        records.push(SequenceRecord {
            name,
            sequence: normalize_sequence(&String::from_utf8_lossy(record.seq())),
        });
    }

    if records.is_empty() {
        return Err(SeqError::Parse("No valid sequence found in FASTA input".to_string()));
    }

    Ok(records)
}
