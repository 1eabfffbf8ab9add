//! Nucleotide alphabet and reverse complement

use bio::alphabets::dna;

use super::error::InvalidBaseError;

/// Check if a character is a standard DNA base
pub fn is_standard_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Count characters outside A, C, G, T
pub fn count_non_standard(seq: &str) -> usize {
    seq.chars().filter(|&c| !is_standard_base(c)).count()
}

/// Compute the reverse complement of a DNA sequence.
///
/// Fails on the first character (in input order) that is not A, C, G or T.
pub fn reverse_complement(seq: &str) -> Result<String, InvalidBaseError> {
    if let Some((position, base)) = seq.chars().enumerate().find(|&(_, c)| !is_standard_base(c)) {
        return Err(InvalidBaseError { base, position });
    }

    Ok(dna::revcomp(seq.as_bytes()).into_iter().map(char::from).collect())
}
