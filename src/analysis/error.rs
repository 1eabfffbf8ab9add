//! Error types for sequence analysis

use thiserror::Error;

/// Result type alias for reading and parsing sequence input
pub type Result<T> = std::result::Result<T, SeqError>;

/// A triplet in the reading frame could not be mapped to an amino acid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Codon contains a character outside A, C, G, T
    #[error("Undefined codon '{codon}' at position {position}")]
    UndefinedCodon {
        /// The offending triplet as it appears in the input
        codon: String,
        /// 0-based offset of the triplet's first base
        position: usize,
    },
}

/// Errors from molecular weight calculation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    #[error("Cannot compute the molecular weight of an empty protein sequence")]
    EmptySequence,

    /// Residue letter is not one of the 20 standard amino acids
    #[error("Unknown residue '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },
}

/// A character with no Watson-Crick complement was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid base '{base}' at position {position}; only A, C, G, T can be complemented")]
pub struct InvalidBaseError {
    pub base: char,
    pub position: usize,
}

/// Errors from primer design
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimerError {
    #[error("Sequence too short for primer design: {length} bases, need at least {required}")]
    SequenceTooShort { length: usize, required: usize },

    #[error(transparent)]
    InvalidBase(#[from] InvalidBaseError),
}

/// Errors from reading and parsing sequence input
#[derive(Error, Debug)]
pub enum SeqError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed FASTA or report input
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_codon_message() {
        let error = TranslationError::UndefinedCodon { codon: "NGT".to_string(), position: 3 };
        let msg = format!("{error}");
        assert!(msg.contains("'NGT'"));
        assert!(msg.contains("position 3"));
    }

    #[test]
    fn test_sequence_too_short_message() {
        let error = PrimerError::SequenceTooShort { length: 4, required: 20 };
        let msg = format!("{error}");
        assert!(msg.contains("4 bases"));
        assert!(msg.contains("at least 20"));
    }

    #[test]
    fn test_invalid_base_converts_into_primer_error() {
        let error: PrimerError = InvalidBaseError { base: 'N', position: 7 }.into();
        assert!(matches!(error, PrimerError::InvalidBase(InvalidBaseError { base: 'N', position: 7 })));
        assert!(format!("{error}").contains("'N'"));
    }

    #[test]
    fn test_seq_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.fa");
        let error: SeqError = io.into();
        assert!(matches!(error, SeqError::Io(_)));
        assert!(format!("{error}").starts_with("I/O error: "));
        let error = SeqError::Parse("No sequence found in input".to_string());
        assert_eq!(format!("{error}"), "Parse error: No sequence found in input");
    }
}
