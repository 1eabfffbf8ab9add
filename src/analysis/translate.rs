//! Codon translation with the standard genetic code
//!
//! Translation reads non-overlapping triplets from offset 0 and stops at the
//! first in-frame stop codon. A trailing partial codon is dropped. Unlike the
//! motif scanner, an undefined codon is an error: skipping it would shift the
//! reading frame of every residue after it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::error::TranslationError;

/// What a codon encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonMeaning {
    AminoAcid(char),
    Stop,
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ... , TTT (A=0, C=1, G=2, T=3)
const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Standard genetic code (NCBI Table 1), '*' marks stop codons
const STANDARD_CODE: &[u8; 64] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Codon to meaning, built once from `STANDARD_CODE`
pub static GENETIC_CODE: Lazy<HashMap<[char; 3], CodonMeaning>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(64);
    for (idx, &aa) in STANDARD_CODE.iter().enumerate() {
        let codon = [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]];
        let meaning = if aa == b'*' {
            CodonMeaning::Stop
        } else {
            CodonMeaning::AminoAcid(aa as char)
        };
        map.insert(codon, meaning);
    }
    map
});

/// Look up a single codon. Returns None for anything that is not exactly
/// three of A, C, G, T.
pub fn decode_codon(codon: &[char]) -> Option<CodonMeaning> {
    let key: [char; 3] = codon.try_into().ok()?;
    GENETIC_CODE.get(&key).copied()
}

/// Translate a nucleotide sequence in frame 0 up to the first stop codon.
///
/// Triplets and error positions count characters, not bytes.
pub fn translate(sequence: &str) -> Result<String, TranslationError> {
    let bases: Vec<char> = sequence.chars().collect();
    let mut protein = String::with_capacity(bases.len() / 3);

    for (i, codon) in bases.chunks_exact(3).enumerate() {
        match decode_codon(codon) {
            Some(CodonMeaning::AminoAcid(aa)) => protein.push(aa),
            Some(CodonMeaning::Stop) => break,
            None => {
                return Err(TranslationError::UndefinedCodon {
                    codon: codon.iter().collect(),
                    position: i * 3,
                });
            }
        }
    }

    Ok(protein)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_stops_at_stop_codon() {
        assert_eq!(translate("ATGCGTTAA").unwrap(), "MR");
        assert_eq!(translate("ATGTAGCGT").unwrap(), "M");
        assert_eq!(translate("TGAATG").unwrap(), "");
    }

    #[test]
    fn test_translate_without_stop() {
        assert_eq!(translate("ATGCGT").unwrap(), "MR");
    }

    #[test]
    fn test_translate_drops_partial_codon() {
        assert_eq!(translate("ATGCG").unwrap(), "M");
        assert_eq!(translate("AT").unwrap(), "");
        assert_eq!(translate("").unwrap(), "");
        assert_eq!(translate("TATAAAATGCGTAA").unwrap(), "YKMR");
    }

    #[test]
    fn test_translate_rejects_undefined_codon() {
        let err = translate("ATGNGTTAA").unwrap_err();
        assert_eq!(
            err,
            TranslationError::UndefinedCodon { codon: "NGT".to_string(), position: 3 }
        );
    }

    #[test]
    fn test_translate_checks_codons_before_stop_only() {
        // The N is past the stop codon, so it is never read
        assert_eq!(translate("ATGTAANNN").unwrap(), "M");
        // A partial trailing codon is discarded without validation
        assert_eq!(translate("ATGCGTN").unwrap(), "MR");
        assert!(translate("atg").is_err());
    }

    #[test]
    fn test_triplets_count_characters() {
        // Two characters, so only a partial triplet
        assert_eq!(translate("ÅT").unwrap(), "");
        let err = translate("ATGÅTGTAA").unwrap_err();
        assert_eq!(
            err,
            TranslationError::UndefinedCodon { codon: "ÅTG".to_string(), position: 3 }
        );
        assert_eq!(translate("ATGCGTµ").unwrap(), "MR");
    }

    fn codon(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_genetic_code_table() {
        assert_eq!(GENETIC_CODE.len(), 64);
        let stops: Vec<_> = GENETIC_CODE
            .iter()
            .filter(|(_, m)| **m == CodonMeaning::Stop)
            .map(|(c, _)| c)
            .collect();
        assert_eq!(stops.len(), 3);
        for stop in ["TAA", "TAG", "TGA"] {
            assert_eq!(decode_codon(&codon(stop)), Some(CodonMeaning::Stop));
        }
        assert_eq!(decode_codon(&codon("ATG")), Some(CodonMeaning::AminoAcid('M')));
        assert_eq!(decode_codon(&codon("TGG")), Some(CodonMeaning::AminoAcid('W')));
        assert_eq!(decode_codon(&codon("TTT")), Some(CodonMeaning::AminoAcid('F')));
        assert_eq!(decode_codon(&codon("GGC")), Some(CodonMeaning::AminoAcid('G')));
        assert_eq!(decode_codon(&codon("AT")), None);
        assert_eq!(decode_codon(&codon("ÅTG")), None);
    }
}
