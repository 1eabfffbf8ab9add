//! Motif scanning over a nucleotide sequence
//!
//! Every motif is a small set of literal patterns. A scan tests each start
//! position independently, so overlapping occurrences are all reported.
//! Characters outside the alphabet never match and never cause an error.

use serde::{Deserialize, Serialize};

/// Known nucleotide motifs, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motif {
    StartCodon,
    StopCodons,
    TataBox,
    CaatBox,
    GcBox,
    SpliceDonor,
    SpliceAcceptor,
    PolyadenylationSignal,
}

impl Motif {
    /// All motifs in the order they are reported
    pub const ALL: [Motif; 8] = [
        Motif::StartCodon,
        Motif::StopCodons,
        Motif::TataBox,
        Motif::CaatBox,
        Motif::GcBox,
        Motif::SpliceDonor,
        Motif::SpliceAcceptor,
        Motif::PolyadenylationSignal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StartCodon => "Start Codon",
            Self::StopCodons => "Stop Codons",
            Self::TataBox => "TATA Box",
            Self::CaatBox => "CAAT Box",
            Self::GcBox => "GC Box",
            Self::SpliceDonor => "Splice Donor Site",
            Self::SpliceAcceptor => "Splice Acceptor Site",
            Self::PolyadenylationSignal => "Polyadenylation Signal",
        }
    }

    /// Name with the pattern or role in parentheses, for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartCodon => "Start Codon (ATG)",
            Self::StopCodons => "Stop Codons (TAA, TAG, TGA)",
            Self::TataBox => "TATA Box (Promoter)",
            Self::CaatBox => "CAAT Box (Promoter)",
            Self::GcBox => "GC Box (Promoter)",
            Self::SpliceDonor => "Splice Donor Site (GT)",
            Self::SpliceAcceptor => "Splice Acceptor Site (AG)",
            Self::PolyadenylationSignal => "Polyadenylation Signal (AATAAA)",
        }
    }

    /// Literal alternatives; a position matches if any one of them does
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Self::StartCodon => &["ATG"],
            Self::StopCodons => &["TAA", "TAG", "TGA"],
            Self::TataBox => &["TATAAA"],
            Self::CaatBox => &["CAAT"],
            Self::GcBox => &["GGGCGG"],
            Self::SpliceDonor => &["GT"],
            Self::SpliceAcceptor => &["AG"],
            Self::PolyadenylationSignal => &["AATAAA"],
        }
    }

    /// Length of a match; all alternatives of a motif have the same length
    pub fn pattern_len(&self) -> usize {
        self.patterns()[0].len()
    }

    /// Find every start offset where this motif occurs, ascending.
    ///
    /// Offsets count characters, not bytes.
    pub fn find_all(&self, sequence: &str) -> Vec<usize> {
        let chars: Vec<char> = sequence.chars().collect();
        let patterns = self.patterns();
        (0..chars.len())
            .filter(|&pos| patterns.iter().any(|pat| matches_at(&chars[pos..], pat)))
            .collect()
    }
}

fn matches_at(window: &[char], pattern: &str) -> bool {
    let mut window = window.iter();
    pattern.chars().all(|p| window.next() == Some(&p))
}

/// Hits for a single motif
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifHits {
    pub motif: Motif,
    pub positions: Vec<usize>,
}

/// Scan result for all motifs, in `Motif::ALL` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifTable {
    pub hits: Vec<MotifHits>,
}

impl MotifTable {
    pub fn get(&self, motif: Motif) -> &[usize] {
        self.hits
            .iter()
            .find(|h| h.motif == motif)
            .map(|h| h.positions.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotifHits> {
        self.hits.iter()
    }

    /// Total number of hits across all motifs
    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(|h| h.positions.len()).sum()
    }
}

/// Scan a sequence for every known motif
pub fn scan(sequence: &str) -> MotifTable {
    let hits = Motif::ALL
        .iter()
        .map(|&motif| MotifHits {
            motif,
            positions: motif.find_all(sequence),
        })
        .collect();
    MotifTable { hits }
}
