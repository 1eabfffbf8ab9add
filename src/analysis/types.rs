//! Data types for sequence analysis

use std::fmt;

use serde::{Deserialize, Serialize};

use super::motif::MotifTable;
use super::primer::{PrimerPair, ANNEALING_LENGTH, NDEI_SITE, XHOI_SITE};

/// Sequence analyzed when the user supplies none
pub const DEFAULT_SEQUENCE: &str = "TATAAAATGCGTAA";

/// Primer design parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerParams {
    pub forward_adapter: String,
    pub reverse_adapter: String,
    pub annealing_length: usize,
}

impl Default for PrimerParams {
    fn default() -> Self {
        Self {
            forward_adapter: NDEI_SITE.to_string(),
            reverse_adapter: XHOI_SITE.to_string(),
            annealing_length: ANNEALING_LENGTH,
        }
    }
}

/// Global analysis parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    pub primers: PrimerParams,
    pub default_sequence: String,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            primers: PrimerParams::default(),
            default_sequence: DEFAULT_SEQUENCE.to_string(),
        }
    }
}

/// A named nucleotide sequence from user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

/// Complete result of analyzing one sequence.
///
/// Each step that can fail keeps either its value or the error message, so a
/// failure in one step does not hide the results of the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceReport {
    pub name: String,
    pub sequence: String,
    pub params: AnalysisParams,
    pub motifs: MotifTable,
    pub protein: Result<String, String>,
    pub molecular_weight: Result<f64, String>,
    pub primers: Result<PrimerPair, String>,
}

impl SequenceReport {
    pub fn sequence_length(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Number of steps that failed
    pub fn failure_count(&self) -> usize {
        [
            self.protein.is_err(),
            self.molecular_weight.is_err(),
            self.primers.is_err(),
        ]
        .iter()
        .filter(|&&failed| failed)
        .count()
    }
}

impl fmt::Display for SequenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Sequence Analysis Results ---")?;
        writeln!(f, "Sequence: {} ({} bp)", self.name, self.sequence_length())?;
        for hits in self.motifs.iter() {
            let positions: Vec<String> = hits.positions.iter().map(|p| p.to_string()).collect();
            writeln!(f, "{}: [{}]", hits.motif.label(), positions.join(", "))?;
        }

        writeln!(f)?;
        match &self.protein {
            Ok(protein) => writeln!(f, "Translated Protein Sequence: {}", protein)?,
            Err(e) => writeln!(f, "Translated Protein Sequence: error: {}", e)?,
        }
        match &self.molecular_weight {
            Ok(mw) => writeln!(f, "Molecular Weight of Protein: {:.4} Da", mw)?,
            Err(e) => writeln!(f, "Molecular Weight of Protein: error: {}", e)?,
        }

        writeln!(f)?;
        writeln!(f, "--- Primer Design ---")?;
        match &self.primers {
            Ok(pair) => {
                writeln!(f, "Forward Primer: {}", pair.forward)?;
                write!(f, "Reverse Primer: {}", pair.reverse)
            }
            Err(e) => write!(f, "Primer design failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = AnalysisParams::default();
        assert_eq!(params.default_sequence, "TATAAAATGCGTAA");
        assert_eq!(params.primers.forward_adapter, "CATATG");
        assert_eq!(params.primers.reverse_adapter, "CTCGAG");
        assert_eq!(params.primers.annealing_length, 20);
    }

    #[test]
    fn test_params_json_round_trip() {
        let params = AnalysisParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: AnalysisParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
