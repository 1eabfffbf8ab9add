//! PCR primer design for directional cloning
//!
//! The forward primer anneals to the first bases of the sequence and carries
//! an NdeI site; the reverse primer anneals to the reverse complement of the
//! last bases and carries an XhoI site. No Tm, specificity or hairpin checks.

use serde::{Deserialize, Serialize};

use super::bases::reverse_complement;
use super::error::{InvalidBaseError, PrimerError};
use super::types::PrimerParams;

/// NdeI recognition site, prepended to the forward primer
pub const NDEI_SITE: &str = "CATATG";

/// XhoI recognition site, prepended to the reverse primer
pub const XHOI_SITE: &str = "CTCGAG";

/// Number of sequence-derived bases in each primer
pub const ANNEALING_LENGTH: usize = 20;

/// Forward and reverse primer, both written 5'->3'
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerPair {
    pub forward: String,
    pub reverse: String,
}

impl PrimerPair {
    /// The annealing (sequence-derived) part of the forward primer
    pub fn forward_annealing(&self, params: &PrimerParams) -> &str {
        self.forward.get(params.forward_adapter.len()..).unwrap_or("")
    }

    /// The annealing (sequence-derived) part of the reverse primer
    pub fn reverse_annealing(&self, params: &PrimerParams) -> &str {
        self.reverse.get(params.reverse_adapter.len()..).unwrap_or("")
    }
}

/// Design primers with the NdeI/XhoI adapters and 20-base annealing regions.
pub fn design_primers(sequence: &str) -> Result<PrimerPair, PrimerError> {
    design_primers_with(sequence, &PrimerParams::default())
}

/// Design primers with custom adapters and annealing length.
///
/// Error positions refer to the full input sequence.
pub fn design_primers_with(
    sequence: &str,
    params: &PrimerParams,
) -> Result<PrimerPair, PrimerError> {
    let bases: Vec<char> = sequence.chars().collect();
    let required = params.annealing_length;

    if bases.len() < required {
        return Err(PrimerError::SequenceTooShort {
            length: bases.len(),
            required,
        });
    }

    let tail_start = bases.len() - required;
    let head: String = bases[..required].iter().collect();
    let tail: String = bases[tail_start..].iter().collect();

    let tail_rc = reverse_complement(&tail).map_err(|e| InvalidBaseError {
        base: e.base,
        position: tail_start + e.position,
    })?;

    Ok(PrimerPair {
        forward: format!("{}{}", params.forward_adapter, head),
        reverse: format!("{}{}", params.reverse_adapter, tail_rc),
    })
}
