//! BioSeqenzer - DNA Sequence Analysis Tool
//!
//! Scans a DNA sequence for common motifs, translates it to protein,
//! computes the protein's molecular weight, and designs cloning primers.

pub mod analysis;

pub use analysis::*;
