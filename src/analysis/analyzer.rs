//! Runs every analysis step over one sequence and collects the report

use log::{debug, info, warn};

use super::fasta::normalize_sequence;
use super::motif::scan;
use super::primer::design_primers_with;
use super::translate::translate;
use super::types::{AnalysisParams, SequenceRecord, SequenceReport};
use super::weight::molecular_weight;

/// Normalize raw input, falling back to the configured default sequence
/// when nothing is left.
pub fn prepare_sequence(raw: &str, params: &AnalysisParams) -> String {
    let sequence = normalize_sequence(raw);
    if sequence.is_empty() {
        info!("No sequence given; using default {}", params.default_sequence);
        normalize_sequence(&params.default_sequence)
    } else {
        sequence
    }
}

/// Analyze a sequence.
///
/// Motif scanning always succeeds. Translation, weight and primer design are
/// independent of each other except that weight needs a protein; a failed
/// step is recorded in the report rather than aborting the run.
pub fn analyze_sequence(name: &str, raw: &str, params: &AnalysisParams) -> SequenceReport {
    let sequence = prepare_sequence(raw, params);

    let motifs = scan(&sequence);
    debug!("{}: {} motif hits", name, motifs.total_hits());

    let protein = translate(&sequence).map_err(|e| e.to_string());
    let weight = match &protein {
        Ok(p) => molecular_weight(p).map_err(|e| e.to_string()),
        Err(_) => Err("Skipped: translation failed".to_string()),
    };
    if let Ok(p) = &protein {
        debug!("{}: translated {} residues", name, p.len());
    }

    let primers = design_primers_with(&sequence, &params.primers).map_err(|e| e.to_string());

    for err in [protein.as_ref().err(), weight.as_ref().err(), primers.as_ref().err()]
        .into_iter()
        .flatten()
    {
        warn!("{}: {}", name, err);
    }

    info!(
        "Analyzed {} ({} bp): {} motif hits",
        name,
        sequence.chars().count(),
        motifs.total_hits()
    );

    SequenceReport {
        name: name.to_string(),
        sequence,
        params: params.clone(),
        motifs,
        protein,
        molecular_weight: weight,
        primers,
    }
}

/// Analyze a parsed input record
pub fn analyze_record(record: &SequenceRecord, params: &AnalysisParams) -> SequenceReport {
    analyze_sequence(&record.name, &record.sequence, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::motif::Motif;

    #[test]
    fn test_default_sequence_report() {
        let report = analyze_sequence("default", "", &AnalysisParams::default());
        assert_eq!(report.sequence, "TATAAAATGCGTAA");
        assert_eq!(report.motifs.get(Motif::TataBox), &[0]);
        assert_eq!(report.protein.as_deref(), Ok("YKMR"));
        assert!(report.molecular_weight.is_ok());
        let err = report.primers.as_ref().unwrap_err();
        assert!(err.contains("14 bases"));
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_input_is_normalized() {
        let report = analyze_sequence("s", "  atgcgt\ntaa ", &AnalysisParams::default());
        assert_eq!(report.sequence, "ATGCGTTAA");
        assert_eq!(report.protein.as_deref(), Ok("MR"));
    }

    #[test]
    fn test_full_report() {
        let seq = "ATGGCCAAGTATAAACAATGGGCGGTTAGAATAAATGA";
        let report = analyze_sequence("full", seq, &AnalysisParams::default());
        assert_eq!(report.failure_count(), 0);
        assert_eq!(report.protein.as_deref(), Ok("MAKYKQWAVRIN"));
        let pair = report.primers.as_ref().unwrap();
        assert!(pair.forward.starts_with("CATATG"));
        assert!(pair.reverse.starts_with("CTCGAG"));
        assert_eq!(report.motifs.get(Motif::GcBox), &[19]);
    }

    #[test]
    fn test_translation_failure_skips_weight() {
        let report = analyze_sequence("bad", "ATGNGTTAA", &AnalysisParams::default());
        assert!(report.protein.is_err());
        assert!(report.molecular_weight.unwrap_err().contains("Skipped"));
    }

    #[test]
    fn test_non_ascii_input_keeps_character_offsets() {
        let report = analyze_sequence("u", "ÅATGCGTAA", &AnalysisParams::default());
        assert_eq!(report.sequence, "ÅATGCGTAA");
        assert_eq!(report.motifs.get(Motif::StartCodon), &[1]);
        assert_eq!(report.motifs.get(Motif::SpliceDonor), &[5]);
        let err = report.protein.unwrap_err();
        assert!(err.contains("'ÅAT'"));
        assert!(err.contains("position 0"));
    }

    #[test]
    fn test_immediate_stop_gives_weight_error() {
        let report = analyze_sequence("stop", "TAAATG", &AnalysisParams::default());
        assert_eq!(report.protein.as_deref(), Ok(""));
        assert!(report.molecular_weight.is_err());
    }

    #[test]
    fn test_report_text_and_json() {
        let report = analyze_sequence("default", "", &AnalysisParams::default());
        let text = report.to_string();
        assert!(text.contains("Start Codon (ATG): [6]"));
        assert!(text.contains("Translated Protein Sequence: YKMR"));
        assert!(text.contains("Primer design failed"));

        let json = serde_json::to_string(&report).unwrap();
        let back: SequenceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.motifs, report.motifs);
        assert_eq!(back.protein, report.protein);
        assert_eq!(back.primers, report.primers);
    }

    #[test]
    fn test_analyze_record() {
        let record = SequenceRecord { name: "r1".to_string(), sequence: "ATGATG".to_string() };
        let report = analyze_record(&record, &AnalysisParams::default());
        assert_eq!(report.name, "r1");
        assert_eq!(report.motifs.get(Motif::StartCodon), &[0, 3]);
    }
}
