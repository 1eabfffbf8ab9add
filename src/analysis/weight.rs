//! Average molecular weight of a protein sequence

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::error::WeightError;

/// Average mass of water (Da), lost once per peptide bond
pub const WATER_MASS: f64 = 18.0153;

/// Average masses (Da) of the 20 standard free amino acids (IUPAC)
pub static AMINO_ACID_MASSES: Lazy<HashMap<char, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert('A', 89.0932);
    map.insert('C', 121.1582);
    map.insert('D', 133.1027);
    map.insert('E', 147.1293);
    map.insert('F', 165.1891);
    map.insert('G', 75.0666);
    map.insert('H', 155.1546);
    map.insert('I', 131.1729);
    map.insert('K', 146.1876);
    map.insert('L', 131.1729);
    map.insert('M', 149.2113);
    map.insert('N', 132.1179);
    map.insert('P', 115.1305);
    map.insert('Q', 146.1445);
    map.insert('R', 174.201);
    map.insert('S', 105.0926);
    map.insert('T', 119.1192);
    map.insert('V', 117.1463);
    map.insert('W', 204.2252);
    map.insert('Y', 181.1885);
    map
});

/// Molecular weight of a protein in Daltons.
///
/// Sum of free amino-acid masses minus one water per peptide bond, which is
/// the same as the sum of residue masses plus a single water for the termini.
pub fn molecular_weight(protein: &str) -> Result<f64, WeightError> {
    if protein.is_empty() {
        return Err(WeightError::EmptySequence);
    }

    let mut total = 0.0;
    let mut residues = 0usize;
    for (position, residue) in protein.chars().enumerate() {
        let mass = AMINO_ACID_MASSES
            .get(&residue)
            .ok_or(WeightError::UnknownResidue { residue, position })?;
        total += mass;
        residues += 1;
    }

    Ok(total - (residues as f64 - 1.0) * WATER_MASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_single_residue_is_free_amino_acid() {
        assert!((molecular_weight("G").unwrap() - 75.0666).abs() < EPSILON);
        assert!((molecular_weight("W").unwrap() - 204.2252).abs() < EPSILON);
    }

    #[test]
    fn test_dipeptide() {
        let expected = 149.2113 + 174.201 - WATER_MASS;
        assert!((molecular_weight("MR").unwrap() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_default_protein() {
        // YKMR from the default sequence
        let expected = 181.1885 + 146.1876 + 149.2113 + 174.201 - 3.0 * WATER_MASS;
        let mw = molecular_weight("YKMR").unwrap();
        assert!((mw - expected).abs() < EPSILON);
        assert!((mw - 596.7425).abs() < 1e-3);
    }

    #[test]
    fn test_weight_grows_with_length() {
        let mut protein = String::new();
        let mut previous = 0.0;
        for residue in "GAVLIMFWPSTCYNQDEKRH".chars() {
            protein.push(residue);
            let mw = molecular_weight(&protein).unwrap();
            assert!(mw > previous, "{} did not increase the weight", residue);
            previous = mw;
        }
    }

    #[test]
    fn test_empty_sequence_fails() {
        assert_eq!(molecular_weight(""), Err(WeightError::EmptySequence));
    }

    #[test]
    fn test_unknown_residue_fails() {
        assert_eq!(
            molecular_weight("MKX"),
            Err(WeightError::UnknownResidue { residue: 'X', position: 2 })
        );
        assert!(molecular_weight("mk").is_err());
        assert!(molecular_weight("M*").is_err());
    }

    #[test]
    fn test_mass_table_covers_twenty_residues() {
        assert_eq!(AMINO_ACID_MASSES.len(), 20);
        assert!(AMINO_ACID_MASSES.values().all(|&m| m > WATER_MASS));
    }
}
