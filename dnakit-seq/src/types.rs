//! Concrete sequence type aliases and their basic transformations.
//!
//! - [`DnaSequence`] — transcription, complement, reverse complement, composition
//! - [`RnaSequence`] — transcription output
//! - [`ProteinSequence`] — translation output

use std::fmt;

use dnakit_core::Sequence;

use crate::alphabet::{DnaAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence (`ACGTN`).
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence (`ACGUN`).
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated protein sequence (amino acids, `*` stop, `?` unknown).
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

// ---------------------------------------------------------------------------
// Complement table
// ---------------------------------------------------------------------------

pub(crate) fn dna_complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other, // N
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Per-base counts of a DNA sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NucleotideCounts {
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: usize,
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    pub t: usize,
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    pub g: usize,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub c: usize,
    /// Ambiguous `N` positions.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    pub n: usize,
}

impl NucleotideCounts {
    /// Count every base of `seq` (expected uppercase).
    pub fn from_bytes(seq: &[u8]) -> Self {
        let mut counts = Self::default();
        for &b in seq {
            match b {
                b'A' => counts.a += 1,
                b'T' => counts.t += 1,
                b'G' => counts.g += 1,
                b'C' => counts.c += 1,
                _ => counts.n += 1,
            }
        }
        counts
    }

    /// Number of G and C bases.
    pub fn gc(&self) -> usize {
        self.g + self.c
    }

    /// Number of A and T bases.
    pub fn at(&self) -> usize {
        self.a + self.t
    }

    /// Total number of counted positions.
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c + self.n
    }
}

impl fmt::Display for NucleotideCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A: {}, T: {}, G: {}, C: {}", self.a, self.t, self.g, self.c)?;
        if self.n > 0 {
            write!(f, ", N: {}", self.n)?;
        }
        Ok(())
    }
}

/// Round to two decimal places.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        RnaSequence::from_validated(rna)
    }

    /// Base-wise complement (A↔T, C↔G, N→N) without reversing.
    pub fn complement(&self) -> DnaSequence {
        DnaSequence::from_validated(self.iter().map(|&b| dna_complement(b)).collect())
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> DnaSequence {
        let rc: Vec<u8> = self.iter().rev().map(|&b| dna_complement(b)).collect();
        DnaSequence::from_validated(rc)
    }

    /// Count A, T, G, C (and N).
    pub fn nucleotide_counts(&self) -> NucleotideCounts {
        NucleotideCounts::from_bytes(self.as_bytes())
    }

    /// GC content as a percentage in [0, 100], rounded to two decimals.
    ///
    /// The denominator is the full length, so `N` positions dilute the value.
    pub fn gc_content(&self) -> f64 {
        let counts = self.nucleotide_counts();
        round2(counts.gc() as f64 / self.len() as f64 * 100.0)
    }
}

/// Render a GC percentage the way reports show it (`"50.00%"`).
pub fn format_gc_content(percent: f64) -> String {
    format!("{percent:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Transcription ---

    #[test]
    fn dna_to_rna() {
        let dna = DnaSequence::new(b"atcg").unwrap();
        assert_eq!(dna.transcribe().as_ref(), b"AUCG");
    }

    #[test]
    fn transcribe_keeps_n() {
        let dna = DnaSequence::new(b"TNT").unwrap();
        assert_eq!(dna.transcribe().as_ref(), b"UNU");
    }

    // --- Complement ---

    #[test]
    fn complement_basic() {
        let seq = DnaSequence::new(b"AACGN").unwrap();
        assert_eq!(seq.complement().as_ref(), b"TTGCN");
    }

    #[test]
    fn revcomp_palindromic() {
        let seq = DnaSequence::new(b"GAATTC").unwrap();
        assert_eq!(seq.reverse_complement().as_ref(), b"GAATTC");
    }

    #[test]
    fn revcomp_asymmetric() {
        let seq = DnaSequence::new(b"aacg").unwrap();
        assert_eq!(seq.reverse_complement().as_ref(), b"CGTT");
    }

    // --- Composition ---

    #[test]
    fn counts_case_insensitive() {
        let seq = DnaSequence::new(b"aaTgcN").unwrap();
        let counts = seq.nucleotide_counts();
        assert_eq!(
            counts,
            NucleotideCounts { a: 2, t: 1, g: 1, c: 1, n: 1 }
        );
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.to_string(), "A: 2, T: 1, G: 1, C: 1, N: 1");
    }

    #[test]
    fn counts_display_omits_zero_n() {
        let counts = NucleotideCounts::from_bytes(b"ATGC");
        assert_eq!(counts.to_string(), "A: 1, T: 1, G: 1, C: 1");
    }

    #[test]
    fn gc_content_basic() {
        let seq = DnaSequence::new(b"ATGC").unwrap();
        assert_eq!(seq.gc_content(), 50.0);
        assert_eq!(format_gc_content(seq.gc_content()), "50.00%");
    }

    #[test]
    fn gc_content_rounds_to_two_decimals() {
        // 1 of 3 → 33.333...%
        let seq = DnaSequence::new(b"GAA").unwrap();
        assert_eq!(seq.gc_content(), 33.33);
        let seq = DnaSequence::new(b"GGA").unwrap();
        assert_eq!(seq.gc_content(), 66.67);
    }

    #[test]
    fn gc_content_counts_n_in_length() {
        let seq = DnaSequence::new(b"GCNN").unwrap();
        assert_eq!(seq.gc_content(), 50.0);
    }
}
