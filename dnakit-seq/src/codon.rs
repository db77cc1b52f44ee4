//! Codon translation with the standard genetic code.
//!
//! Translation reads non-overlapping codons left to right and never stops
//! early: stop codons are emitted as [`STOP`] and translation continues.
//! Codons that cannot be looked up directly are handled as follows:
//!
//! - a codon containing `N` is expanded over `A/C/G/T` at every ambiguous
//!   position; if every concrete codon encodes the same residue, that residue
//!   is emitted, otherwise [`UNKNOWN`]
//! - a trailing partial codon (1 or 2 bases) is emitted as [`UNKNOWN`]

use dnakit_core::{DnakitError, Result};

use crate::types::{DnaSequence, ProteinSequence};

/// Symbol emitted for stop codons.
pub const STOP: u8 = b'*';

/// Symbol emitted for untranslatable or ambiguous codons.
pub const UNKNOWN: u8 = b'?';

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT

/// Standard genetic code (NCBI Table 1).
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Index of ATG in [`STANDARD_CODE`].
const START_INDEX: usize = 14;

/// Resolve a codon with `N` at one or more positions.
fn resolve_ambiguous(codon: &[u8]) -> u8 {
    let mut pattern = [None; 3];
    for (slot, &b) in pattern.iter_mut().zip(codon) {
        *slot = match b.to_ascii_uppercase() {
            b'N' => None,
            other => match base_index(other) {
                Some(i) => Some(i),
                None => return UNKNOWN,
            },
        };
    }

    let mut residue = None;
    for idx in 0..64 {
        let bases = [idx >> 4, (idx >> 2) & 3, idx & 3];
        let fits = pattern
            .iter()
            .zip(bases)
            .all(|(p, b)| p.map_or(true, |want| want == b));
        if !fits {
            continue;
        }
        match residue {
            None => residue = Some(STANDARD_CODE[idx]),
            Some(aa) if aa != STANDARD_CODE[idx] => return UNKNOWN,
            Some(_) => {}
        }
    }
    residue.unwrap_or(UNKNOWN)
}

/// Translate a single codon to its one-letter symbol.
///
/// Accepts DNA (T) and RNA (U) codons in either case. Stop codons give
/// [`STOP`]; partial or untranslatable codons give [`UNKNOWN`].
pub fn translate_codon(codon: &[u8]) -> u8 {
    if codon.len() != 3 {
        return UNKNOWN;
    }
    match codon_index(codon) {
        Some(idx) => STANDARD_CODE[idx],
        None => resolve_ambiguous(codon),
    }
}

/// Whether `codon` is a stop codon (TAA, TAG, TGA).
pub fn is_stop(codon: &[u8]) -> bool {
    codon_index(codon).map_or(false, |idx| STANDARD_CODE[idx] == STOP)
}

/// Whether `codon` is the start codon ATG.
pub fn is_start(codon: &[u8]) -> bool {
    codon_index(codon) == Some(START_INDEX)
}

/// Translate a nucleotide sequence codon by codon.
///
/// Stop codons are kept as `*`; a trailing partial codon becomes `?`.
pub fn translate_sequence(seq: &[u8]) -> Vec<u8> {
    seq.chunks(3).map(translate_codon).collect()
}

impl DnaSequence {
    /// Translate in reading frame 1.
    pub fn translate(&self) -> ProteinSequence {
        ProteinSequence::from_validated(translate_sequence(self))
    }

    /// Translate in a 1-based reading frame (1, 2 or 3).
    ///
    /// Drops `frame - 1` leading bases before translating. A sequence shorter
    /// than the offset translates to an empty protein.
    ///
    /// # Errors
    ///
    /// Returns [`DnakitError::InvalidInput`] if `frame` is not 1, 2 or 3.
    pub fn translate_frame(&self, frame: usize) -> Result<ProteinSequence> {
        if !(1..=3).contains(&frame) {
            return Err(DnakitError::InvalidInput(format!(
                "reading frame must be 1, 2 or 3, got {frame}"
            )));
        }
        let shifted = self.get(frame - 1..).unwrap_or(&[]);
        Ok(ProteinSequence::from_validated(translate_sequence(shifted)))
    }
}
