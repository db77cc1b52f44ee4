//! Alphabet definitions for sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type.

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors strip whitespace and uppercase input first, then validate
/// against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// DNA alphabet with the ambiguity symbol: `ACGTN`.
///
/// This is the alphabet every analysis operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGTN";
}

/// Unambiguous DNA alphabet: `ACGT`.
///
/// Used for literal patterns such as restriction recognition sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrictDnaAlphabet;

impl Alphabet for StrictDnaAlphabet {
    const NAME: &'static str = "strict DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// RNA alphabet with the ambiguity symbol: `ACGUN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGUN";
}

/// Protein alphabet: 20 standard amino acids, `*` (stop) and `?` (unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY*?";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_bases_and_n() {
        for &b in b"ACGTN" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u_and_iupac_codes() {
        assert!(!DnaAlphabet::is_valid(b'U'));
        assert!(!DnaAlphabet::is_valid(b'R'));
        assert!(!DnaAlphabet::is_valid(b'X'));
    }

    #[test]
    fn strict_dna_rejects_n() {
        assert!(StrictDnaAlphabet::is_valid(b'G'));
        assert!(!StrictDnaAlphabet::is_valid(b'N'));
    }

    #[test]
    fn rna_rejects_t() {
        assert!(RnaAlphabet::is_valid(b'U'));
        assert!(!RnaAlphabet::is_valid(b'T'));
    }

    #[test]
    fn protein_accepts_stop_and_unknown() {
        assert!(ProteinAlphabet::is_valid(b'*'));
        assert!(ProteinAlphabet::is_valid(b'?'));
        assert!(!ProteinAlphabet::is_valid(b'X'));
        assert!(!ProteinAlphabet::is_valid(b' '));
    }
}
