//! Open Reading Frame (ORF) finding and six-frame translation.
//!
//! Two separate contracts live here:
//!
//! - [`find_orfs`] reports raw nucleotide runs: every `ATG` at any offset is
//!   extended in frame to the first stop codon (TAA, TAG, TGA).
//! - [`six_frame_translation`] translates the three forward and the three
//!   reverse-complement frames into amino-acid strings, and
//!   [`find_orfs_six_frame`] lists start-to-stop runs within those frames.

use std::fmt;

use dnakit_core::Sequence;

use crate::codon::{self, translate_sequence};
use crate::types::{DnaSequence, ProteinSequence};

/// An ATG…stop run found by [`find_orfs`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Orf {
    /// 1-based position of the A of the start codon.
    pub start: usize,
    /// 1-based position of the last base of the stop codon (inclusive).
    pub end: usize,
    /// The nucleotides of the ORF, start and stop codon included.
    pub sequence: DnaSequence,
}

impl Orf {
    /// Length in nucleotides.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false: an ORF holds at least a start and a stop codon.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Find every ATG-to-stop run, scanning every start offset.
///
/// Each `ATG` occurrence is extended codon by codon in its own frame until the
/// first in-frame stop codon, which closes the ORF. Starts that never meet an
/// in-frame stop are not reported. Nested starts produce their own ORFs, so
/// `ATGATGTAA` yields both `ATGATGTAA` and `ATGTAA`.
pub fn find_orfs(seq: &DnaSequence) -> Vec<Orf> {
    let bytes = seq.as_bytes();
    let len = bytes.len();
    let mut orfs = Vec::new();

    for start in 0..len.saturating_sub(2) {
        if !codon::is_start(&bytes[start..start + 3]) {
            continue;
        }
        let mut pos = start + 3;
        while pos + 3 <= len {
            if codon::is_stop(&bytes[pos..pos + 3]) {
                let end = pos + 3;
                orfs.push(Orf {
                    start: start + 1,
                    end,
                    sequence: DnaSequence::from_validated(bytes[start..end].to_vec()),
                });
                break;
            }
            pos += 3;
        }
    }

    orfs
}

// ---------------------------------------------------------------------------
// Six frames
// ---------------------------------------------------------------------------

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Strand {
    Forward,
    Reverse,
}

/// One of the six reading frames: a strand plus an offset of 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    pub strand: Strand,
    pub offset: usize,
}

impl Frame {
    /// The six frames in report order: +1, +2, +3, -1, -2, -3.
    pub const ALL: [Frame; 6] = [
        Frame { strand: Strand::Forward, offset: 0 },
        Frame { strand: Strand::Forward, offset: 1 },
        Frame { strand: Strand::Forward, offset: 2 },
        Frame { strand: Strand::Reverse, offset: 0 },
        Frame { strand: Strand::Reverse, offset: 1 },
        Frame { strand: Strand::Reverse, offset: 2 },
    ];
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        };
        write!(f, "{}{}", sign, self.offset + 1)
    }
}

/// Translation of one reading frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameTranslation {
    pub frame: Frame,
    pub protein: ProteinSequence,
}

/// The bases a frame reads: forward or reverse-complement strand, shifted.
fn frame_bases<'a>(forward: &'a [u8], reverse: &'a [u8], frame: Frame) -> &'a [u8] {
    let strand = match frame.strand {
        Strand::Forward => forward,
        Strand::Reverse => reverse,
    };
    strand.get(frame.offset..).unwrap_or(&[])
}

/// Translate all six reading frames (+1, +2, +3 on the input strand, then
/// -1, -2, -3 on its reverse complement).
///
/// Each frame is translated in full with the codon table, stops included and
/// a trailing partial codon shown as `?`.
pub fn six_frame_translation(seq: &DnaSequence) -> Vec<FrameTranslation> {
    let rc = seq.reverse_complement();
    Frame::ALL
        .iter()
        .map(|&frame| FrameTranslation {
            frame,
            protein: ProteinSequence::from_validated(translate_sequence(frame_bases(
                seq, &rc, frame,
            ))),
        })
        .collect()
}

/// An ORF located in one of the six frames.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FramedOrf {
    pub frame: Frame,
    /// Start position on the input strand (0-indexed).
    pub start: usize,
    /// End position on the input strand (exclusive).
    pub end: usize,
    /// ORF nucleotides as read on its own strand.
    pub sequence: DnaSequence,
    /// Translated ORF, ending with `*`.
    pub protein: ProteinSequence,
}

/// Scan one strand frame by frame, opening at ATG and closing at the next
/// in-frame stop. Returns `(frame offset, start, end)` in strand coordinates.
fn scan_strand(bases: &[u8], min_length: usize) -> Vec<(usize, usize, usize)> {
    let mut runs = Vec::new();
    let len = bases.len();

    for offset in 0..3 {
        let mut pos = offset;
        let mut orf_start: Option<usize> = None;

        while pos + 3 <= len {
            let codon = &bases[pos..pos + 3];
            match orf_start {
                None if codon::is_start(codon) => orf_start = Some(pos),
                Some(start) if codon::is_stop(codon) => {
                    let end = pos + 3;
                    if end - start >= min_length {
                        runs.push((offset, start, end));
                    }
                    orf_start = None;
                }
                _ => {}
            }
            pos += 3;
        }
    }

    runs
}

/// Find ORFs in all six reading frames.
///
/// Within each frame an ORF opens at the first ATG and closes at the next
/// in-frame stop; the scan then looks for the next ATG. Runs without a stop
/// codon are not reported. `min_length` is in nucleotides, stop included.
/// Coordinates of reverse-strand ORFs refer to positions on the input
/// sequence.
pub fn find_orfs_six_frame(seq: &DnaSequence, min_length: usize) -> Vec<FramedOrf> {
    let forward = seq.as_bytes();
    let rc = seq.reverse_complement();
    let len = forward.len();
    let mut results = Vec::new();

    for (strand, bases) in [(Strand::Forward, forward), (Strand::Reverse, rc.as_bytes())] {
        for (offset, start, end) in scan_strand(bases, min_length) {
            let nucleotides = bases[start..end].to_vec();
            let protein = ProteinSequence::from_validated(translate_sequence(&nucleotides));
            let (start, end) = match strand {
                Strand::Forward => (start, end),
                // Position `p` on the reverse complement is `len - p` on the input.
                Strand::Reverse => (len - end, len - start),
            };
            results.push(FramedOrf {
                frame: Frame { strand, offset },
                start,
                end,
                sequence: DnaSequence::from_validated(nucleotides),
                protein,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    #[test]
    fn known_orf() {
        let orfs = find_orfs(&dna("ATGAAATAG"));
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].sequence.as_bytes(), b"ATGAAATAG");
        assert_eq!(orfs[0].start, 1);
        assert_eq!(orfs[0].end, 9);
        assert_eq!(orfs[0].len(), 9);
    }

    #[test]
    fn start_at_any_offset() {
        let orfs = find_orfs(&dna("CCATGCCCTGAGG"));
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].start, 3);
        assert_eq!(orfs[0].sequence.as_bytes(), b"ATGCCCTGA");
    }

    #[test]
    fn nested_starts_each_reported() {
        let orfs = find_orfs(&dna("ATGATGTAA"));
        let seqs: Vec<&[u8]> = orfs.iter().map(|o| o.sequence.as_bytes()).collect();
        assert_eq!(seqs, vec![b"ATGATGTAA".as_slice(), b"ATGTAA".as_slice()]);
    }

    #[test]
    fn out_of_frame_stop_ignored() {
        // The TAA at offset 4 is not in frame with the ATG at 0.
        let orfs = find_orfs(&dna("ATGCTAAGGTGA"));
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].sequence.as_bytes(), b"ATGCTAAGGTGA");
    }

    #[test]
    fn no_stop_no_orf() {
        assert!(find_orfs(&dna("ATGAAACCC")).is_empty());
        assert!(find_orfs(&dna("ATGAAATA")).is_empty());
    }

    #[test]
    fn lowercase_input() {
        let orfs = find_orfs(&dna("atgaaataa"));
        assert_eq!(orfs.len(), 1);
    }

    #[test]
    fn short_sequences() {
        assert!(find_orfs(&dna("AT")).is_empty());
        assert!(find_orfs(&dna("ATG")).is_empty());
    }

    #[test]
    fn frame_labels() {
        let labels: Vec<String> = Frame::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, ["+1", "+2", "+3", "-1", "-2", "-3"]);
    }

    #[test]
    fn six_frames_translated() {
        // RC of ATGTTTTAA is TTAAAACAT
        let frames = six_frame_translation(&dna("ATGTTTTAA"));
        assert_eq!(frames.len(), 6);
        let proteins: Vec<&[u8]> = frames.iter().map(|f| f.protein.as_bytes()).collect();
        assert_eq!(proteins[0], b"MF*");
        assert_eq!(proteins[1], b"CF?");
        assert_eq!(proteins[2], b"VL?");
        assert_eq!(proteins[3], b"LKH");
        assert_eq!(proteins[4], b"*N?");
        assert_eq!(proteins[5], b"KT?");
    }

    #[test]
    fn six_frames_short_sequence() {
        let frames = six_frame_translation(&dna("AC"));
        assert_eq!(frames[0].protein.as_bytes(), b"?");
        assert_eq!(frames[2].protein.as_bytes(), b"");
    }

    #[test]
    fn six_frame_orfs_both_strands() {
        // Forward ATG CCC TAA; reverse complement of TTAGGGCAT is ATGCCCTAA.
        let orfs = find_orfs_six_frame(&dna("ATGCCCTAATTAGGGCAT"), 1);
        let fwd: Vec<_> = orfs.iter().filter(|o| o.frame.strand == Strand::Forward).collect();
        let rev: Vec<_> = orfs.iter().filter(|o| o.frame.strand == Strand::Reverse).collect();
        assert_eq!(fwd.len(), 1);
        assert_eq!(fwd[0].start, 0);
        assert_eq!(fwd[0].end, 9);
        assert_eq!(fwd[0].protein.as_bytes(), b"MP*");
        assert_eq!(rev.len(), 1);
        assert_eq!(rev[0].start, 9);
        assert_eq!(rev[0].end, 18);
        assert_eq!(rev[0].sequence.as_bytes(), b"ATGCCCTAA");
    }

    #[test]
    fn six_frame_orfs_min_length() {
        let seq = dna("ATGAAATAA");
        assert!(find_orfs_six_frame(&seq, 10).is_empty());
        assert_eq!(find_orfs_six_frame(&seq, 9).len(), 1);
    }

    #[test]
    fn six_frame_orfs_consecutive_in_frame() {
        let orfs = find_orfs_six_frame(&dna("ATGAAATAAATGCCCTAG"), 1);
        let frame0: Vec<_> = orfs
            .iter()
            .filter(|o| o.frame == Frame { strand: Strand::Forward, offset: 0 })
            .collect();
        assert_eq!(frame0.len(), 2);
        assert_eq!((frame0[0].start, frame0[0].end), (0, 9));
        assert_eq!((frame0[1].start, frame0[1].end), (9, 18));
    }
}
