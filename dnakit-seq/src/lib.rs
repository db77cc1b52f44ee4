//! Sequence analysis engine for the dnakit toolkit.
//!
//! Provides validated sequence types and the elementary analyses of a
//! teaching-oriented DNA workbench:
//!
//! - **Validation** — [`DnaSequence`] accepts `ACGTN` in any case, whitespace stripped
//! - **Transformation** — transcription, complement, reverse complement
//! - **Translation** — standard genetic code, reading frames, six-frame translation
//! - **Motifs** — restriction recognition sites, open reading frames
//! - **Statistics** — base counts, GC content, melting/annealing temperature
//! - **Reporting** — [`AnalysisReport`] and the [`analysis`] dispatcher
//! - **FASTA** — [`extract_sequence`] for in-memory FASTA text
//!
//! Every operation is a pure function of its inputs and static tables.
//!
//! # Example
//!
//! ```
//! use dnakit_seq::{find_orfs, melting_temperature, DnaSequence};
//! use dnakit_core::Sequence;
//!
//! let dna = DnaSequence::new("atg aaa tag").unwrap();
//! assert_eq!(dna.as_bytes(), b"ATGAAATAG");
//!
//! assert_eq!(dna.reverse_complement().to_string(), "CTATTTCAT");
//! assert_eq!(dna.transcribe().to_string(), "AUGAAAUAG");
//! assert_eq!(dna.translate().to_string(), "MK*");
//!
//! let orfs = find_orfs(&dna);
//! assert_eq!(orfs[0].sequence.to_string(), "ATGAAATAG");
//!
//! assert_eq!(melting_temperature(&dna).to_string(), "22.00°C");
//! assert!(DnaSequence::new("ATXG").is_err());
//! ```

pub mod alphabet;
pub mod analysis;
pub mod codon;
pub mod fasta;
pub mod orf;
pub mod report;
pub mod restriction;
pub mod seq;
pub mod thermo;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet, StrictDnaAlphabet};

// Re-export the generic sequence type
pub use seq::ValidatedSeq;

// Re-export concrete type aliases
pub use types::{format_gc_content, DnaSequence, NucleotideCounts, ProteinSequence, RnaSequence};

// Re-export codon translation
pub use codon::{translate_codon, translate_sequence};

// Re-export ORF types
pub use orf::{
    find_orfs, find_orfs_six_frame, six_frame_translation, Frame, FrameTranslation, FramedOrf,
    Orf, Strand,
};

// Re-export restriction site search
pub use restriction::{
    common_enzymes, enzyme_table, parse_enzyme_table, restriction_site_counts, restriction_site_positions,
    RestrictionEnzyme, SiteCount, SiteHit, DEFAULT_ENZYMES,
};

// Re-export thermodynamics
pub use thermo::{
    annealing_temperature, annealing_temperature_single, melting_temperature,
    AnnealingTemperature, MeltingTemperature, TmMethod,
};

// Re-export reporting and dispatch
pub use analysis::{run, AnalysisKind, AnalysisOptions, AnalysisOutput};
pub use report::{AnalysisReport, ReportEntry, ReportValue};

// Re-export FASTA extraction
pub use fasta::{extract_sequence, FastaRecord};

/// Whether `raw` is an acceptable DNA sequence (see [`DnaSequence::new`]).
pub fn validate(raw: &str) -> bool {
    seq::is_valid::<DnaAlphabet>(raw)
}
