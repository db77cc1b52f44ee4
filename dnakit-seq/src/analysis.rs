//! Analysis selection and dispatch.
//!
//! [`AnalysisKind`] names one operation the way the web form's analysis-type
//! selector does, and [`run`] validates raw input and dispatches to it. This
//! is the single entry point shared by the browser boundary and the CLI.

use std::fmt;
use std::str::FromStr;

use dnakit_core::{DnakitError, Result};

use crate::orf::{find_orfs, six_frame_translation, FrameTranslation, Orf};
use crate::report::AnalysisReport;
use crate::restriction::{
    restriction_site_counts, restriction_site_positions, CountSummary, RestrictionEnzyme,
    SiteCount, SiteHit, DEFAULT_ENZYMES,
};
use crate::thermo::{
    annealing_temperature, annealing_temperature_single, melting_temperature,
    AnnealingTemperature, MeltingTemperature,
};
use crate::types::{
    format_gc_content, DnaSequence, NucleotideCounts, ProteinSequence, RnaSequence,
};

/// One selectable analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Transcribe,
    Complement,
    ReverseComplement,
    Translate,
    TranslateReadingFrame,
    RestrictionSites,
    RestrictionSitePositions,
    Orf,
    SixFrame,
    GcContent,
    NucleotideFrequency,
    MeltingTemperature,
    AnnealingTemperature,
    AnalyzeAll,
}

impl AnalysisKind {
    /// Every analysis, in selector order.
    pub const ALL: [AnalysisKind; 14] = [
        AnalysisKind::Transcribe,
        AnalysisKind::Complement,
        AnalysisKind::ReverseComplement,
        AnalysisKind::Translate,
        AnalysisKind::TranslateReadingFrame,
        AnalysisKind::RestrictionSites,
        AnalysisKind::RestrictionSitePositions,
        AnalysisKind::Orf,
        AnalysisKind::SixFrame,
        AnalysisKind::GcContent,
        AnalysisKind::NucleotideFrequency,
        AnalysisKind::MeltingTemperature,
        AnalysisKind::AnnealingTemperature,
        AnalysisKind::AnalyzeAll,
    ];

    /// Selector value, e.g. `reverseComplement`.
    pub fn name(self) -> &'static str {
        match self {
            AnalysisKind::Transcribe => "transcribe",
            AnalysisKind::Complement => "complement",
            AnalysisKind::ReverseComplement => "reverseComplement",
            AnalysisKind::Translate => "translate",
            AnalysisKind::TranslateReadingFrame => "translateReadingFrame",
            AnalysisKind::RestrictionSites => "restrictionSites",
            AnalysisKind::RestrictionSitePositions => "restrictionSitePositions",
            AnalysisKind::Orf => "orf",
            AnalysisKind::SixFrame => "sixFrame",
            AnalysisKind::GcContent => "gcContent",
            AnalysisKind::NucleotideFrequency => "nucleotideFreq",
            AnalysisKind::MeltingTemperature => "meltingTemp",
            AnalysisKind::AnnealingTemperature => "annealingTemp",
            AnalysisKind::AnalyzeAll => "analyzeAll",
        }
    }

    /// Human-readable title, e.g. `Reverse Complement`.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::Transcribe => "Transcription (RNA)",
            AnalysisKind::Complement => "DNA Complement",
            AnalysisKind::ReverseComplement => "Reverse Complement",
            AnalysisKind::Translate => "Translation (Amino Acids)",
            AnalysisKind::TranslateReadingFrame => "Reading Frame Translation",
            AnalysisKind::RestrictionSites => "Restriction Sites",
            AnalysisKind::RestrictionSitePositions => "Restriction Site Positions",
            AnalysisKind::Orf => "Open Reading Frames (ORFs)",
            AnalysisKind::SixFrame => "Six-Frame Translation",
            AnalysisKind::GcContent => "GC Content",
            AnalysisKind::NucleotideFrequency => "Nucleotide Frequency",
            AnalysisKind::MeltingTemperature => "Melting Temperature",
            AnalysisKind::AnnealingTemperature => "Annealing Temperature",
            AnalysisKind::AnalyzeAll => "Full Analysis",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisKind {
    type Err = DnakitError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        AnalysisKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DnakitError::InvalidInput(format!("unknown analysis type '{s}'")))
    }
}

/// Auxiliary inputs some analyses take.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// 1-based reading frame for [`AnalysisKind::TranslateReadingFrame`];
    /// frame 1 when unset.
    pub frame: Option<usize>,
    /// Primer for the annealing estimate and the full report.
    pub primer: Option<String>,
    /// Enzyme table for site searches; [`DEFAULT_ENZYMES`] when unset.
    pub enzymes: Option<Vec<RestrictionEnzyme>>,
}

/// Result of one analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum AnalysisOutput {
    Rna(RnaSequence),
    Dna(DnaSequence),
    Protein(ProteinSequence),
    SiteCounts(Vec<SiteCount>),
    SiteHits(Vec<SiteHit>),
    Orfs(Vec<Orf>),
    Frames(Vec<FrameTranslation>),
    GcContent(f64),
    Counts(NucleotideCounts),
    Melting(MeltingTemperature),
    Annealing(AnnealingTemperature),
    Report(AnalysisReport),
}

/// The text a result panel shows for each output.
impl fmt::Display for AnalysisOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisOutput::Rna(s) => write!(f, "{s}"),
            AnalysisOutput::Dna(s) => write!(f, "{s}"),
            AnalysisOutput::Protein(s) => write!(f, "{s}"),
            AnalysisOutput::SiteCounts(counts) => write!(f, "{}", CountSummary(counts)),
            AnalysisOutput::SiteHits(hits) if hits.is_empty() => {
                f.write_str("No restriction sites found.")
            }
            AnalysisOutput::SiteHits(hits) => {
                let lines: Vec<String> = hits
                    .iter()
                    .map(|h| format!("{} at {}", h.enzyme, h.position))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            AnalysisOutput::Orfs(orfs) if orfs.is_empty() => f.write_str("No ORFs found."),
            AnalysisOutput::Orfs(orfs) => {
                let lines: Vec<String> = orfs
                    .iter()
                    .map(|o| format!("{}-{}: {}", o.start, o.end, o.sequence))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            AnalysisOutput::Frames(frames) => {
                let lines: Vec<String> = frames
                    .iter()
                    .map(|t| format!("{}: {}", t.frame, t.protein))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            AnalysisOutput::GcContent(gc) => f.write_str(&format_gc_content(*gc)),
            AnalysisOutput::Counts(counts) => write!(f, "{counts}"),
            AnalysisOutput::Melting(tm) => write!(f, "{tm}"),
            AnalysisOutput::Annealing(at) => write!(f, "{at}"),
            AnalysisOutput::Report(report) => write!(f, "{report}"),
        }
    }
}

/// Validate `raw` (and any primer) and run `kind` on it.
///
/// # Errors
///
/// Returns [`DnakitError::InvalidInput`] when the sequence is blank or holds
/// bases outside `ACGTN`, when the primer is invalid, or when the reading
/// frame is not 1, 2 or 3. Nothing is computed in that case.
pub fn run(kind: AnalysisKind, raw: &str, options: &AnalysisOptions) -> Result<AnalysisOutput> {
    if raw.trim().is_empty() {
        return Err(DnakitError::InvalidInput("no sequence entered".into()));
    }
    let seq = DnaSequence::new(raw)?;
    let primer = options
        .primer
        .as_deref()
        .map(|p| {
            DnaSequence::new(p)
                .map_err(|e| DnakitError::InvalidInput(format!("primer: {e}")))
        })
        .transpose()?;
    let enzymes = options.enzymes.as_deref().unwrap_or(&DEFAULT_ENZYMES);

    let output = match kind {
        AnalysisKind::Transcribe => AnalysisOutput::Rna(seq.transcribe()),
        AnalysisKind::Complement => AnalysisOutput::Dna(seq.complement()),
        AnalysisKind::ReverseComplement => AnalysisOutput::Dna(seq.reverse_complement()),
        AnalysisKind::Translate => AnalysisOutput::Protein(seq.translate()),
        AnalysisKind::TranslateReadingFrame => {
            AnalysisOutput::Protein(seq.translate_frame(options.frame.unwrap_or(1))?)
        }
        AnalysisKind::RestrictionSites => {
            AnalysisOutput::SiteCounts(restriction_site_counts(&seq, enzymes))
        }
        AnalysisKind::RestrictionSitePositions => {
            AnalysisOutput::SiteHits(restriction_site_positions(&seq, enzymes))
        }
        AnalysisKind::Orf => AnalysisOutput::Orfs(find_orfs(&seq)),
        AnalysisKind::SixFrame => AnalysisOutput::Frames(six_frame_translation(&seq)),
        AnalysisKind::GcContent => AnalysisOutput::GcContent(seq.gc_content()),
        AnalysisKind::NucleotideFrequency => AnalysisOutput::Counts(seq.nucleotide_counts()),
        AnalysisKind::MeltingTemperature => AnalysisOutput::Melting(melting_temperature(&seq)),
        AnalysisKind::AnnealingTemperature => match &primer {
            Some(primer) => AnalysisOutput::Annealing(annealing_temperature(&seq, primer)),
            None => AnalysisOutput::Melting(annealing_temperature_single(&seq)),
        },
        AnalysisKind::AnalyzeAll => {
            AnalysisOutput::Report(AnalysisReport::build(&seq, primer.as_ref()))
        }
    };
    Ok(output)
}
