//! Combined "analyze all" report.
//!
//! Every entry is computed independently from the same validated sequence;
//! no entry feeds another.

use std::fmt;

use crate::orf::{find_orfs, six_frame_translation};
use crate::restriction::{restriction_site_counts, DEFAULT_ENZYMES};
use crate::thermo::{annealing_temperature, melting_temperature};
use crate::types::{format_gc_content, DnaSequence};

/// Value of one report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum ReportValue {
    /// Plain text such as a sequence or a formatted number.
    Text(String),
    /// Labelled counts, in display order.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_counts"))]
    Counts(Vec<(String, usize)>),
    /// One line per item; rendered as `None found` when empty.
    List(Vec<String>),
}

#[cfg(feature = "serde")]
fn serialize_counts<S: serde::Serializer>(
    counts: &[(String, usize)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(k, v)| (k, v)))
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Text(s) => f.write_str(s),
            ReportValue::Counts(counts) => {
                for (i, (label, n)) in counts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{label}: {n}")?;
                }
                Ok(())
            }
            ReportValue::List(items) if items.is_empty() => f.write_str("None found"),
            ReportValue::List(items) => f.write_str(&items.join("\n")),
        }
    }
}

/// A labelled report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub label: &'static str,
    pub value: ReportValue,
}

/// Ordered results of every analysis over one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub entries: Vec<ReportEntry>,
}

impl AnalysisReport {
    /// Run every analysis on `seq` in report order.
    ///
    /// The annealing entry is only present when a `primer` is given.
    pub fn build(seq: &DnaSequence, primer: Option<&DnaSequence>) -> Self {
        let counts = seq.nucleotide_counts();
        let mut base_counts = vec![
            ("A".to_string(), counts.a),
            ("T".to_string(), counts.t),
            ("G".to_string(), counts.g),
            ("C".to_string(), counts.c),
        ];
        if counts.n > 0 {
            base_counts.push(("N".to_string(), counts.n));
        }

        let mut entries = vec![
            entry("Transcription (RNA)", ReportValue::Text(seq.transcribe().to_string())),
            entry("DNA Complement", ReportValue::Text(seq.complement().to_string())),
            entry(
                "Reverse Complement",
                ReportValue::Text(seq.reverse_complement().to_string()),
            ),
            entry(
                "Translation (Amino Acids)",
                ReportValue::Text(seq.translate().to_string()),
            ),
            entry(
                "Reading Frames",
                ReportValue::List(
                    six_frame_translation(seq)
                        .into_iter()
                        .map(|t| format!("{}: {}", t.frame, t.protein))
                        .collect(),
                ),
            ),
            entry(
                "GC Content",
                ReportValue::Text(format_gc_content(seq.gc_content())),
            ),
            entry(
                "Melting Temperature",
                ReportValue::Text(melting_temperature(seq).to_string()),
            ),
            entry("Nucleotide Frequency", ReportValue::Counts(base_counts)),
            entry(
                "Restriction Sites",
                ReportValue::Counts(
                    restriction_site_counts(seq, &DEFAULT_ENZYMES)
                        .into_iter()
                        .map(|c| (c.enzyme, c.count))
                        .collect(),
                ),
            ),
            entry(
                "Open Reading Frames (ORFs)",
                ReportValue::List(find_orfs(seq).into_iter().map(|o| o.sequence.to_string()).collect()),
            ),
        ];

        if let Some(primer) = primer {
            entries.push(entry(
                "Annealing Temperature",
                ReportValue::Text(annealing_temperature(seq, primer).to_string()),
            ));
        }

        Self { entries }
    }

    /// Look up an entry by label.
    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.value)
    }
}

fn entry(label: &'static str, value: ReportValue) -> ReportEntry {
    ReportEntry { label, value }
}

/// Renders `label:\nvalue` blocks separated by a blank line.
impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}:\n{}", e.label, e.value)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AnalysisReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (e.label, &e.value)))
    }
}
