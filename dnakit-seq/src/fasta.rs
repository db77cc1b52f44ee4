//! In-memory FASTA extraction.
//!
//! Turns the text of an uploaded file into a single sequence. Lines starting
//! with `>` are headers; every other line is trimmed and appended. Plain
//! sequences without a header are accepted as-is.

use dnakit_core::{Annotated, DnakitError, Result};

use crate::types::DnaSequence;

/// A sequence extracted from FASTA text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Identifier from the first header (empty when there is no header).
    pub id: String,
    /// Remainder of the first header line after the identifier.
    pub desc: Option<String>,
    pub sequence: DnaSequence,
}

impl Annotated for FastaRecord {
    fn name(&self) -> &str {
        &self.id
    }

    fn description(&self) -> Option<&str> {
        self.desc.as_deref()
    }
}

/// Split a header line (without `>`) into identifier and description.
fn split_header(header: &str) -> (String, Option<String>) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, rest)) => {
            let rest = rest.trim();
            (
                id.to_string(),
                (!rest.is_empty()).then(|| rest.to_string()),
            )
        }
        None => (header.to_string(), None),
    }
}

/// Extract the sequence from FASTA (or plain) text.
///
/// All non-header lines are concatenated, so a multi-record file yields one
/// combined sequence. Only the first header is kept.
///
/// # Errors
///
/// - [`DnakitError::Parse`] if the text holds no sequence characters.
/// - [`DnakitError::InvalidInput`] if the sequence has bases outside `ACGTN`.
pub fn extract_sequence(text: &str) -> Result<FastaRecord> {
    let mut header: Option<&str> = None;
    let mut raw = String::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(h) = line.strip_prefix('>') {
            if header.is_none() {
                header = Some(h);
            }
            continue;
        }
        raw.push_str(line.trim());
    }

    if raw.is_empty() {
        return Err(DnakitError::Parse("no sequence found in FASTA text".into()));
    }

    let sequence = DnaSequence::new(&raw)?;
    let (id, desc) = header.map(split_header).unwrap_or_default();
    Ok(FastaRecord { id, desc, sequence })
}
