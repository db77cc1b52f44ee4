//! Rendering results for saving and display.
//!
//! The saved document is plain text:
//!
//! ```text
//! DNA Sequence Analysis Result
//! ============================
//! Analysis: Reverse Complement
//!
//! GCAT
//! ```

use dnakit_core::{DnakitError, Result};
use dnakit_seq::AnalysisKind;

use crate::error::wasm_result;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// File name offered when a result is saved.
pub const RESULT_FILE_NAME: &str = "result.txt";

/// Line width used when wrapping long sequences for display.
pub const DEFAULT_LINE_WIDTH: usize = 80;

const HEADER: &str = "DNA Sequence Analysis Result";

/// Build the saved-result document for `kind`.
///
/// # Errors
///
/// Returns [`DnakitError::InvalidInput`] if `result` is blank.
pub fn result_document(kind: AnalysisKind, result: &str) -> Result<String> {
    if result.trim().is_empty() {
        return Err(DnakitError::InvalidInput("no result to save".into()));
    }
    let rule = "=".repeat(HEADER.len());
    Ok(format!(
        "{HEADER}\n{rule}\nAnalysis: {}\n\n{}\n",
        kind.title(),
        result.trim_end()
    ))
}

/// Break `seq` into lines of at most `width` characters. A width of zero
/// leaves the text on one line.
pub fn wrap_sequence(seq: &str, width: usize) -> String {
    if width == 0 || seq.len() <= width {
        return seq.to_string();
    }
    let chars: Vec<char> = seq.chars().collect();
    chars
        .chunks(width)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Saved-result document for the analysis named `analysis`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn save_document(analysis: &str, result: &str) -> String {
    wasm_result(
        analysis
            .parse::<AnalysisKind>()
            .and_then(|kind| result_document(kind, result)),
    )
}

/// Wrap a sequence for display (`0` means the default width of 80).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn format_sequence(seq: &str, width: usize) -> String {
    let width = if width == 0 { DEFAULT_LINE_WIDTH } else { width };
    crate::error::wasm_ok(&wrap_sequence(seq, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_layout() {
        let doc = result_document(AnalysisKind::ReverseComplement, "GCAT").unwrap();
        assert_eq!(
            doc,
            "DNA Sequence Analysis Result\n\
             ============================\n\
             Analysis: Reverse Complement\n\
             \n\
             GCAT\n"
        );
    }

    #[test]
    fn blank_result_not_saved() {
        let err = result_document(AnalysisKind::Transcribe, "  \n").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn wrapping() {
        assert_eq!(wrap_sequence("ACGTACGTAC", 4), "ACGT\nACGT\nAC");
        assert_eq!(wrap_sequence("ACGT", 4), "ACGT");
        assert_eq!(wrap_sequence("ACGT", 0), "ACGT");
        assert_eq!(wrap_sequence(&"A".repeat(200), 80).lines().count(), 3);
    }

    #[test]
    fn json_boundary() {
        let v: serde_json::Value =
            serde_json::from_str(&save_document("gcContent", "50.00%")).unwrap();
        assert!(v["ok"].as_str().unwrap().contains("Analysis: GC Content\n\n50.00%"));

        let v: serde_json::Value = serde_json::from_str(&save_document("nope", "x")).unwrap();
        assert!(v["error"].is_string());

        let v: serde_json::Value =
            serde_json::from_str(&format_sequence(&"C".repeat(81), 0)).unwrap();
        assert_eq!(v["ok"].as_str().unwrap().lines().count(), 2);
    }
}
