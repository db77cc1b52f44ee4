//! Form-style dispatch: one analysis selected by name.

use serde::Serialize;

use dnakit_core::Result;
use dnakit_seq::{AnalysisKind, AnalysisOptions, AnalysisOutput};

use crate::error::wasm_result;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Serializable outcome of [`analyze`].
#[derive(Debug, Serialize)]
pub struct JsAnalysis {
    /// Selector name, e.g. `reverseComplement`.
    pub analysis: &'static str,
    /// Heading for the result panel.
    pub title: &'static str,
    /// Text the result panel shows.
    pub text: String,
    /// Structured value.
    pub value: AnalysisOutput,
}

/// Parse the selector and run it, keeping the rendered text and the value.
pub fn run_named(seq: &str, analysis: &str, options: &AnalysisOptions) -> Result<JsAnalysis> {
    let kind: AnalysisKind = analysis.parse()?;
    let value = dnakit_seq::run(kind, seq, options)?;
    Ok(JsAnalysis {
        analysis: kind.name(),
        title: kind.title(),
        text: value.to_string(),
        value,
    })
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Run the analysis named `analysis` (`transcribe`, `complement`,
/// `reverseComplement`, `translate`, `translateReadingFrame`,
/// `restrictionSites`, `restrictionSitePositions`, `orf`, `sixFrame`,
/// `gcContent`, `nucleotideFreq`, `meltingTemp`, `annealingTemp`,
/// `analyzeAll`).
///
/// `frame` of `0` means the default frame 1; an empty `primer` means none.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn analyze(seq: &str, analysis: &str, frame: usize, primer: &str) -> String {
    let options = AnalysisOptions {
        frame: (frame != 0).then_some(frame),
        primer: (!primer.trim().is_empty()).then(|| primer.to_string()),
        enzymes: None,
    };
    wasm_result(run_named(seq, analysis, &options))
}

/// Names accepted by [`analyze`], in selector order.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn analysis_types() -> String {
    let names: Vec<&str> = AnalysisKind::ALL.iter().map(|k| k.name()).collect();
    crate::error::wasm_ok(&names)
}
