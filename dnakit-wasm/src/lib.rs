//! Browser boundary for the dnakit sequence analysis engine.
//!
//! This crate provides in-memory, JSON-based wrappers around `dnakit-seq`,
//! designed for environments where file I/O is unavailable (browsers,
//! sandboxed workers). Every public function accepts simple types (`&str`,
//! `usize`) and returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! `#[wasm_bindgen]` exports are enabled by the `wasm` feature.
//!
//! # Modules
//!
//! - [`seq`] — one function per analysis, plus FASTA extraction
//! - [`analyze`] — dispatch by the analysis-type selector name
//! - [`export`] — saved-result document and sequence wrapping
//!
//! # Example
//!
//! ```
//! let json = dnakit_wasm::analyze("atgc", "reverseComplement", 0, "");
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"]["text"], "GCAT");
//! ```

pub mod analyze;
pub mod error;
pub mod export;
pub mod seq;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Re-exports ───────────────────────────────────────────────────────────

// seq
pub use seq::{
    analyze_all, annealing_temperature, annealing_temperature_single, complement, find_orfs,
    find_orfs_six_frame, gc_content, melting_temperature, nucleotide_frequency, parse_fasta,
    restriction_site_list, restriction_sites, reverse_complement, six_frame_translation,
    transcribe, translate, translate_frame, validate, JsAnnealing, JsFastaRecord, JsFramedOrf,
    JsFrameTranslation, JsTemperature,
};

// analyze
pub use analyze::{analysis_types, analyze, run_named, JsAnalysis};

// export
pub use export::{
    format_sequence, result_document, save_document, wrap_sequence, DEFAULT_LINE_WIDTH,
    RESULT_FILE_NAME,
};
