//! Sequence source and result sink for the `dnakit` command.
//!
//! Loads a sequence from the command line or a FASTA/plain text file, runs
//! one analysis through [`dnakit_seq::run`], and prints the result or saves
//! it as a result document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dnakit_core::Summarizable;
use dnakit_seq::{AnalysisKind, AnalysisOptions, AnalysisOutput};
use tracing::{debug, info};

/// Where the sequence comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Text typed on the command line.
    Inline(String),
    /// A FASTA or plain sequence file.
    File(PathBuf),
}

impl Source {
    /// Pick the source from the two mutually exclusive arguments.
    pub fn from_args(sequence: Option<String>, input: Option<PathBuf>) -> Result<Self> {
        match (sequence, input) {
            (Some(seq), None) => Ok(Source::Inline(seq)),
            (None, Some(path)) => Ok(Source::File(path)),
            (Some(_), Some(_)) => bail!("--sequence and --input cannot be used together"),
            (None, None) => bail!("no sequence entered: pass --sequence or --input"),
        }
    }
}

/// Read the raw sequence text. File contents go through FASTA extraction.
pub fn load_sequence(source: &Source) -> Result<String> {
    match source {
        Source::Inline(seq) => Ok(seq.clone()),
        Source::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let record = dnakit_seq::extract_sequence(&text)
                .with_context(|| format!("no usable sequence in {}", path.display()))?;
            info!(
                path = %path.display(),
                id = %record.id,
                "loaded {}",
                record.sequence.summary()
            );
            Ok(record.sequence.to_string())
        }
    }
}

/// Render an output for the terminal, wrapping plain sequences at `wrap`
/// characters per line.
pub fn render(output: &AnalysisOutput, wrap: Option<usize>) -> String {
    let text = output.to_string();
    match (output, wrap) {
        (
            AnalysisOutput::Rna(_) | AnalysisOutput::Dna(_) | AnalysisOutput::Protein(_),
            Some(width),
        ) => dnakit_wasm::wrap_sequence(&text, width),
        _ => text,
    }
}

/// Run `kind` on `raw` and return the rendered result.
pub fn execute(
    kind: AnalysisKind,
    raw: &str,
    options: &AnalysisOptions,
    wrap: Option<usize>,
) -> Result<String> {
    debug!(analysis = %kind, input_len = raw.len(), "running analysis");
    let output = dnakit_seq::run(kind, raw, options)?;
    Ok(render(&output, wrap))
}

/// Run `kind` and return the JSON envelope the browser boundary produces,
/// plus whether the envelope holds a result rather than an error.
pub fn execute_json(kind: AnalysisKind, raw: &str, options: &AnalysisOptions) -> (String, bool) {
    let result = dnakit_wasm::run_named(raw, kind.name(), options);
    let succeeded = result.is_ok();
    (dnakit_wasm::error::wasm_result(result), succeeded)
}

/// Save `result` as a result document at `path`.
pub fn write_result(path: &Path, kind: AnalysisKind, result: &str) -> Result<()> {
    let document = dnakit_wasm::result_document(kind, result)?;
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), analysis = %kind, "result saved");
    Ok(())
}
