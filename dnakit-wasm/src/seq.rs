//! Sequence operations for WASM environments.
//!
//! Each function takes the raw text of the sequence box (any case, with
//! whitespace) and returns the JSON envelope from [`crate::error`]. Invalid
//! input yields `{"error": "invalid input: ..."}` and nothing is computed.

use serde::{Deserialize, Serialize};

use dnakit_core::{Annotated, DnakitError, Result, Sequence};
use dnakit_seq::{
    find_orfs as engine_find_orfs, find_orfs_six_frame as engine_find_orfs_six_frame,
    enzyme_table, parse_enzyme_table, restriction_site_counts, restriction_site_positions,
    six_frame_translation as engine_six_frame, AnalysisReport, DnaSequence, FramedOrf,
    FrameTranslation, MeltingTemperature, NucleotideCounts, Orf, RestrictionEnzyme, SiteCount,
    SiteHit, TmMethod,
};

use crate::error::{wasm_err, wasm_ok, wasm_result};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Serializable reading-frame translation with a `+1`-style frame label.
#[derive(Debug, Serialize)]
pub struct JsFrameTranslation {
    pub frame: String,
    pub protein: String,
}

impl From<FrameTranslation> for JsFrameTranslation {
    fn from(t: FrameTranslation) -> Self {
        Self {
            frame: t.frame.to_string(),
            protein: t.protein.to_string(),
        }
    }
}

/// Serializable six-frame ORF.
#[derive(Debug, Serialize)]
pub struct JsFramedOrf {
    pub frame: String,
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub sequence: String,
    pub protein: String,
}

impl From<FramedOrf> for JsFramedOrf {
    fn from(o: FramedOrf) -> Self {
        Self {
            frame: o.frame.to_string(),
            start: o.start,
            end: o.end,
            length: o.end - o.start,
            sequence: o.sequence.to_string(),
            protein: o.protein.to_string(),
        }
    }
}

/// Serializable melting temperature with its rendered text.
#[derive(Debug, Serialize)]
pub struct JsTemperature {
    pub celsius: f64,
    pub method: &'static str,
    pub text: String,
}

impl From<MeltingTemperature> for JsTemperature {
    fn from(tm: MeltingTemperature) -> Self {
        Self {
            celsius: tm.celsius,
            method: match tm.method {
                TmMethod::Wallace => "wallace",
                TmMethod::SaltAdjusted => "salt_adjusted",
            },
            text: tm.to_string(),
        }
    }
}

/// Serializable primer/template annealing estimate.
#[derive(Debug, Serialize)]
pub struct JsAnnealing {
    pub primer_tm: JsTemperature,
    pub template_gc_content: f64,
    pub text: String,
}

/// Serializable FASTA extraction result.
#[derive(Debug, Serialize)]
pub struct JsFastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: String,
    pub length: usize,
}

/// One user-supplied restriction enzyme, as `{"name": ..., "site": ...}`.
#[derive(Debug, Deserialize)]
struct JsEnzyme {
    name: String,
    site: String,
}

/// Validate the sequence box the same way every operation does.
fn parse_dna(seq: &str) -> Result<DnaSequence> {
    if seq.trim().is_empty() {
        return Err(DnakitError::InvalidInput("no sequence entered".into()));
    }
    DnaSequence::new(seq)
}

/// Parse the enzyme argument: a JSON array of enzymes, or a table selector
/// (blank or `default`, `common`).
fn parse_enzymes(json: &str) -> Result<Vec<RestrictionEnzyme>> {
    if !json.trim_start().starts_with('[') {
        return enzyme_table(json);
    }
    let entries: Vec<JsEnzyme> = serde_json::from_str(json)
        .map_err(|e| DnakitError::InvalidInput(format!("invalid enzyme table: {e}")))?;
    parse_enzyme_table(entries.iter().map(|e| (e.name.as_str(), e.site.as_str())))
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Whether the text is an acceptable DNA sequence. Always succeeds.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn validate(seq: &str) -> String {
    wasm_ok(&dnakit_seq::validate(seq))
}

/// Transcribe DNA to RNA (`T` → `U`).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn transcribe(seq: &str) -> String {
    wasm_result(parse_dna(seq).map(|dna| dna.transcribe().to_string()))
}

/// Base-wise DNA complement.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn complement(seq: &str) -> String {
    wasm_result(parse_dna(seq).map(|dna| dna.complement().to_string()))
}

/// Reverse complement.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn reverse_complement(seq: &str) -> String {
    wasm_result(parse_dna(seq).map(|dna| dna.reverse_complement().to_string()))
}

/// Translate from the first base with the standard genetic code.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn translate(seq: &str) -> String {
    wasm_result(parse_dna(seq).map(|dna| dna.translate().to_string()))
}

/// Translate starting at reading frame 1, 2 or 3.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn translate_frame(seq: &str, frame: usize) -> String {
    let result = parse_dna(seq)
        .and_then(|dna| dna.translate_frame(frame))
        .map(|protein| protein.to_string());
    wasm_result(result)
}

/// Translation of all six reading frames, in order `+1 +2 +3 -1 -2 -3`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn six_frame_translation(seq: &str) -> String {
    let result = parse_dna(seq).map(|dna| {
        engine_six_frame(&dna)
            .into_iter()
            .map(JsFrameTranslation::from)
            .collect::<Vec<_>>()
    });
    wasm_result(result)
}

/// Count restriction sites per enzyme.
///
/// `enzymes_json` is a JSON array of `{"name", "site"}` objects, `common`
/// for the 20-enzyme catalogue, or empty for the default EcoRI/HindIII/BamHI
/// table.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn restriction_sites(seq: &str, enzymes_json: &str) -> String {
    let result: Result<Vec<SiteCount>> = (|| {
        let dna = parse_dna(seq)?;
        let enzymes = parse_enzymes(enzymes_json)?;
        Ok(restriction_site_counts(&dna, &enzymes))
    })();
    wasm_result(result)
}

/// List restriction sites with their 1-based positions.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn restriction_site_list(seq: &str, enzymes_json: &str) -> String {
    let result: Result<Vec<SiteHit>> = (|| {
        let dna = parse_dna(seq)?;
        let enzymes = parse_enzymes(enzymes_json)?;
        Ok(restriction_site_positions(&dna, &enzymes))
    })();
    wasm_result(result)
}

/// ORFs starting at every ATG, each running to the first in-frame stop.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn find_orfs(seq: &str) -> String {
    let result: Result<Vec<Orf>> = parse_dna(seq).map(|dna| engine_find_orfs(&dna));
    wasm_result(result)
}

/// ORFs in all six frames of at least `min_length` nucleotides.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn find_orfs_six_frame(seq: &str, min_length: usize) -> String {
    let result = parse_dna(seq).map(|dna| {
        engine_find_orfs_six_frame(&dna, min_length)
            .into_iter()
            .map(JsFramedOrf::from)
            .collect::<Vec<_>>()
    });
    wasm_result(result)
}

/// GC content as a percentage rounded to two decimals.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn gc_content(seq: &str) -> String {
    wasm_result(parse_dna(seq).map(|dna| dna.gc_content()))
}

/// Per-base counts as `{"A": .., "T": .., "G": .., "C": .., "N": ..}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn nucleotide_frequency(seq: &str) -> String {
    let result: Result<NucleotideCounts> = parse_dna(seq).map(|dna| dna.nucleotide_counts());
    wasm_result(result)
}

/// Melting temperature (Wallace rule below 14 bases, salt-adjusted above).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn melting_temperature(seq: &str) -> String {
    let result = parse_dna(seq).map(|dna| JsTemperature::from(dnakit_seq::melting_temperature(&dna)));
    wasm_result(result)
}

/// Primer Tm reported against the template's GC content.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn annealing_temperature(template: &str, primer: &str) -> String {
    let result: Result<JsAnnealing> = (|| {
        let template = parse_dna(template)?;
        let primer = parse_dna(primer)
            .map_err(|e| DnakitError::InvalidInput(format!("primer: {e}")))?;
        let at = dnakit_seq::annealing_temperature(&template, &primer);
        Ok(JsAnnealing {
            text: at.to_string(),
            primer_tm: at.primer_tm.into(),
            template_gc_content: at.template_gc_content,
        })
    })();
    wasm_result(result)
}

/// Single-sequence annealing estimate: the sequence's own Tm.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn annealing_temperature_single(seq: &str) -> String {
    let result = parse_dna(seq)
        .map(|dna| JsTemperature::from(dnakit_seq::annealing_temperature_single(&dna)));
    wasm_result(result)
}

/// Every analysis as an ordered `{label: value}` object.
///
/// `primer` may be empty, in which case the annealing entry is omitted.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn analyze_all(seq: &str, primer: &str) -> String {
    let result: Result<AnalysisReport> = (|| {
        let dna = parse_dna(seq)?;
        let primer = if primer.trim().is_empty() {
            None
        } else {
            Some(
                DnaSequence::new(primer)
                    .map_err(|e| DnakitError::InvalidInput(format!("primer: {e}")))?,
            )
        };
        Ok(AnalysisReport::build(&dna, primer.as_ref()))
    })();
    wasm_result(result)
}

/// Extract the sequence from uploaded FASTA (or plain) text.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn parse_fasta(data: &str) -> String {
    match dnakit_seq::extract_sequence(data) {
        Ok(rec) => wasm_ok(&JsFastaRecord {
            id: rec.name().to_string(),
            description: rec.description().map(str::to_string),
            length: rec.sequence.len(),
            sequence: rec.sequence.to_string(),
        }),
        Err(e) => wasm_err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(json: &str) -> serde_json::Value {
        let v: serde_json::Value = serde_json::from_str(json).unwrap();
        assert!(v.get("error").is_none(), "unexpected error: {json}");
        v["ok"].clone()
    }

    fn err(json: &str) -> String {
        let v: serde_json::Value = serde_json::from_str(json).unwrap();
        v["error"].as_str().expect("expected error").to_string()
    }

    #[test]
    fn validate_never_errors() {
        assert_eq!(ok(&validate("acgt")), true);
        assert_eq!(ok(&validate("ATXG")), false);
        assert_eq!(ok(&validate("")), false);
    }

    #[test]
    fn text_operations() {
        assert_eq!(ok(&transcribe("atgc")), "AUGC");
        assert_eq!(ok(&complement("ATGC")), "TACG");
        assert_eq!(ok(&reverse_complement("ATGC")), "GCAT");
        assert_eq!(ok(&translate("ATGTTTTAA")), "MF*");
        assert_eq!(ok(&translate_frame("AATGTTTTAA", 2)), "MF*");
    }

    #[test]
    fn invalid_sequence_is_error_everywhere() {
        let bad = "ATXG";
        for json in [
            transcribe(bad),
            complement(bad),
            reverse_complement(bad),
            translate(bad),
            translate_frame(bad, 1),
            six_frame_translation(bad),
            restriction_sites(bad, ""),
            restriction_site_list(bad, ""),
            find_orfs(bad),
            find_orfs_six_frame(bad, 0),
            gc_content(bad),
            nucleotide_frequency(bad),
            melting_temperature(bad),
            annealing_temperature(bad, "ATGC"),
            annealing_temperature_single(bad),
            analyze_all(bad, ""),
        ] {
            assert!(err(&json).starts_with("invalid input"), "{json}");
        }
    }

    #[test]
    fn blank_input_message() {
        assert_eq!(err(&transcribe("   ")), "invalid input: no sequence entered");
    }

    #[test]
    fn bad_frame() {
        assert!(err(&translate_frame("ATGC", 0)).contains("frame"));
    }

    #[test]
    fn six_frames_labelled() {
        let frames = ok(&six_frame_translation("ATGAAATAG"));
        let labels: Vec<&str> = frames
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["frame"].as_str().unwrap())
            .collect();
        assert_eq!(labels, ["+1", "+2", "+3", "-1", "-2", "-3"]);
        assert_eq!(frames[0]["protein"], "MK*");
    }

    #[test]
    fn restriction_default_and_custom_tables() {
        let counts = ok(&restriction_sites("GAATTCGAATTC", ""));
        assert_eq!(counts[0]["enzyme"], "EcoRI");
        assert_eq!(counts[0]["count"], 2);
        assert_eq!(counts.as_array().unwrap().len(), 3);

        let custom = ok(&restriction_sites(
            "GATCGATC",
            r#"[{"name": "DpnII", "site": "GATC"}]"#,
        ));
        assert_eq!(custom[0]["enzyme"], "DpnII");
        assert_eq!(custom[0]["count"], 2);

        let common = ok(&restriction_sites("GCGGCCGC", "common"));
        assert_eq!(common.as_array().unwrap().len(), 20);
        let not_i = common
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["enzyme"] == "NotI")
            .unwrap();
        assert_eq!(not_i["count"], 1);

        assert!(err(&restriction_sites("GATC", "{not json")).contains("enzyme table"));
        assert!(err(&restriction_sites("GATC", "[not json")).contains("enzyme table"));
        assert!(err(&restriction_sites("GATC", r#"[{"name": "X", "site": "GANTC"}]"#))
            .starts_with("invalid input"));
    }

    #[test]
    fn restriction_positions() {
        let hits = ok(&restriction_site_list("AAGCTTGAATTC", ""));
        assert_eq!(hits[0]["enzyme"], "EcoRI");
        assert_eq!(hits[0]["position"], 7);
        assert_eq!(hits[1]["enzyme"], "HindIII");
        assert_eq!(hits[1]["position"], 1);
    }

    #[test]
    fn orfs_json() {
        let orfs = ok(&find_orfs("CCATGAAATAG"));
        assert_eq!(orfs[0]["start"], 3);
        assert_eq!(orfs[0]["end"], 11);
        assert_eq!(orfs[0]["sequence"], "ATGAAATAG");

        let framed = ok(&find_orfs_six_frame("ATGAAATAG", 0));
        assert_eq!(framed[0]["frame"], "+1");
        assert_eq!(framed[0]["length"], 9);
        assert_eq!(framed[0]["protein"], "MK*");
    }

    #[test]
    fn composition_json() {
        assert!((ok(&gc_content("ATGC")).as_f64().unwrap() - 50.0).abs() < 1e-9);
        let freq = ok(&nucleotide_frequency("AATGC"));
        assert_eq!(freq["A"], 2);
        assert_eq!(freq["T"], 1);
        assert_eq!(freq["N"], 0);
    }

    #[test]
    fn temperatures_json() {
        let tm = ok(&melting_temperature("ATGC"));
        assert_eq!(tm["text"], "12.00°C");
        assert_eq!(tm["method"], "wallace");

        let long = ok(&melting_temperature("ATGCATGCATGCAT"));
        assert_eq!(long["method"], "salt_adjusted");

        let at = ok(&annealing_temperature("GGCC", "ATGCGT"));
        assert_eq!(at["text"], "Primer Tm: 18.00°C, GC Content: 100.00%");
        assert!(err(&annealing_temperature("GGCC", "ATGZ")).contains("primer"));

        assert_eq!(ok(&annealing_temperature_single("ATGC"))["text"], "12.00°C");
    }

    #[test]
    fn analyze_all_ordered_object() {
        let json = analyze_all("ATGAAATAG", "");
        assert!(json.find("Transcription (RNA)").unwrap() < json.find("GC Content").unwrap());
        let report = ok(&json);
        assert_eq!(report["Transcription (RNA)"], "AUGAAAUAG");
        assert_eq!(report["Restriction Sites"]["EcoRI"], 0);
        assert!(report.get("Annealing Temperature").is_none());

        let with_primer = ok(&analyze_all("ATGAAATAG", "ATGC"));
        assert_eq!(
            with_primer["Annealing Temperature"],
            "Primer Tm: 12.00°C, GC Content: 22.22%"
        );
    }

    #[test]
    fn fasta_json() {
        let rec = ok(&parse_fasta(">seq1 demo\nATCG\natcg\n"));
        assert_eq!(rec["id"], "seq1");
        assert_eq!(rec["description"], "demo");
        assert_eq!(rec["sequence"], "ATCGATCG");
        assert_eq!(rec["length"], 8);

        assert!(err(&parse_fasta(">only-header\n")).starts_with("parse error"));
    }
}
