use std::fs;
use std::io::Write;
use std::process::Command;

use dnakit_cli::{execute, load_sequence, write_result, Source};
use dnakit_seq::{AnalysisKind, AnalysisOptions};

fn fasta_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_fasta_file() {
    let file = fasta_file(">demo sample\nATGAAA\ntag\n");
    let raw = load_sequence(&Source::File(file.path().to_path_buf())).unwrap();
    assert_eq!(raw, "ATGAAATAG");

    let out = execute(AnalysisKind::Orf, &raw, &AnalysisOptions::default(), None).unwrap();
    assert_eq!(out, "1-9: ATGAAATAG");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.fa");
    let err = load_sequence(&Source::File(path.clone())).unwrap_err();
    assert!(err.to_string().contains("absent.fa"));
}

#[test]
fn header_only_file_is_rejected() {
    let file = fasta_file(">nothing here\n");
    assert!(load_sequence(&Source::File(file.path().to_path_buf())).is_err());
}

#[test]
fn saved_document_has_banner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    write_result(&path, AnalysisKind::GcContent, "50.00%").unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = saved.lines().collect();
    assert_eq!(lines[0], "DNA Sequence Analysis Result");
    assert!(lines[1].chars().all(|c| c == '='));
    assert_eq!(lines[2], "Analysis: GC Content");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "50.00%");
}

#[test]
fn blank_result_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    assert!(write_result(&path, AnalysisKind::Orf, "").is_err());
    assert!(!path.exists());
}

#[test]
fn binary_prints_result() {
    let out = Command::new(env!("CARGO_BIN_EXE_dnakit"))
        .args(["reverseComplement", "--sequence", "atgc"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "GCAT");
}

#[test]
fn binary_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fa");
    let output = dir.path().join("out.txt");
    fs::write(&input, ">x\nGAATTCGGATCC\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_dnakit"))
        .arg("restrictionSites")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let saved = fs::read_to_string(&output).unwrap();
    assert!(saved.ends_with("EcoRI: 1, HindIII: 0, BamHI: 1\n"));
}

#[test]
fn binary_fails_on_invalid_sequence() {
    let out = Command::new(env!("CARGO_BIN_EXE_dnakit"))
        .args(["transcribe", "--sequence", "ATXG"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn binary_json_mode() {
    let out = Command::new(env!("CARGO_BIN_EXE_dnakit"))
        .args(["gcContent", "--sequence", "ATGC", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(r#""text":"50.00%""#));
}

#[test]
fn binary_json_mode_fails_on_invalid_sequence() {
    let out = Command::new(env!("CARGO_BIN_EXE_dnakit"))
        .args(["gcContent", "--sequence", "ATXG", "--json"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with(r#"{"error":"invalid input"#));
}

#[test]
fn binary_common_enzyme_table() {
    let out = Command::new(env!("CARGO_BIN_EXE_dnakit"))
        .args([
            "restrictionSitePositions",
            "--sequence",
            "GCGGCCGCAAGATATC",
            "--enzymes",
            "common",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("NotI at 1"));
    assert!(stdout.contains("EcoRV at 11"));
}
