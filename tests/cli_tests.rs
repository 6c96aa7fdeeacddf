//! End-to-end tests for the gdna-extract binary
//!
//! Each test writes a small indexed FASTA and annotation output to a temporary
//! directory and runs the binary against them.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Chromosome 7 is 60 bases of repeated ACGT, so base n is "ACGT"[(n - 1) % 4]
fn write_reference(dir: &Path) -> PathBuf {
    let path = dir.join("ref.fa");
    fs::write(&path, format!(">7\n{}\n", "ACGT".repeat(15))).unwrap();
    fs::write(dir.join("ref.fa.fai"), "7\t60\t3\t60\t61\n").unwrap();
    path
}

const ANNOTATIONS: &str = "input\ttranscript\tgene\tstrand\tcoordinates(gDNA/cDNA/protein)\tregion\tinfo
BRAF:p.V600E\tENST00000288602 (protein_coding)\tBRAF\t-\tchr7:g.10C>T/c.1799T>A/p.V600E\tinside_[cds_in_exon_15]\tCSQ=MissenseSNV
BRCA1:c.1dupT\tENST00000357654 (protein_coding)\tBRCA1\t-\tchr7:g.21dupA/c.1dupT/p.X1fs\tinside_[cds_in_exon_2]\tCSQ=Frameshift
NOPE:p.X1Y\t.\t.\t.\t././.\t.\tno_valid_transcript_found
EGFR:c.1_25del\tENST00000275493 (protein_coding)\tEGFR\t+\tchr7:g.31_55del25/c.1_25del/.\tinside_[cds_in_exon_19]\tCSQ=InFrameDeletion
EGFR:c.1_2\tENST00000275493 (protein_coding)\tEGFR\t+\tchr7:g.41_42/c.1_2/.\tinside_[cds_in_exon_19]\t.
";

fn gdna_extract() -> Command {
    Command::cargo_bin("gdna-extract").unwrap()
}

#[test]
fn test_extract_text_output() {
    let dir = TempDir::new().unwrap();
    let reference = write_reference(dir.path());
    let input = dir.path().join("annotations.tsv");
    fs::write(&input, ANNOTATIONS).unwrap();

    gdna_extract()
        .arg("extract")
        .arg(&input)
        .arg("--reference")
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains("BRAF 7:10 C>T"))
        .stdout(predicate::str::contains("BRCA1 7:20 T>TA"))
        .stdout(predicate::str::contains("EGFR (ENST00000275493) 7:41-42"))
        .stdout(predicate::str::contains("31").not());
}

#[test]
fn test_extract_from_stdin_as_json() {
    let dir = TempDir::new().unwrap();
    let reference = write_reference(dir.path());

    let output = gdna_extract()
        .args(["--format", "json", "extract", "-", "--reference"])
        .arg(&reference)
        .write_stdin(ANNOTATIONS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["type"], "somatic_variant");
    assert_eq!(events[1]["position"], 20);
    assert_eq!(events[1]["alt_allele"], "TA");
    assert_eq!(events[2]["type"], "genomic_range");
}

#[test]
fn test_extract_respects_deletion_cap() {
    let dir = TempDir::new().unwrap();
    let reference = write_reference(dir.path());
    let input = dir.path().join("annotations.tsv");
    fs::write(&input, ANNOTATIONS).unwrap();

    gdna_extract()
        .args(["--format", "tsv", "extract"])
        .arg(&input)
        .arg("--reference")
        .arg(&reference)
        .args(["--max-deletion-length", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "somatic_variant\tEGFR\t.\t7\t30\t.\tCGTACGTACGTACGTACGTACGTACG\tC",
        ));
}

#[test]
fn test_variant_subcommand() {
    let dir = TempDir::new().unwrap();
    let reference = write_reference(dir.path());

    gdna_extract()
        .args(["variant", "chr7:g.5_6delinsTT", "--gene", "KIT", "--reference"])
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains("KIT 7:5 AC>TT"));
}

#[test]
fn test_missing_index_fails() {
    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("plain.fa");
    fs::write(&reference, ">7\nACGT\n").unwrap();

    gdna_extract()
        .args(["variant", "chr7:g.1A>T", "--reference"])
        .arg(&reference)
        .assert()
        .failure()
        .stderr(predicate::str::contains("samtools faidx"));
}

#[test]
fn test_malformed_annotation_row_fails() {
    let dir = TempDir::new().unwrap();
    let reference = write_reference(dir.path());
    let input = dir.path().join("annotations.tsv");
    fs::write(&input, "BRAF:p.V600E\tENST00000288602\tBRAF\n").unwrap();

    gdna_extract()
        .arg("extract")
        .arg(&input)
        .arg("--reference")
        .arg(&reference)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 1"));
}
