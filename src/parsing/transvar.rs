//! Reader for the annotation tool's tab-delimited output.
//!
//! Expected columns: `input, transcript, gene, strand, coordinates, region, info`.
//! Supports plain and gzip/bgzip compressed files.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Serialize};

use crate::core::record::AnnotationRecord;
use crate::parsing::ParseError;

const MIN_FIELDS: usize = 7;

/// One annotated row: who it is about, and the notation to extract from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransvarRecord {
    /// The query that was annotated, e.g. `BRAF:p.V600E`
    pub input: String,
    pub gene: String,
    /// Transcript identifier without its biotype annotation
    pub transcript: String,
    pub record: AnnotationRecord,
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse an annotation output file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if a row has fewer than 7 columns.
pub fn parse_transvar_file(path: &Path) -> Result<Vec<TransvarRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_transvar_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_transvar_reader(BufReader::new(file))
    }
}

/// Parse annotation output from any reader
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, or `ParseError::InvalidFormat` if a row
/// has fewer than 7 columns.
pub fn parse_transvar_reader<R: BufRead>(reader: R) -> Result<Vec<TransvarRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_transvar_line(&line, i + 1)? {
            records.push(record);
        }
    }

    Ok(records)
}

/// Parse annotation output held in memory
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row has fewer than 7 columns.
pub fn parse_transvar_text(text: &str) -> Result<Vec<TransvarRecord>, ParseError> {
    parse_transvar_reader(text.as_bytes())
}

/// Read a whole stream (e.g. stdin) of annotation output
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, or `ParseError::InvalidFormat` if a row
/// has fewer than 7 columns.
pub fn read_transvar<R: Read>(mut reader: R) -> Result<Vec<TransvarRecord>, ParseError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_transvar_text(&buffer)
}

fn parse_transvar_line(line: &str, line_num: usize) -> Result<Option<TransvarRecord>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields[0] == "input" {
        return Ok(None);
    }

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has {} fields, expected {MIN_FIELDS}",
            fields.len()
        )));
    }

    let transcript = fields[1].split_whitespace().next().unwrap_or_default();

    Ok(Some(TransvarRecord {
        input: fields[0].to_string(),
        gene: fields[2].trim().to_string(),
        transcript: transcript.to_string(),
        record: AnnotationRecord::new(fields[4].trim(), fields[6].trim()),
    }))
}
