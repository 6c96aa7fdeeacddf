//! Indexed FASTA reference access using noodles.
//!
//! Requires a samtools-style `.fai` index next to the FASTA (`ref.fa.fai`).
//! Only uncompressed FASTA is supported.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use noodles::core::Region;
use noodles::fasta;
use tracing::debug;

use crate::core::reference::{check_range, ReferenceAccessor, ReferenceError};
use crate::parsing::ParseError;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Path of the `.fai` index belonging to a FASTA file
#[must_use]
pub fn index_path(path: &Path) -> PathBuf {
    let mut index = path.as_os_str().to_owned();
    index.push(".fai");
    PathBuf::from(index)
}

/// Random access to an indexed FASTA file.
///
/// Reads go through a single reader guarded by a mutex, so one handle can serve
/// concurrent extraction threads.
pub struct FastaReference {
    path: PathBuf,
    lengths: HashMap<String, u64>,
    reader: Mutex<fasta::io::IndexedReader<BufReader<File>>>,
}

impl FastaReference {
    /// Open a FASTA file and its `.fai` index
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if either file cannot be opened, `ParseError::Noodles` if
    /// the index cannot be parsed, or `ParseError::InvalidFormat` if the index is empty.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        if !is_fasta_file(path) {
            debug!("{} has no FASTA extension, reading it anyway", path.display());
        }

        let fai_path = index_path(path);
        if !fai_path.exists() {
            return Err(ParseError::InvalidFormat(format!(
                "FASTA index not found: {}. Run 'samtools faidx {}' to create it.",
                fai_path.display(),
                path.display()
            )));
        }

        let index = File::open(&fai_path)
            .map(BufReader::new)
            .map(fasta::fai::io::Reader::new)?
            .read_index()
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FAI file: {e}")))?;

        let lengths: HashMap<String, u64> = index
            .as_ref()
            .iter()
            .map(|record| {
                (
                    String::from_utf8_lossy(record.name()).to_string(),
                    record.length(),
                )
            })
            .collect();

        if lengths.is_empty() {
            return Err(ParseError::InvalidFormat(
                "No contigs found in FAI file".to_string(),
            ));
        }

        debug!(
            "Opened {} with {} indexed contigs",
            path.display(),
            lengths.len()
        );

        let inner = File::open(path).map(BufReader::new)?;
        let reader = fasta::io::IndexedReader::new(inner, index);

        Ok(Self {
            path: path.to_path_buf(),
            lengths,
            reader: Mutex::new(reader),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a chromosome name against the index: as given, with a `chr` prefix
    /// added, then with it removed.
    fn resolve_name(&self, chromosome: &str) -> Option<(&str, u64)> {
        let candidates = [
            chromosome.to_string(),
            format!("chr{chromosome}"),
            chromosome
                .strip_prefix("chr")
                .unwrap_or(chromosome)
                .to_string(),
        ];

        candidates.iter().find_map(|name| {
            self.lengths
                .get_key_value(name.as_str())
                .map(|(k, v)| (k.as_str(), *v))
        })
    }
}

impl ReferenceAccessor for FastaReference {
    fn fetch(&self, chromosome: &str, start: u64, end: u64) -> Result<String, ReferenceError> {
        let (name, length) = self
            .resolve_name(chromosome)
            .ok_or_else(|| ReferenceError::UnknownChromosome(chromosome.to_string()))?;

        check_range(chromosome, start, end, length)?;

        let region: Region = format!("{name}:{start}-{end}")
            .parse()
            .map_err(|e| ReferenceError::Noodles(format!("Invalid region: {e}")))?;

        let record = self
            .reader
            .lock()
            .map_err(|_| ReferenceError::Noodles("FASTA reader lock poisoned".to_string()))?
            .query(&region)?;

        Ok(String::from_utf8_lossy(record.sequence().as_ref()).to_ascii_uppercase())
    }
}
