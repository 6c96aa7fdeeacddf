//! Parsers for annotation-tool output and reference sequence files.
//!
//! - **coordinates**: chromosome and candidate-fragment resolution from the
//!   `coordinates` and `info` fields of an annotation row
//! - **transvar**: tab-delimited annotation output (plain or gzipped)
//! - **fasta**: indexed FASTA access implementing [`ReferenceAccessor`]
//!
//! ## Info Fields
//!
//! The following `info` keys contribute gDNA fragments:
//!
//! | Key | Value | Used as |
//! |-----|-------|---------|
//! | `left_align_gDNA` | `g.` fragment | Primary fragment (preferred) |
//! | `candidate_snv_variants` | comma list of `chrN:g.` fragments | Candidates |
//! | `candidate_mnv_variants` | comma list of `chrN:g.` fragments | Candidates |
//! | `candidates` | comma list of `transcript/cDNA/gDNA/...` tuples | Candidates (3rd field) |
//!
//! [`ReferenceAccessor`]: crate::core::reference::ReferenceAccessor

use thiserror::Error;

pub mod coordinates;
pub mod fasta;
pub mod transvar;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
