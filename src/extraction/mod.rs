//! gDNA notation classification, allele reconstruction and the extraction pipeline.
//!
//! - [`ExtractionEngine`]: Main entry point, turns annotation records into events
//! - [`classify`]: Operation kind from surface syntax
//! - [`reconstruct`]: Positions and ref/alt alleles per operation kind
//!
//! ## Pipeline
//!
//! For each record:
//!
//! 1. **Chromosome**: resolved once from the coordinate field; a record without one
//!    yields no events
//! 2. **Primary fragment**: the left-aligned gDNA from the info field if present,
//!    otherwise the gDNA part of the coordinate field
//! 3. **Candidates**: `candidate_snv_variants`, `candidate_mnv_variants` and
//!    `candidates` from the info field, in that order
//!
//! Every fragment is classified and reconstructed independently. A fragment that
//! cannot be reconstructed is logged and dropped without affecting the others. Events
//! are not deduplicated.
//!
//! ## Example
//!
//! ```rust
//! use gdna_extract::core::record::AnnotationRecord;
//! use gdna_extract::core::reference::InMemoryReference;
//! use gdna_extract::extraction::extract_variants;
//!
//! let reference = InMemoryReference::new().with_sequence("7", "ACGT");
//! let record = AnnotationRecord::new("chr7:g.3G>A/c.1799T>A/p.V600E", "CSQ=MissenseSNV");
//!
//! let events = extract_variants("BRAF", "ENST00000288602", &record, &reference);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].chromosome(), "7");
//! ```
//!
//! [`classify`]: classify::classify
//! [`reconstruct`]: reconstruct::reconstruct

use thiserror::Error;

use crate::core::reference::ReferenceError;

pub mod classify;
pub mod engine;
pub mod reconstruct;

pub use classify::OperationKind;
pub use engine::{extract_variant, extract_variants, ExtractionEngine};

/// Failure to reconstruct a single gDNA fragment
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No position found in '{0}'")]
    MissingPosition(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Malformed notation: {0}")]
    MalformedNotation(String),

    #[error("Empty allele reconstructed from '{0}'")]
    EmptyAllele(String),

    #[error("Reference lookup failed: {0}")]
    Reference(#[from] ReferenceError),
}

/// Longest count-style deletion (`del12`) that is reconstructed from the reference
pub const DEFAULT_MAX_COUNT_DELETION_LENGTH: u64 = 20;

/// Configuration for the extraction engine
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Count-style deletions longer than this are skipped
    pub max_count_deletion_length: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_count_deletion_length: DEFAULT_MAX_COUNT_DELETION_LENGTH,
        }
    }
}
