//! # gdna-extract
//!
//! A library for turning compact gDNA notation from variant annotation tools into
//! position-resolved variant records.
//!
//! Annotation tools report genomic edits tersely: `133738357T>C`, `41201160dupA`,
//! `55152095_55152106del12`. Many of these forms leave out the reference bases, so they
//! cannot be matched against a knowledge base as-is.
//!
//! `gdna-extract` classifies each notation, extracts its positions, and rebuilds the
//! reference and alternate alleles, fetching elided bases from a reference genome.
//!
//! ## Features
//!
//! - **Ordered classification**: substitution, delins, insertion, duplication, deletion
//!   and bare position ranges
//! - **Anchor-based reconstruction**: indels are reported on the preceding reference base
//! - **Left-aligned preference**: a left-aligned representation in the info field wins
//!   over the coordinate field
//! - **Candidate fusion**: alternative SNV, MNV and indel representations are extracted too
//! - **Fault isolation**: a malformed fragment is logged and skipped, never fatal
//!
//! ## Example
//!
//! ```rust
//! use gdna_extract::{extract_variants, ActionableEvent, AnnotationRecord, InMemoryReference};
//!
//! // Bases 1-4 of chromosome 17
//! let reference = InMemoryReference::new().with_sequence("17", "ACGT");
//! let record = AnnotationRecord::new("chr17:g.3dupT/c.1dupT/p.X1fs", "CSQ=Frameshift");
//!
//! let events = extract_variants("BRCA1", "ENST00000357654", &record, &reference);
//! match &events[0] {
//!     ActionableEvent::SomaticVariant(v) => {
//!         assert_eq!((v.position, v.ref_allele.as_str(), v.alt_allele.as_str()), (2, "C", "CT"));
//!     }
//!     ActionableEvent::GenomicRange(_) => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, events and the reference accessor trait
//! - [`parsing`]: Coordinate resolution, annotation output and FASTA readers
//! - [`extraction`]: Classification, reconstruction and the extraction engine
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod extraction;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::AnnotationRecord;
pub use crate::core::reference::{InMemoryReference, ReferenceAccessor, ReferenceError};
pub use crate::core::types::*;
pub use crate::extraction::{
    extract_variant, extract_variants, ExtractError, ExtractionConfig, ExtractionEngine,
    OperationKind,
};
pub use crate::parsing::fasta::FastaReference;
