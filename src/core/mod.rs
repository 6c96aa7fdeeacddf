//! Core data types for gDNA variant extraction.
//!
//! - [`AnnotationRecord`]: the coordinate and info fields of one annotation-tool output row
//! - [`GDnaOperation`]: a single gDNA fragment with its positions extracted
//! - [`ActionableEvent`]: the extraction output, either a [`SomaticVariantEvent`] or a
//!   [`GenomicRangeEvent`]
//! - [`ReferenceAccessor`]: 1-based inclusive access to reference bases
//!
//! ## Coordinates
//!
//! All positions are 1-based. Insertions, deletions and duplications are reported at
//! their anchor position, the reference base immediately left of the edit, so that both
//! alleles always carry at least one base:
//!
//! | Notation | Position | Ref | Alt |
//! |----------|----------|-----|-----|
//! | `133738357T>C` | 133738357 | T | C |
//! | `32930598_32930599insC` | 32930598 | base at 32930598 | ref + C |
//! | `55152095_55152106del12` | 55152094 | 13 bases from 55152094 | first ref base |
//!
//! [`AnnotationRecord`]: record::AnnotationRecord
//! [`GDnaOperation`]: record::GDnaOperation
//! [`ActionableEvent`]: types::ActionableEvent
//! [`SomaticVariantEvent`]: types::SomaticVariantEvent
//! [`GenomicRangeEvent`]: types::GenomicRangeEvent
//! [`ReferenceAccessor`]: reference::ReferenceAccessor

pub mod record;
pub mod reference;
pub mod types;
