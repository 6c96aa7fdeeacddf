//! Position extraction and allele reconstruction for classified gDNA fragments.
//!
//! Insertions, deletions and duplications are re-expressed VCF-style around an anchor
//! base fetched from the reference, so ref and alt always share their first base.

use tracing::{debug, warn};

use crate::core::record::GDnaOperation;
use crate::core::reference::ReferenceAccessor;
use crate::extraction::classify::OperationKind;
use crate::extraction::{ExtractError, ExtractionConfig};
use crate::parsing::coordinates::GDNA_MARKER;
use crate::utils::text::{first_digit_run, is_digits, substring_after, substring_before};

/// Allele-level result of reconstructing one fragment, before gene context is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruction {
    Variant {
        position: u64,
        ref_allele: String,
        alt_allele: String,
    },
    Range {
        start: u64,
        end: u64,
    },
}

/// Extract `START` and optional `END` from a `START[_END]...` fragment.
///
/// The first run of digits is the start; an `_` directly after it followed by digits
/// gives the end. Anything after that is ignored.
///
/// # Errors
///
/// Returns `ExtractError::MissingPosition` if the fragment has no digits, or
/// `ExtractError::InvalidPosition` if the start does not fit in a `u64`.
pub fn extract_positions(fragment: &str) -> Result<(u64, Option<u64>), ExtractError> {
    let fragment = substring_after(fragment, GDNA_MARKER);
    let (start, rest) = first_digit_run(fragment)
        .ok_or_else(|| ExtractError::MissingPosition(fragment.to_string()))?;

    let start = start
        .parse::<u64>()
        .map_err(|e| ExtractError::InvalidPosition(format!("{fragment}: {e}")))?;

    let end = rest.strip_prefix('_').and_then(|after| {
        let len = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        after[..len].parse::<u64>().ok()
    });

    Ok((start, end))
}

/// Reconstruct the alleles of a classified fragment.
///
/// `Ok(None)` means the fragment was deliberately skipped (ambiguous inserted base,
/// count deletion above the configured cap).
///
/// # Errors
///
/// Returns an `ExtractError` if the notation is malformed, the reference lookup fails,
/// or an allele would be empty.
pub fn reconstruct<R: ReferenceAccessor + ?Sized>(
    kind: OperationKind,
    operation: &GDnaOperation<'_>,
    reference: &R,
    config: &ExtractionConfig,
) -> Result<Option<Reconstruction>, ExtractError> {
    match kind {
        OperationKind::Substitution => substitution(operation).map(Some),
        OperationKind::Delins => delins(operation, reference).map(Some),
        OperationKind::Insertion => insertion(operation, reference),
        OperationKind::Duplication => duplication(operation, reference).map(Some),
        OperationKind::Deletion => deletion(operation, reference, config),
        OperationKind::Range => range(operation).map(Some),
        OperationKind::Unrecognized => Err(ExtractError::MalformedNotation(format!(
            "{}: unrecognized operation",
            operation.raw
        ))),
    }
}

fn variant(
    operation: &GDnaOperation<'_>,
    position: u64,
    ref_allele: String,
    alt_allele: String,
) -> Result<Reconstruction, ExtractError> {
    if ref_allele.is_empty() || alt_allele.is_empty() {
        return Err(ExtractError::EmptyAllele(operation.raw.to_string()));
    }
    Ok(Reconstruction::Variant {
        position,
        ref_allele,
        alt_allele,
    })
}

fn anchor(operation: &GDnaOperation<'_>) -> Result<u64, ExtractError> {
    operation
        .start
        .checked_sub(1)
        .ok_or_else(|| {
            ExtractError::InvalidPosition(format!("{}: no anchor base", operation.raw))
        })
}

fn fetch_base<R: ReferenceAccessor + ?Sized>(
    reference: &R,
    operation: &GDnaOperation<'_>,
    position: u64,
) -> Result<String, ExtractError> {
    Ok(reference.fetch(operation.chromosome, position, position)?)
}

/// `133738357T>C`
fn substitution(operation: &GDnaOperation<'_>) -> Result<Reconstruction, ExtractError> {
    let raw = operation.raw;
    let ref_base = substring_before(raw, ">")
        .chars()
        .last()
        .ok_or_else(|| ExtractError::MalformedNotation(format!("{raw}: no reference base")))?;
    let alt_base = substring_after(raw, ">")
        .chars()
        .next()
        .ok_or_else(|| ExtractError::MalformedNotation(format!("{raw}: no alternate base")))?;

    variant(
        operation,
        operation.start,
        ref_base.to_string(),
        alt_base.to_string(),
    )
}

/// `105239404_105239405delinsGC` or `133748289_133748290delTCinsGT`
fn delins<R: ReferenceAccessor + ?Sized>(
    operation: &GDnaOperation<'_>,
    reference: &R,
) -> Result<Reconstruction, ExtractError> {
    let raw = operation.raw;
    let (ref_allele, alt_allele) = if raw.contains("delins") {
        let end = operation.end.unwrap_or(operation.start);
        let ref_allele = reference.fetch(operation.chromosome, operation.start, end)?;
        (ref_allele, substring_after(raw, "delins").to_string())
    } else {
        let ref_allele = substring_before(substring_after(raw, "del"), "ins");
        (ref_allele.to_string(), substring_after(raw, "ins").to_string())
    };

    variant(operation, operation.start, ref_allele, alt_allele)
}

/// `32930598_32930599insC`
fn insertion<R: ReferenceAccessor + ?Sized>(
    operation: &GDnaOperation<'_>,
    reference: &R,
) -> Result<Option<Reconstruction>, ExtractError> {
    let ref_allele = fetch_base(reference, operation, operation.start)?;
    let alt_allele = format!("{ref_allele}{}", substring_after(operation.raw, "ins"));

    if alt_allele.contains('N') {
        debug!(
            "Skipping insertion with ambiguous bases {}: {}",
            operation.chromosome, operation.raw
        );
        return Ok(None);
    }

    variant(operation, operation.start, ref_allele, alt_allele).map(Some)
}

/// `41201160dupA`, re-expressed as an insertion after the preceding base
fn duplication<R: ReferenceAccessor + ?Sized>(
    operation: &GDnaOperation<'_>,
    reference: &R,
) -> Result<Reconstruction, ExtractError> {
    let duplicated = substring_after(operation.raw, "dup");
    if duplicated.is_empty() {
        return Err(ExtractError::EmptyAllele(operation.raw.to_string()));
    }

    let position = anchor(operation)?;
    let ref_allele = fetch_base(reference, operation, position)?;
    let alt_allele = format!("{ref_allele}{duplicated}");

    variant(operation, position, ref_allele, alt_allele)
}

/// `55152094_55152105delCATCATGCATGA` or `55152095_55152106del12`
///
/// The length cap only applies to the count form; literal base strings are taken as-is.
fn deletion<R: ReferenceAccessor + ?Sized>(
    operation: &GDnaOperation<'_>,
    reference: &R,
    config: &ExtractionConfig,
) -> Result<Option<Reconstruction>, ExtractError> {
    let raw = operation.raw;
    let position = anchor(operation)?;
    let deleted = substring_after(raw, "del");

    if deleted.is_empty() {
        return Err(ExtractError::MalformedNotation(format!(
            "{raw}: no deleted bases or count"
        )));
    }

    let (ref_allele, alt_allele) = if is_digits(deleted) {
        // An unparseable count is far past any cap
        let count = deleted.parse::<u64>().unwrap_or(u64::MAX);
        if count > config.max_count_deletion_length {
            warn!(
                "Skipping deletion of more than {} bases for variant {}: {raw}",
                config.max_count_deletion_length, operation.chromosome
            );
            return Ok(None);
        }

        let end = position.saturating_add(count);
        let ref_allele = reference.fetch(operation.chromosome, position, end)?;
        let alt_allele = ref_allele.chars().next().map(String::from).unwrap_or_default();
        (ref_allele, alt_allele)
    } else {
        let anchor_base = fetch_base(reference, operation, position)?;
        (format!("{anchor_base}{deleted}"), anchor_base)
    };

    variant(operation, position, ref_allele, alt_allele).map(Some)
}

/// `55242464_55242478`
fn range(operation: &GDnaOperation<'_>) -> Result<Reconstruction, ExtractError> {
    let end = operation.end.ok_or_else(|| {
        ExtractError::MalformedNotation(format!("{}: range without end", operation.raw))
    })?;

    Ok(Reconstruction::Range {
        start: operation.start,
        end,
    })
}
