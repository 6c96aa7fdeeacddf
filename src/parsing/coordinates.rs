//! Chromosome and candidate-fragment resolution for annotation-tool output.

use tracing::warn;

use crate::core::record::AnnotationRecord;
use crate::utils::text::{substring_after, substring_after_or_empty, substring_before};

pub const CHROMOSOME_MARKER: &str = "chr";
pub const CHROMOSOME_DELIMITER: &str = ":";
pub const GDNA_MARKER: &str = "g.";

pub const CANDIDATE_SNV_PREFIX: &str = "candidate_snv_variants=";
pub const CANDIDATE_MNV_PREFIX: &str = "candidate_mnv_variants=";
pub const CANDIDATES_PREFIX: &str = "candidates=";
pub const LEFT_ALIGNED_GDNA_PREFIX: &str = "left_align_gDNA=";

const INFO_DELIMITER: &str = ";";
const VARIANT_DELIMITER: char = ',';
const CANDIDATE_FIELD_DELIMITER: char = '/';
const CANDIDATE_GDNA_FIELD: usize = 2;

/// Extract the chromosome between the `chr` marker and the next `:`.
///
/// Returns an empty string if the input has no `chr` marker.
///
/// ```
/// use gdna_extract::parsing::coordinates::extract_chromosome;
///
/// assert_eq!(extract_chromosome("chr7:g.140453136A>T"), "7");
/// assert_eq!(extract_chromosome("././."), "");
/// ```
#[must_use]
pub fn extract_chromosome(coordinates: &str) -> &str {
    substring_before(
        substring_after_or_empty(coordinates, CHROMOSOME_MARKER),
        CHROMOSOME_DELIMITER,
    )
}

/// Comma-delimited tokens listed after `prefix` in the info string, up to the next `;`.
///
/// Tokens are trimmed and empty tokens dropped; an absent prefix yields no tokens.
#[must_use]
pub fn info_variants_after<'a>(info: &'a str, prefix: &str) -> Vec<&'a str> {
    substring_before(substring_after_or_empty(info, prefix), INFO_DELIMITER)
        .split(VARIANT_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// gDNA-bearing field of a `candidates=` token (`transcript/cDNA/gDNA/...`).
#[must_use]
pub fn candidate_gdna(token: &str) -> Option<&str> {
    token
        .split(CANDIDATE_FIELD_DELIMITER)
        .nth(CANDIDATE_GDNA_FIELD)
        .map(str::trim)
        .filter(|field| !field.is_empty())
}

/// All auxiliary candidate fragments, in `snv ++ mnv ++ candidates` order, reduced to the
/// notation after their `g.` marker.
#[must_use]
pub fn candidate_fragments(info: &str) -> Vec<&str> {
    let snvs = info_variants_after(info, CANDIDATE_SNV_PREFIX);
    let mnvs = info_variants_after(info, CANDIDATE_MNV_PREFIX);
    let indels = info_variants_after(info, CANDIDATES_PREFIX)
        .into_iter()
        .filter_map(|token| {
            let gdna = candidate_gdna(token);
            if gdna.is_none() {
                warn!("Candidate '{token}' has no gDNA component, skipping");
            }
            gdna
        });

    snvs.into_iter()
        .chain(mnvs)
        .chain(indels)
        .map(|token| substring_after(token, GDNA_MARKER))
        .collect()
}

/// The primary gDNA fragment of a record.
///
/// A left-aligned representation in the info field takes precedence over the
/// coordinate field.
#[must_use]
pub fn primary_fragment(record: &AnnotationRecord) -> &str {
    if record.info.contains(LEFT_ALIGNED_GDNA_PREFIX) {
        let left_aligned = substring_after(&record.info, LEFT_ALIGNED_GDNA_PREFIX);
        substring_before(
            substring_after_or_empty(left_aligned, GDNA_MARKER),
            INFO_DELIMITER,
        )
    } else {
        substring_before(
            substring_after_or_empty(&record.coordinates, GDNA_MARKER),
            "/",
        )
    }
}
