use serde::{Deserialize, Serialize};

/// A resolved point, short substitution, insertion, deletion or delins at a genomic position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SomaticVariantEvent {
    pub gene: String,
    pub chromosome: String,
    /// 1-based position of the first reference base (the anchor base for indels)
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl SomaticVariantEvent {
    pub fn new(
        gene: impl Into<String>,
        chromosome: impl Into<String>,
        position: u64,
        ref_allele: impl Into<String>,
        alt_allele: impl Into<String>,
    ) -> Self {
        Self {
            gene: gene.into(),
            chromosome: chromosome.into(),
            position,
            ref_allele: ref_allele.into(),
            alt_allele: alt_allele.into(),
        }
    }
}

/// A region the annotation tool could localize but not resolve to a precise edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomicRangeEvent {
    pub gene: String,
    pub transcript: String,
    pub chromosome: String,
    pub start_position: u64,
    pub end_position: u64,
}

impl GenomicRangeEvent {
    pub fn new(
        gene: impl Into<String>,
        transcript: impl Into<String>,
        chromosome: impl Into<String>,
        start_position: u64,
        end_position: u64,
    ) -> Self {
        Self {
            gene: gene.into(),
            transcript: transcript.into(),
            chromosome: chromosome.into(),
            start_position,
            end_position,
        }
    }
}

/// Event handed to knowledge-base matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionableEvent {
    SomaticVariant(SomaticVariantEvent),
    GenomicRange(GenomicRangeEvent),
}

impl ActionableEvent {
    #[must_use]
    pub fn gene(&self) -> &str {
        match self {
            Self::SomaticVariant(v) => &v.gene,
            Self::GenomicRange(r) => &r.gene,
        }
    }

    #[must_use]
    pub fn chromosome(&self) -> &str {
        match self {
            Self::SomaticVariant(v) => &v.chromosome,
            Self::GenomicRange(r) => &r.chromosome,
        }
    }

    #[must_use]
    pub fn as_somatic_variant(&self) -> Option<&SomaticVariantEvent> {
        match self {
            Self::SomaticVariant(v) => Some(v),
            Self::GenomicRange(_) => None,
        }
    }

    #[must_use]
    pub fn as_genomic_range(&self) -> Option<&GenomicRangeEvent> {
        match self {
            Self::SomaticVariant(_) => None,
            Self::GenomicRange(r) => Some(r),
        }
    }
}

impl From<SomaticVariantEvent> for ActionableEvent {
    fn from(event: SomaticVariantEvent) -> Self {
        Self::SomaticVariant(event)
    }
}

impl From<GenomicRangeEvent> for ActionableEvent {
    fn from(event: GenomicRangeEvent) -> Self {
        Self::GenomicRange(event)
    }
}

impl std::fmt::Display for ActionableEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SomaticVariant(v) => write!(
                f,
                "{} {}:{} {}>{}",
                v.gene, v.chromosome, v.position, v.ref_allele, v.alt_allele
            ),
            Self::GenomicRange(r) => write!(
                f,
                "{} ({}) {}:{}-{}",
                r.gene, r.transcript, r.chromosome, r.start_position, r.end_position
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_accessors() {
        let snv: ActionableEvent = SomaticVariantEvent::new("BRAF", "7", 140_453_136, "A", "T").into();
        let range: ActionableEvent =
            GenomicRangeEvent::new("EGFR", "ENST00000275493", "7", 55_242_464, 55_242_478).into();

        assert_eq!(snv.gene(), "BRAF");
        assert_eq!(snv.chromosome(), "7");
        assert!(snv.as_genomic_range().is_none());
        assert_eq!(range.gene(), "EGFR");
        assert_eq!(
            range.as_genomic_range().map(|r| r.transcript.as_str()),
            Some("ENST00000275493")
        );
    }

    #[test]
    fn test_display() {
        let snv: ActionableEvent = SomaticVariantEvent::new("BRAF", "7", 140_453_136, "A", "T").into();
        assert_eq!(snv.to_string(), "BRAF 7:140453136 A>T");
    }

    #[test]
    fn test_json_is_tagged() {
        let snv: ActionableEvent = SomaticVariantEvent::new("KIT", "4", 55_599_321, "A", "T").into();
        let json = serde_json::to_value(&snv).unwrap();
        assert_eq!(json["type"], "somatic_variant");
        assert_eq!(json["ref_allele"], "A");
    }
}
