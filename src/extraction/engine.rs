use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::record::{AnnotationRecord, GDnaOperation};
use crate::core::reference::ReferenceAccessor;
use crate::core::types::{ActionableEvent, GenomicRangeEvent, SomaticVariantEvent};
use crate::extraction::classify::{classify, OperationKind};
use crate::extraction::reconstruct::{extract_positions, reconstruct, Reconstruction};
use crate::extraction::{ExtractError, ExtractionConfig};
use crate::parsing::coordinates::{
    candidate_fragments, extract_chromosome, primary_fragment, GDNA_MARKER,
};
use crate::parsing::transvar::TransvarRecord;
use crate::utils::text::substring_after;

/// Extract all events from one annotation record using the default configuration.
///
/// Never fails: unusable records and fragments are logged and produce no events.
pub fn extract_variants<R: ReferenceAccessor + ?Sized>(
    gene: &str,
    transcript: &str,
    record: &AnnotationRecord,
    reference: &R,
) -> Vec<ActionableEvent> {
    ExtractionEngine::new(reference).extract_variants(gene, transcript, record)
}

/// Extract a single standalone fragment such as `chr7:g.140453136A>T`, taking the
/// chromosome from the fragment itself.
pub fn extract_variant<R: ReferenceAccessor + ?Sized>(
    gene: &str,
    transcript: &str,
    gdna_variant: &str,
    reference: &R,
) -> Option<ActionableEvent> {
    ExtractionEngine::new(reference).extract_variant(gene, transcript, gdna_variant)
}

/// The extraction pipeline, bound to a reference and a configuration
pub struct ExtractionEngine<'a, R: ?Sized> {
    reference: &'a R,
    config: ExtractionConfig,
}

impl<'a, R: ReferenceAccessor + ?Sized> ExtractionEngine<'a, R> {
    /// Create a new extraction engine with default configuration
    pub fn new(reference: &'a R) -> Self {
        Self {
            reference,
            config: ExtractionConfig::default(),
        }
    }

    /// Create a new extraction engine with custom configuration
    pub fn with_config(reference: &'a R, config: ExtractionConfig) -> Self {
        Self { reference, config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Primary fragment first, then candidates in info-field order.
    pub fn extract_variants(
        &self,
        gene: &str,
        transcript: &str,
        record: &AnnotationRecord,
    ) -> Vec<ActionableEvent> {
        let chromosome = extract_chromosome(&record.coordinates);
        if chromosome.is_empty() {
            warn!("could not extract chromosome from line: {record}. Skipping");
            return Vec::new();
        }

        let primary = primary_fragment(record);
        let candidates = candidate_fragments(&record.info);

        let events: Vec<ActionableEvent> = std::iter::once(primary)
            .chain(candidates)
            .filter_map(|fragment| self.extract_fragment(gene, transcript, chromosome, fragment))
            .collect();

        debug!(
            "{gene} {chromosome}: {} event(s) from {}",
            events.len(),
            record.coordinates
        );
        events
    }

    pub fn extract_variant(
        &self,
        gene: &str,
        transcript: &str,
        gdna_variant: &str,
    ) -> Option<ActionableEvent> {
        let chromosome = extract_chromosome(gdna_variant);
        if chromosome.is_empty() {
            warn!("could not extract chromosome from variant: {gdna_variant}. Skipping");
            return None;
        }

        let fragment = substring_after(gdna_variant, GDNA_MARKER);
        self.extract_fragment(gene, transcript, chromosome, fragment)
    }

    /// Classify and reconstruct one fragment on a known chromosome.
    ///
    /// Returns `None`, after logging, for unrecognized syntax, reconstruction failures
    /// and policy skips.
    pub fn extract_fragment(
        &self,
        gene: &str,
        transcript: &str,
        chromosome: &str,
        fragment: &str,
    ) -> Option<ActionableEvent> {
        let kind = classify(fragment);
        if kind == OperationKind::Unrecognized {
            warn!("variant {chromosome}: {fragment} could not be mapped to any known type");
            return None;
        }

        match self.try_extract(kind, gene, transcript, chromosome, fragment) {
            Ok(event) => event,
            Err(e) => {
                warn!("Could not create variant from {chromosome}: {fragment}; error: {e}");
                None
            }
        }
    }

    fn try_extract(
        &self,
        kind: OperationKind,
        gene: &str,
        transcript: &str,
        chromosome: &str,
        fragment: &str,
    ) -> Result<Option<ActionableEvent>, ExtractError> {
        let (start, end) = extract_positions(fragment)?;
        let operation = GDnaOperation {
            chromosome,
            start,
            end,
            raw: fragment,
        };

        let Some(reconstruction) = reconstruct(kind, &operation, self.reference, &self.config)?
        else {
            return Ok(None);
        };

        let event = match reconstruction {
            Reconstruction::Variant {
                position,
                ref_allele,
                alt_allele,
            } => ActionableEvent::from(SomaticVariantEvent::new(
                gene, chromosome, position, ref_allele, alt_allele,
            )),
            Reconstruction::Range { start, end } => ActionableEvent::from(GenomicRangeEvent::new(
                gene, transcript, chromosome, start, end,
            )),
        };

        Ok(Some(event))
    }
}

impl<R: ReferenceAccessor + Sync + ?Sized> ExtractionEngine<'_, R> {
    /// Extract events from many records in parallel, keeping record order.
    pub fn extract_all(&self, records: &[TransvarRecord]) -> Vec<ActionableEvent> {
        let per_record: Vec<Vec<ActionableEvent>> = records
            .par_iter()
            .map(|r| self.extract_variants(&r.gene, &r.transcript, &r.record))
            .collect();

        per_record.into_iter().flatten().collect()
    }
}
