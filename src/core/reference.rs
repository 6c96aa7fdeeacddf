//! Read access to reference genome sequence.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Chromosome not found in reference: {0}")]
    UnknownChromosome(String),

    #[error("Invalid range {chromosome}:{start}-{end}")]
    InvalidRange {
        chromosome: String,
        start: u64,
        end: u64,
    },

    #[error("Range {chromosome}:{start}-{end} exceeds sequence length {length}")]
    OutOfBounds {
        chromosome: String,
        start: u64,
        end: u64,
        length: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Source of reference bases.
///
/// Coordinates are 1-based and inclusive; `start == end` returns a single base.
/// Implementations return upper-case bases and must be safe to share between threads
/// if the same handle is used for concurrent extraction.
pub trait ReferenceAccessor {
    /// Fetch the bases of `chromosome` covering `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::UnknownChromosome` if the chromosome is not present,
    /// `ReferenceError::InvalidRange` if `start` is 0 or greater than `end`, and
    /// `ReferenceError::OutOfBounds` if `end` is past the end of the sequence.
    fn fetch(&self, chromosome: &str, start: u64, end: u64) -> Result<String, ReferenceError>;
}

impl<T: ReferenceAccessor + ?Sized> ReferenceAccessor for &T {
    fn fetch(&self, chromosome: &str, start: u64, end: u64) -> Result<String, ReferenceError> {
        (**self).fetch(chromosome, start, end)
    }
}

impl ReferenceAccessor for Box<dyn ReferenceAccessor + Send + Sync> {
    fn fetch(&self, chromosome: &str, start: u64, end: u64) -> Result<String, ReferenceError> {
        (**self).fetch(chromosome, start, end)
    }
}

/// Check a 1-based inclusive range against a sequence of `length` bases
pub(crate) fn check_range(
    chromosome: &str,
    start: u64,
    end: u64,
    length: u64,
) -> Result<(), ReferenceError> {
    if start == 0 || start > end {
        return Err(ReferenceError::InvalidRange {
            chromosome: chromosome.to_string(),
            start,
            end,
        });
    }
    if end > length {
        return Err(ReferenceError::OutOfBounds {
            chromosome: chromosome.to_string(),
            start,
            end,
            length,
        });
    }
    Ok(())
}

/// Reference sequences held in memory, keyed by chromosome name
#[derive(Debug, Clone, Default)]
pub struct InMemoryReference {
    sequences: HashMap<String, Vec<u8>>,
}

impl InMemoryReference {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a named sequence. Bases are stored upper-case.
    #[must_use]
    pub fn with_sequence(mut self, chromosome: impl Into<String>, bases: &str) -> Self {
        self.insert(chromosome, bases);
        self
    }

    pub fn insert(&mut self, chromosome: impl Into<String>, bases: &str) {
        self.sequences
            .insert(chromosome.into(), bases.to_ascii_uppercase().into_bytes());
    }
}

impl ReferenceAccessor for InMemoryReference {
    fn fetch(&self, chromosome: &str, start: u64, end: u64) -> Result<String, ReferenceError> {
        let sequence = self
            .sequences
            .get(chromosome)
            .ok_or_else(|| ReferenceError::UnknownChromosome(chromosome.to_string()))?;

        check_range(chromosome, start, end, sequence.len() as u64)?;

        #[allow(clippy::cast_possible_truncation)] // Bounded by sequence length
        let bases = &sequence[(start - 1) as usize..end as usize];
        Ok(String::from_utf8_lossy(bases).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> InMemoryReference {
        InMemoryReference::new().with_sequence("1", "acgtNACGT")
    }

    #[test]
    fn test_fetch_single_base() {
        assert_eq!(reference().fetch("1", 1, 1).unwrap(), "A");
        assert_eq!(reference().fetch("1", 5, 5).unwrap(), "N");
    }

    #[test]
    fn test_fetch_range_is_inclusive() {
        assert_eq!(reference().fetch("1", 2, 4).unwrap(), "CGT");
        assert_eq!(reference().fetch("1", 1, 9).unwrap(), "ACGTNACGT");
    }

    #[test]
    fn test_fetch_errors() {
        let reference = reference();
        assert!(matches!(
            reference.fetch("2", 1, 1),
            Err(ReferenceError::UnknownChromosome(_))
        ));
        assert!(matches!(
            reference.fetch("1", 0, 1),
            Err(ReferenceError::InvalidRange { .. })
        ));
        assert!(matches!(
            reference.fetch("1", 4, 3),
            Err(ReferenceError::InvalidRange { .. })
        ));
        assert!(matches!(
            reference.fetch("1", 8, 10),
            Err(ReferenceError::OutOfBounds { length: 9, .. })
        ));
    }

    #[test]
    fn test_fetch_through_reference() {
        fn third_base<R: ReferenceAccessor>(reference: R) -> String {
            reference.fetch("1", 3, 3).unwrap()
        }

        let reference = reference();
        assert_eq!(third_base(&reference), "G");

        let boxed: Box<dyn ReferenceAccessor + Send + Sync> = Box::new(reference);
        assert_eq!(third_base(&boxed), "G");
    }
}
