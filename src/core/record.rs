use serde::{Deserialize, Serialize};

/// The two fields of an annotation-tool output row that carry genomic notation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// e.g. `chr7:g.140453136A>T/c.1799T>A/p.V600E`
    pub coordinates: String,

    /// `;`-delimited `key=value` fields, e.g. `candidate_snv_variants=chr7:g.140453137A>T`
    pub info: String,
}

impl AnnotationRecord {
    pub fn new(coordinates: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            coordinates: coordinates.into(),
            info: info.into(),
        }
    }
}

impl std::fmt::Display for AnnotationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.coordinates, self.info)
    }
}

/// A single gDNA fragment with its positions extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GDnaOperation<'a> {
    pub chromosome: &'a str,
    pub start: u64,
    /// Second coordinate of a `START_END` fragment
    pub end: Option<u64>,
    /// The whole fragment, e.g. `55152095_55152106del12`
    pub raw: &'a str,
}
