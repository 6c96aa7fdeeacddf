//! Operation classification from gDNA surface syntax.

use serde::{Deserialize, Serialize};

use crate::utils::text::is_digits;

/// Kind of edit a gDNA fragment describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// `133738357T>C`
    Substitution,
    /// `105239404_105239405delinsGC` or `133748289_133748290delTCinsGT`
    Delins,
    /// `32930598_32930599insC`
    Insertion,
    /// `41201160dupA`
    Duplication,
    /// `55152094_55152105delCATCATGCATGA` or `55152095_55152106del12`
    Deletion,
    /// `55242464_55242478`, a region without a resolved edit
    Range,
    Unrecognized,
}

type Predicate = fn(&str) -> bool;

/// First matching rule wins. A delins fragment contains both `del` and `ins`, so it has
/// to be tested before either of them.
const RULES: &[(Predicate, OperationKind)] = &[
    (is_substitution, OperationKind::Substitution),
    (is_delins, OperationKind::Delins),
    (is_insertion, OperationKind::Insertion),
    (is_duplication, OperationKind::Duplication),
    (is_deletion, OperationKind::Deletion),
    (is_position_range, OperationKind::Range),
];

/// Classify a gDNA fragment (the text after `g.`)
#[must_use]
pub fn classify(fragment: &str) -> OperationKind {
    RULES
        .iter()
        .find(|(matches, _)| matches(fragment))
        .map_or(OperationKind::Unrecognized, |(_, kind)| *kind)
}

fn is_substitution(fragment: &str) -> bool {
    fragment.contains('>')
}

fn is_delins(fragment: &str) -> bool {
    fragment.contains("del") && fragment.contains("ins")
}

fn is_insertion(fragment: &str) -> bool {
    fragment.contains("ins")
}

fn is_duplication(fragment: &str) -> bool {
    fragment.contains("dup")
}

fn is_deletion(fragment: &str) -> bool {
    fragment.contains("del")
}

/// `digits_digits` and nothing else
fn is_position_range(fragment: &str) -> bool {
    fragment
        .split_once('_')
        .is_some_and(|(start, end)| is_digits(start) && is_digits(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_kind() {
        assert_eq!(classify("133738357T>C"), OperationKind::Substitution);
        assert_eq!(classify("105239404_105239405delinsGC"), OperationKind::Delins);
        assert_eq!(classify("133748289_133748290delTCinsGT"), OperationKind::Delins);
        assert_eq!(classify("32930598_32930599insC"), OperationKind::Insertion);
        assert_eq!(classify("41201160dupA"), OperationKind::Duplication);
        assert_eq!(classify("55152095_55152106del12"), OperationKind::Deletion);
        assert_eq!(classify("55242464_55242478"), OperationKind::Range);
    }

    #[test]
    fn test_classify_precedence() {
        // '>' beats everything else
        assert_eq!(classify("100_101delinsA>T"), OperationKind::Substitution);
        // ins beats dup
        assert_eq!(classify("100_101insdupA"), OperationKind::Insertion);
        // dup beats del
        assert_eq!(classify("100dupdel"), OperationKind::Duplication);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify(""), OperationKind::Unrecognized);
        assert_eq!(classify("?"), OperationKind::Unrecognized);
        assert_eq!(classify("100_"), OperationKind::Unrecognized);
        assert_eq!(classify("_100"), OperationKind::Unrecognized);
        assert_eq!(classify("100_200_300"), OperationKind::Unrecognized);
        assert_eq!(classify("100_200inv"), OperationKind::Unrecognized);
        assert_eq!(classify("12345"), OperationKind::Unrecognized);
    }
}
