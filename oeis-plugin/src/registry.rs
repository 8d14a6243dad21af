//! Sequence Registry

use crate::{SequenceMeta, SequencePlugin};
use oeis_core::{SeqError, SequenceResult};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Central sequence registry, keyed by upper-cased identifier
pub struct SequenceRegistry {
    sequences: HashMap<String, Arc<dyn SequencePlugin>>,
}

impl SequenceRegistry {
    pub fn new() -> Self {
        Self { sequences: HashMap::new() }
    }

    pub fn with_sequence<S: SequencePlugin + 'static>(mut self, s: S) -> Self {
        let id = s.meta().id.to_uppercase();
        self.sequences.insert(id, Arc::new(s));
        self
    }

    pub fn get(&self, id: &str) -> Option<&dyn SequencePlugin> {
        self.sequences.get(&id.trim().to_uppercase()).map(|s| s.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Compute `requested` terms of the sequence named `id`
    pub fn compute(&self, id: &str, requested: i64) -> Result<SequenceResult, SeqError> {
        let key = id.trim().to_uppercase();
        let Some(plugin) = self.sequences.get(&key) else {
            let similar = self.find_similar(&key);
            let mut err = SeqError::unknown_sequence(id);
            if !similar.is_empty() {
                let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                err = err.with_suggestion(format!(
                    "Similar: {}. Use --list for the full list.",
                    suggestions.join(", ")
                ));
            }
            return Err(err);
        };

        if requested < 0 {
            return Err(SeqError::invalid_argument(format!(
                "term count must be non-negative, got {}",
                requested
            ))
            .in_sequence(&key)
            .with_term_count(requested));
        }

        debug!(sequence = %key, terms = requested, "computing sequence");
        plugin
            .compute(requested as usize)
            .map_err(|e| e.in_sequence(&key).with_term_count(requested))
    }

    /// Metadata of every sequence, optionally filtered by category, sorted by id
    pub fn list(&self, category: Option<&str>) -> Vec<SequenceMeta> {
        let mut metas: Vec<SequenceMeta> = self.sequences.values()
            .map(|s| s.meta())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by(|a, b| a.id.cmp(b.id));
        metas
    }

    pub fn categories(&self) -> Vec<&'static str> {
        let cats: BTreeSet<&'static str> = self.sequences.values()
            .map(|s| s.meta().category)
            .collect();
        cats.into_iter().collect()
    }

    /// Find identifiers similar to the given one (for error suggestions)
    fn find_similar(&self, id: &str) -> Vec<String> {
        let mut matches: Vec<(String, usize)> = self.sequences.keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(id, candidate);
                if score > 0 {
                    Some((candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then by id for a stable order
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(id, _)| id).collect()
    }

    /// Identifiers share a fixed "A" + six digit shape, so score by the
    /// length of the common prefix and by matching digit positions.
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        }

        let prefix = query.chars()
            .zip(candidate.chars())
            .take_while(|(a, b)| a == b)
            .count();
        // The bare "A" prefix alone says nothing
        if prefix > 1 {
            score += prefix * 10;
        }

        let query_digits: HashSet<(usize, char)> = query.chars().enumerate().collect();
        let positional = candidate.chars()
            .enumerate()
            .filter(|pair| query_digits.contains(pair))
            .count();
        if positional > 4 {
            score += positional;
        }

        score
    }
}

impl Default for SequenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TermKind;
    use oeis_core::codes;

    struct Naturals;

    impl SequencePlugin for Naturals {
        fn meta(&self) -> SequenceMeta {
            SequenceMeta {
                id: "A000027",
                name: "Positive integers",
                description: "a(n) = n",
                returns: TermKind::Machine,
                category: "basic",
                examples: &["1, 2, 3, 4, 5"],
                related: &[],
            }
        }

        fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
            Ok(SequenceResult::machine((1..=term_count as i64).collect(), 1))
        }
    }

    struct Failing;

    impl SequencePlugin for Failing {
        fn meta(&self) -> SequenceMeta {
            SequenceMeta {
                id: "a000045",
                name: "Always overflows",
                description: "",
                returns: TermKind::Machine,
                category: "test",
                examples: &[],
                related: &[],
            }
        }

        fn compute(&self, _term_count: usize) -> Result<SequenceResult, SeqError> {
            Err(SeqError::overflow("A000045", 0))
        }
    }

    fn registry() -> SequenceRegistry {
        SequenceRegistry::new().with_sequence(Naturals).with_sequence(Failing)
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let reg = registry();
        assert!(reg.contains("a000027"));
        assert!(reg.contains(" A000045 "));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_compute() {
        let r = registry().compute("A000027", 4).unwrap();
        assert_eq!(r.offset, 1);
        assert_eq!(r.terms.to_strings(), vec!["1", "2", "3", "4"]);
        assert!(registry().compute("A000027", 0).unwrap().is_empty());
    }

    #[test]
    fn test_negative_count() {
        let err = registry().compute("A000027", -1).unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
        assert_eq!(err.context.unwrap().term_count, Some(-1));
    }

    #[test]
    fn test_unknown_sequence_suggests_similar() {
        let err = registry().compute("A000028", 5).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_SEQUENCE);
        assert!(err.suggestion.unwrap().contains("A000027"));
    }

    #[test]
    fn test_errors_carry_context() {
        let err = registry().compute("A000045", 7).unwrap_err();
        let ctx = err.context.unwrap();
        assert_eq!(ctx.sequence.as_deref(), Some("A000045"));
        assert_eq!(ctx.term_count, Some(7));
    }

    #[test]
    fn test_list_and_categories() {
        let reg = registry();
        let ids: Vec<&str> = reg.list(None).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["A000027", "a000045"]);
        assert_eq!(reg.list(Some("basic")).len(), 1);
        assert_eq!(reg.categories(), vec!["basic", "test"]);
    }

    #[test]
    fn test_meta_serializes() {
        let json = serde_json::to_value(Naturals.meta()).unwrap();
        assert_eq!(json["returns"], "machine");
    }
}
