//! Computed sequence results
//!
//! A formula returns its terms either as machine integers or as exact
//! integers, never a mix, together with the mathematical index of the first
//! term.

use crate::{Integer, SeqError};
use serde::Serialize;

/// Homogeneous term storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum Terms {
    Machine(Vec<i64>),
    Exact(Vec<Integer>),
}

impl Terms {
    pub fn len(&self) -> usize {
        match self {
            Terms::Machine(v) => v.len(),
            Terms::Exact(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decimal rendering of each term
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Terms::Machine(v) => v.iter().map(|n| n.to_string()).collect(),
            Terms::Exact(v) => v.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Every term as an exact integer
    pub fn to_exact(&self) -> Vec<Integer> {
        match self {
            Terms::Machine(v) => v.iter().map(|&n| Integer::from_i64(n)).collect(),
            Terms::Exact(v) => v.clone(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Terms::Machine(_) => "machine",
            Terms::Exact(_) => "exact",
        }
    }
}

/// Terms plus offset, as handed to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceResult {
    pub offset: i64,
    pub terms: Terms,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SeqError>,
}

impl SequenceResult {
    pub fn machine(values: Vec<i64>, offset: i64) -> Self {
        Self { offset, terms: Terms::Machine(values), warnings: Vec::new() }
    }

    pub fn exact(values: Vec<Integer>, offset: i64) -> Self {
        Self { offset, terms: Terms::Exact(values), warnings: Vec::new() }
    }

    pub fn with_warning(mut self, warning: SeqError) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Attach the warning only when `condition` holds
    pub fn warn_if(self, condition: bool, warning: impl FnOnce() -> SeqError) -> Self {
        if condition {
            self.with_warning(warning())
        } else {
            self
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(n, a(n))` pairs starting at the offset
    pub fn indexed(&self) -> Vec<(i64, String)> {
        self.terms
            .to_strings()
            .into_iter()
            .enumerate()
            .map(|(i, v)| (self.offset + i as i64, v))
            .collect()
    }
}
