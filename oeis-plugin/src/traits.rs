//! Plugin traits

use oeis_core::{SeqError, SequenceResult};
use serde::Serialize;

/// Which `Terms` variant a sequence produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// 64-bit terms; formulas guard their own overflow limit
    Machine,
    /// Arbitrary precision terms
    Exact,
}

/// Metadata for a sequence plugin
#[derive(Debug, Clone, Serialize)]
pub struct SequenceMeta {
    /// Encyclopedia identifier, e.g. "A000045"
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub returns: TermKind,
    pub category: &'static str,
    /// Leading terms, for help output
    pub examples: &'static [&'static str],
    pub related: &'static [&'static str],
}

/// Pure sequence computation
pub trait SequencePlugin: Send + Sync {
    fn meta(&self) -> SequenceMeta;
    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError>;
}
