//! OEIS Plugin System
//!
//! Every sequence is a `SequencePlugin`: a named computation from a term
//! count to a `SequenceResult`. The `SequenceRegistry` resolves identifiers
//! to plugins once, at startup.

mod traits;
mod registry;

pub use traits::{SequencePlugin, SequenceMeta, TermKind};
pub use registry::SequenceRegistry;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{SequencePlugin, SequenceMeta, TermKind, SequenceRegistry};
    pub use oeis_core::prelude::*;
}
