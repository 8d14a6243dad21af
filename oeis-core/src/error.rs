//! Structured errors and warnings
//!
//! Numeric failures arrive as `NumberError` and are lifted into `SeqError`,
//! which carries a machine-readable code, a severity and the sequence it was
//! raised for. Warnings use the same type with `Severity::Warning` and ride
//! along with a successful result instead of aborting it.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_SEQUENCE: &str = "UNKNOWN_SEQUENCE";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const POSITIVE_REQUIRED: &str = "POSITIVE_REQUIRED";
    pub const TOO_SMALL: &str = "TOO_SMALL";
    pub const SEARCH_EXHAUSTED: &str = "SEARCH_EXHAUSTED";
    pub const INTERNAL: &str = "INTERNAL";
    // Advisory codes
    pub const LONG_CALCULATION: &str = "LONG_CALCULATION";
    pub const ACCURACY: &str = "ACCURACY";
    pub const BIG_INT: &str = "BIG_INT";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued; the result may be slow or inexact
    Warning,
    /// Computation of this sequence failed
    Error,
    /// The request cannot be served at all
    Fatal,
}

/// Where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Sequence identifier, e.g. "A000045"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,

    /// Number of terms that were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_count: Option<i64>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

impl SeqError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Builder: set sequence context (keeps an id set closer to the source)
    pub fn in_sequence(mut self, id: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        if ctx.sequence.is_none() {
            ctx.sequence = Some(id.into());
        }
        self
    }

    pub fn with_term_count(mut self, count: i64) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.term_count = Some(count);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_ARGUMENT, format!("Invalid argument: {}", details.into()))
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
            .with_suggestion("Ensure divisor is not zero")
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
    }

    pub fn unknown_sequence(id: &str) -> Self {
        Self::new(codes::UNKNOWN_SEQUENCE, format!("Unknown sequence: {}", id))
            .with_suggestion("Either this sequence has not been implemented yet, or the id is invalid. Use --list to see what is available")
    }

    /// A machine-width formula was asked for more terms than fit in 64 bits
    pub fn overflow(id: &str, limit: usize) -> Self {
        Self::new(
            codes::OVERFLOW,
            format!("{} overflows 64-bit integers past {} terms", id, limit),
        )
        .with_suggestion(format!("Request at most {} terms", limit))
        .in_sequence(id)
    }

    pub fn positive_required(what: &str) -> Self {
        Self::new(codes::POSITIVE_REQUIRED, format!("{} must be positive", what))
    }

    pub fn too_small(id: &str, min: usize, got: usize) -> Self {
        Self::new(
            codes::TOO_SMALL,
            format!("{} needs at least {} terms, got {}", id, min, got),
        )
        .in_sequence(id)
    }

    pub fn search_exhausted(details: impl Into<String>) -> Self {
        Self::new(codes::SEARCH_EXHAUSTED, format!("Search exhausted: {}", details.into()))
            .with_suggestion("Request fewer terms")
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }

    // ========== Warning Constructors ==========

    pub fn long_calculation(id: &str, threshold: usize) -> Self {
        Self::new(
            codes::LONG_CALCULATION,
            format!("{} takes a long time past {} terms", id, threshold),
        )
        .with_severity(Severity::Warning)
        .in_sequence(id)
    }

    pub fn accuracy(id: &str) -> Self {
        Self::new(
            codes::ACCURACY,
            format!("{} is computed with float rounding and may be inaccurate", id),
        )
        .with_severity(Severity::Warning)
        .in_sequence(id)
    }

    pub fn big_int(id: &str, limit: usize) -> Self {
        Self::new(
            codes::BIG_INT,
            format!("{} exceeds 64-bit integers past {} terms", id, limit),
        )
        .with_severity(Severity::Warning)
        .in_sequence(id)
    }
}

impl std::fmt::Display for SeqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for SeqError {}

impl From<NumberError> for SeqError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::DivisionByZero => Self::div_zero(),
            NumberError::InvalidArgument(s) => Self::invalid_argument(s),
        }
    }
}
