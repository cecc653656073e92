//! Error types for the keypath crate.
//!
//! Building predicates, sorts and joins from key paths is total: a wrong
//! field or a mismatched value type is rejected by the compiler. The few
//! fallible operations are the ones that take text or report a verdict.

use thiserror::Error;

/// Errors returned by the fallible keypath operations.
#[derive(Debug, Error)]
pub enum KeyPathError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Text that does not name a comparison operator.
    #[error("unknown operator '{0}': expected one of ==, !=, >, >=, <, <= (or eq, ne, gt, gte, lt, lte)")]
    UnknownOperator(String),

    /// Text that does not name a sort direction.
    #[error("unknown sort direction '{0}': expected asc or desc")]
    UnknownDirection(String),

    /// A validator's composed predicate rejected its subject.
    #[error("validation failed for {subject}")]
    ValidationFailed { subject: &'static str },
}

/// Result type for keypath operations.
pub type Result<T> = std::result::Result<T, KeyPathError>;
