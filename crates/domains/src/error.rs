//! # DomainError
//!
//! Centralized error handling for the rusty-forum core.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required payload field was absent or null
    #[error("{0} is missing required property '{1}'")]
    MissingProperty(&'static str, &'static str),

    /// A payload field was present but had the wrong primitive type
    #[error("{0} property '{1}' does not meet the data type specification")]
    InvalidType(&'static str, &'static str),

    /// Resource not found (e.g., Thread, Comment, Reply)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Caller is not the owner of the resource being mutated
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A repository capability was invoked without a concrete backing implementation
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// Infrastructure failure (e.g., DB down, pool exhausted)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for rusty-forum logic.
pub type Result<T> = std::result::Result<T, DomainError>;
