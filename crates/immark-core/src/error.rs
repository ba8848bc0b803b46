//! Error types for immark-core

use thiserror::Error;

/// Result type alias for immark operations
pub type Result<T> = std::result::Result<T, ImmarkError>;

/// Main error type for immark operations.
///
/// Messages are surfaced verbatim in HTTP error bodies, so variants carry
/// the exact text the caller sees rather than a prefixed description.
#[derive(Error, Debug)]
pub enum ImmarkError {
    /// Client-supplied input failed a field or shape contract.
    /// Recoverable by resubmitting corrected input.
    #[error("{0}")]
    Validation(String),

    /// The external store reported a failure; the message is opaque and
    /// passed through unchanged. Never retried.
    #[error("{0}")]
    Store(String),

    /// The store reported success but its payload is missing a field the
    /// operation contract requires.
    #[error("{0}")]
    DataShape(String),

    /// Any other unexpected failure. Nothing in this crate constructs it:
    /// validation, store, and shape problems all have their own variant.
    /// It exists for embedders folding foreign failures into the taxonomy,
    /// and it is the only variant whose HTTP mapping carries the underlying
    /// detail alongside a generic message.
    #[error("{0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through_verbatim() {
        let err = ImmarkError::Validation("Title, URL, and category are required".to_string());
        assert_eq!(err.to_string(), "Title, URL, and category are required");

        let err = ImmarkError::Store("constraint violation".to_string());
        assert_eq!(err.to_string(), "constraint violation");
    }
}
