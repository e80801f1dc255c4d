//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction and entity
//! invariants, so adapters never have to fall back to `String` errors.

use thiserror::Error;

use crate::value_objects::Material;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The host reported a block that cannot back a pay sign.
    ///
    /// This is a host-state invariant violation, never a user error.
    #[error("Invalid block material: {0}")]
    UnsupportedSignMaterial(Material),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Player name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unsupported sign material error
    pub fn unsupported_sign_material(material: Material) -> Self {
        Self::UnsupportedSignMaterial(material)
    }

    /// Whether this error reports corrupted host state rather than bad input.
    pub fn is_host_invariant(&self) -> bool {
        matches!(self, Self::UnsupportedSignMaterial(_))
    }
}
