//! Common error infrastructure for puzzle-core.
//!
//! This module provides the shared classification used by every error type in
//! the crate. Domain-specific errors (`PositionError`, `BoxError`, `TurnError`)
//! are defined next to the operations that raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each layer has its own error type with specific variants
//! - **Rich Context**: Errors carry the offending position where one exists
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// No puzzle error is fatal. The distinction is whether the player simply
/// lost the turn or the caller handed the core something it should have
/// validated first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Gameplay outcome - report it and keep playing.
    ///
    /// Examples: opening an empty box, rolling a fixed box
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: position outside the grid, action in the wrong turn phase
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is a normal gameplay outcome.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all puzzle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Used as a structured field when errors are logged.
    fn error_code(&self) -> &'static str;
}
