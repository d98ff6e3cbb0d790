// dbc-logic/src/error.rs
// ============================================================================
// Module: Contract Error Taxonomy
// Description: Categorized violation errors for contract checks.
// Purpose: Define `ContractError`, the `ContractKind` selector, and the
//          shared result alias used by every checking function.
// Dependencies: serde::{Deserialize, Serialize}, thiserror::Error, std::fmt
// ============================================================================

//! ## Overview
//! Centralizes the four contract violation categories, their user-facing
//! messaging, and serialization guarantees. Every checking function in this
//! crate reports failures through this taxonomy, so callers can dispatch on
//! the violated guarantee without inspecting call-site source.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Kind Selector
// ============================================================================

/// Selector naming one of the four contract violation categories
///
/// Callers of the generic escape hatch pass a kind to choose which category
/// gets raised. Kinds and messages are distinguishable by type, never by
/// value.
///
/// # Invariants
/// - Represents a closed set of categories; no variant carries data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// Input to an operation violated a stated constraint
    Precondition,
    /// A component state does not allow the current operation
    IllegalState,
    /// An operation completed without establishing its promised guarantee
    Postcondition,
    /// A condition believed always true was false
    Assertion,
}

impl ContractKind {
    /// Returns the stable discriminator name for logging and dispatch
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::IllegalState => "illegal-state",
            Self::Postcondition => "postcondition",
            Self::Assertion => "assertion",
        }
    }

    /// Builds the [`ContractError`] of this kind carrying the given message
    ///
    /// This is the single construction routine every checking function in
    /// the crate funnels through; the kind is fixed at the raise site and
    /// never changes afterwards.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> ContractError {
        let message = message.into();
        match self {
            Self::Precondition => ContractError::Precondition(message),
            Self::IllegalState => ContractError::IllegalState(message),
            Self::Postcondition => ContractError::Postcondition(message),
            Self::Assertion => ContractError::Assertion(message),
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SECTION: Contract Error
// ============================================================================

/// Categorized contract violation
///
/// The enum is the generically catchable surface; its variants are the
/// concrete categories. Each variant carries a human-readable message and
/// nothing else. Construction never fails and values are immutable once
/// built.
///
/// # Invariants
/// - Every raised failure belongs to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ContractError {
    /// Input to an operation violated a stated constraint
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A component state does not allow the current operation
    ///
    /// Also the default category raised by the generic escape hatch.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// An operation completed without establishing its promised guarantee
    #[error("postcondition violated: {0}")]
    Postcondition(String),

    /// A condition believed always true was false
    ///
    /// Also the category raised by the reached-"unreachable" fail-safe.
    #[error("assertion failed: {0}")]
    Assertion(String),
}

// ============================================================================
// SECTION: Constructor Helpers
// ============================================================================

impl ContractError {
    /// Creates a precondition violation with a custom message
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Creates an illegal-state violation with a custom message
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState(message.into())
    }

    /// Creates a postcondition violation with a custom message
    pub fn postcondition(message: impl Into<String>) -> Self {
        Self::Postcondition(message.into())
    }

    /// Creates an assertion violation with a custom message
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// Returns the category of this violation
    #[must_use]
    pub const fn kind(&self) -> ContractKind {
        match self {
            Self::Precondition(_) => ContractKind::Precondition,
            Self::IllegalState(_) => ContractKind::IllegalState,
            Self::Postcondition(_) => ContractKind::Postcondition,
            Self::Assertion(_) => ContractKind::Assertion,
        }
    }

    /// Returns the message carried by this violation
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Precondition(message)
            | Self::IllegalState(message)
            | Self::Postcondition(message)
            | Self::Assertion(message) => message,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for contract checks
pub type ContractResult<T = ()> = Result<T, ContractError>;

// Tests are in the central tests module (tests/error.rs)
