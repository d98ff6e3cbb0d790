// dbc-logic/src/presence.rs
// ============================================================================
// Module: Presence Contracts
// Description: Value-returning checks over optional values.
// Purpose: Narrow `Option<T>` to `T` under the precondition, invariant, and
//          postcondition roles, or raise the bound violation category.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! The presence family mirrors the boolean checks but operates on an
//! `Option<T>`, handing back the contained value unchanged on success. A
//! successful call is the narrowing step: the result is guaranteed
//! absence-free and safe to use without further `Option` handling. The
//! assertion role has no dedicated wrapper; `asserts(is_defined(&value))`
//! covers it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ContractKind;
use crate::error::ContractResult;

// ============================================================================
// SECTION: Default Message
// ============================================================================

/// Diagnostic raised by the presence checks when no message is supplied
pub const PRESENCE_DEFAULT_MESSAGE: &str = "value must be present";

// ============================================================================
// SECTION: Presence Predicate
// ============================================================================

/// Returns true when the optional value is present
///
/// This is the sole presence predicate the contract surface relies on. It is
/// total and dependency-free: false only for `None`, true for every `Some`
/// including payloads such as `0`, `""`, or `false`.
#[must_use]
pub const fn is_defined<T>(value: &Option<T>) -> bool {
    value.is_some()
}

// ============================================================================
// SECTION: Shared Routine
// ============================================================================

/// Narrows an optional value against a violation category
///
/// Returns the contained value itself, not a copy; the message is only
/// converted on the absent path.
fn narrow<T>(value: Option<T>, kind: ContractKind, message: impl Into<String>) -> ContractResult<T> {
    value.ok_or_else(|| kind.with_message(message))
}

// ============================================================================
// SECTION: Precondition
// ============================================================================

/// Narrows an optional input required of the caller to be present
///
/// # Errors
///
/// Returns [`ContractError::Precondition`](crate::ContractError::Precondition)
/// carrying [`PRESENCE_DEFAULT_MESSAGE`] when the value is absent.
pub fn requires_some<T>(value: Option<T>) -> ContractResult<T> {
    narrow(value, ContractKind::Precondition, PRESENCE_DEFAULT_MESSAGE)
}

/// Narrows a required optional input with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::Precondition`](crate::ContractError::Precondition)
/// carrying the supplied message when the value is absent.
pub fn requires_some_with<T>(value: Option<T>, message: impl Into<String>) -> ContractResult<T> {
    narrow(value, ContractKind::Precondition, message)
}

// ============================================================================
// SECTION: Invariant
// ============================================================================

/// Narrows an optional value a component's state must hold
///
/// # Errors
///
/// Returns [`ContractError::IllegalState`](crate::ContractError::IllegalState)
/// carrying [`PRESENCE_DEFAULT_MESSAGE`] when the value is absent.
pub fn checks_some<T>(value: Option<T>) -> ContractResult<T> {
    narrow(value, ContractKind::IllegalState, PRESENCE_DEFAULT_MESSAGE)
}

/// Narrows an invariant optional value with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::IllegalState`](crate::ContractError::IllegalState)
/// carrying the supplied message when the value is absent.
pub fn checks_some_with<T>(value: Option<T>, message: impl Into<String>) -> ContractResult<T> {
    narrow(value, ContractKind::IllegalState, message)
}

// ============================================================================
// SECTION: Postcondition
// ============================================================================

/// Narrows an optional result an operation guarantees to produce
///
/// # Errors
///
/// Returns [`ContractError::Postcondition`](crate::ContractError::Postcondition)
/// carrying [`PRESENCE_DEFAULT_MESSAGE`] when the value is absent.
pub fn ensures_some<T>(value: Option<T>) -> ContractResult<T> {
    narrow(value, ContractKind::Postcondition, PRESENCE_DEFAULT_MESSAGE)
}

/// Narrows a guaranteed optional result with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::Postcondition`](crate::ContractError::Postcondition)
/// carrying the supplied message when the value is absent.
pub fn ensures_some_with<T>(value: Option<T>, message: impl Into<String>) -> ContractResult<T> {
    narrow(value, ContractKind::Postcondition, message)
}

// Tests are in the central tests module (tests/presence.rs)
