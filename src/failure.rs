// dbc-logic/src/failure.rs
// ============================================================================
// Module: Failure Escape Hatch
// Description: Unconditional failure constructors and unreachable markers.
// Purpose: Provide always-`Err` escape hatches for expression positions and
//          both roles of the exhaustiveness marker.
// Dependencies: crate::error, std::convert::Infallible
// ============================================================================

//! ## Overview
//! The `fail` family never succeeds; the success type is a free parameter so
//! the calls fit anywhere a value is statically expected, such as the arm of
//! a `match` or the fallback of a lookup. `unreachable_case` is the
//! compile-time exhaustiveness marker: its parameter type is uninhabited, so
//! a call site only type-checks where no case remains. `unreachable_state`
//! is the runtime fail-safe for impossibility established by data rather
//! than by types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::convert::Infallible;

use crate::error::ContractKind;
use crate::error::ContractResult;

// ============================================================================
// SECTION: Default Messages
// ============================================================================

/// Diagnostic raised by [`fail`] when no message is supplied
pub const FAIL_DEFAULT_MESSAGE: &str = "operation cannot proceed";

/// Diagnostic raised by [`unreachable_state`] when no message is supplied
pub const UNREACHABLE_DEFAULT_MESSAGE: &str = "reached an unreachable case";

// ============================================================================
// SECTION: Fail Constructors
// ============================================================================

/// Raises an illegal-state violation with the default diagnostic
///
/// # Errors
///
/// Always returns
/// [`ContractError::IllegalState`](crate::ContractError::IllegalState)
/// carrying [`FAIL_DEFAULT_MESSAGE`].
pub fn fail<T>() -> ContractResult<T> {
    fail_as(ContractKind::IllegalState, FAIL_DEFAULT_MESSAGE)
}

/// Raises an illegal-state violation with an explicit diagnostic message
///
/// # Errors
///
/// Always returns
/// [`ContractError::IllegalState`](crate::ContractError::IllegalState)
/// carrying the supplied message.
pub fn fail_with<T>(message: impl Into<String>) -> ContractResult<T> {
    fail_as(ContractKind::IllegalState, message)
}

/// Raises a violation of the selected category with the given message
///
/// The category is selected by type through [`ContractKind`], never inferred
/// from the message value.
///
/// # Errors
///
/// Always returns the [`ContractError`](crate::ContractError) variant named
/// by `kind`, carrying the supplied message.
pub fn fail_as<T>(kind: ContractKind, message: impl Into<String>) -> ContractResult<T> {
    Err(kind.with_message(message))
}

// ============================================================================
// SECTION: Unreachable Markers
// ============================================================================

/// Marks a case the compiler has proven cannot occur
///
/// The parameter type is uninhabited, so this function can only be named in
/// positions where every remaining case has been ruled out, such as the
/// `Err` arm of a `Result<T, Infallible>`. Introducing an inhabited case
/// upstream makes the call site fail to compile, surfacing the missing
/// handler at build time. The body cannot execute.
pub fn unreachable_case(never: Infallible) -> ! {
    match never {}
}

/// Raises the fail-safe for a branch assumed impossible at runtime
///
/// Use this where impossibility follows from data invariants the type system
/// cannot see; prefer [`unreachable_case`] when it follows from types.
///
/// # Errors
///
/// Always returns [`ContractError::Assertion`](crate::ContractError::Assertion)
/// carrying [`UNREACHABLE_DEFAULT_MESSAGE`].
pub fn unreachable_state<T>() -> ContractResult<T> {
    fail_as(ContractKind::Assertion, UNREACHABLE_DEFAULT_MESSAGE)
}

/// Raises the unreachable fail-safe with an explicit diagnostic message
///
/// # Errors
///
/// Always returns [`ContractError::Assertion`](crate::ContractError::Assertion)
/// carrying the supplied message.
pub fn unreachable_state_with<T>(message: impl Into<String>) -> ContractResult<T> {
    fail_as(ContractKind::Assertion, message)
}

// Tests are in the central tests module (tests/failure.rs)
