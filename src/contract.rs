// dbc-logic/src/contract.rs
// ============================================================================
// Module: Boolean Contract Checks
// Description: Role-named checks over boolean conditions.
// Purpose: Bind precondition, invariant, postcondition, and assertion roles
//          to their violation categories and default diagnostics.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! Four role-named checks share one parameterized routine and differ only in
//! the bound [`ContractKind`] and default message. The named surface keeps
//! call-site intent visible and stamps the violated guarantee onto the raised
//! error; callers that reach the code after a `?` may treat the condition as
//! established.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ContractKind;
use crate::error::ContractResult;

// ============================================================================
// SECTION: Default Messages
// ============================================================================

/// Diagnostic raised by [`requires`] when no message is supplied
pub const REQUIRES_DEFAULT_MESSAGE: &str = "required condition was not met";

/// Diagnostic raised by [`checks`] when no message is supplied
pub const CHECKS_DEFAULT_MESSAGE: &str = "state invariant was not met";

/// Diagnostic raised by [`ensures`] when no message is supplied
pub const ENSURES_DEFAULT_MESSAGE: &str = "guaranteed condition was not met";

/// Diagnostic raised by [`asserts`] when no message is supplied
pub const ASSERTS_DEFAULT_MESSAGE: &str = "asserted condition was false";

// ============================================================================
// SECTION: Shared Routine
// ============================================================================

/// Evaluates a condition against a violation category
///
/// The message is only converted when the condition fails, so callers pay
/// nothing on the success path.
fn evaluate(condition: bool, kind: ContractKind, message: impl Into<String>) -> ContractResult {
    if condition { Ok(()) } else { Err(kind.with_message(message)) }
}

// ============================================================================
// SECTION: Precondition
// ============================================================================

/// Checks a condition required of the caller before an operation proceeds
///
/// # Errors
///
/// Returns [`ContractError::Precondition`](crate::ContractError::Precondition)
/// carrying [`REQUIRES_DEFAULT_MESSAGE`] when the condition is false.
pub fn requires(condition: bool) -> ContractResult {
    evaluate(condition, ContractKind::Precondition, REQUIRES_DEFAULT_MESSAGE)
}

/// Checks a precondition with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::Precondition`](crate::ContractError::Precondition)
/// carrying the supplied message when the condition is false.
pub fn requires_with(condition: bool, message: impl Into<String>) -> ContractResult {
    evaluate(condition, ContractKind::Precondition, message)
}

// ============================================================================
// SECTION: Invariant
// ============================================================================

/// Checks a condition that must hold for a component to be usable
///
/// # Errors
///
/// Returns [`ContractError::IllegalState`](crate::ContractError::IllegalState)
/// carrying [`CHECKS_DEFAULT_MESSAGE`] when the condition is false.
pub fn checks(condition: bool) -> ContractResult {
    evaluate(condition, ContractKind::IllegalState, CHECKS_DEFAULT_MESSAGE)
}

/// Checks an invariant with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::IllegalState`](crate::ContractError::IllegalState)
/// carrying the supplied message when the condition is false.
pub fn checks_with(condition: bool, message: impl Into<String>) -> ContractResult {
    evaluate(condition, ContractKind::IllegalState, message)
}

// ============================================================================
// SECTION: Postcondition
// ============================================================================

/// Checks a guarantee an operation promises its caller on completion
///
/// # Errors
///
/// Returns [`ContractError::Postcondition`](crate::ContractError::Postcondition)
/// carrying [`ENSURES_DEFAULT_MESSAGE`] when the condition is false.
pub fn ensures(condition: bool) -> ContractResult {
    evaluate(condition, ContractKind::Postcondition, ENSURES_DEFAULT_MESSAGE)
}

/// Checks a postcondition with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::Postcondition`](crate::ContractError::Postcondition)
/// carrying the supplied message when the condition is false.
pub fn ensures_with(condition: bool, message: impl Into<String>) -> ContractResult {
    evaluate(condition, ContractKind::Postcondition, message)
}

// ============================================================================
// SECTION: Assertion
// ============================================================================

/// Checks a condition the author believes can never be false
///
/// # Errors
///
/// Returns [`ContractError::Assertion`](crate::ContractError::Assertion)
/// carrying [`ASSERTS_DEFAULT_MESSAGE`] when the condition is false.
pub fn asserts(condition: bool) -> ContractResult {
    evaluate(condition, ContractKind::Assertion, ASSERTS_DEFAULT_MESSAGE)
}

/// Checks an assertion with an explicit diagnostic message
///
/// # Errors
///
/// Returns [`ContractError::Assertion`](crate::ContractError::Assertion)
/// carrying the supplied message when the condition is false.
pub fn asserts_with(condition: bool, message: impl Into<String>) -> ContractResult {
    evaluate(condition, ContractKind::Assertion, message)
}

// Tests are in the central tests module (tests/contract.rs)
