// dbc-logic/src/guard.rs
// ============================================================================
// Module: Predicate Guard Combinator
// Description: Reusable narrowing guards built from arbitrary predicates.
// Purpose: Bind a domain predicate to a violation category so the resulting
//          closure checks and passes values through in one step.
// Dependencies: crate::contract, crate::error
// ============================================================================

//! ## Overview
//! `use_if` composes an arbitrary domain predicate with the contract
//! machinery: the returned closure evaluates the predicate against its input
//! and hands the input back unchanged when the predicate holds. This extends
//! narrowing beyond presence to any property a predicate can decide.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::contract::REQUIRES_DEFAULT_MESSAGE;
use crate::error::ContractKind;
use crate::error::ContractResult;

// ============================================================================
// SECTION: Guard Constructors
// ============================================================================

/// Binds a predicate to the precondition role with the default diagnostic
///
/// The returned guard is reusable; each call evaluates the predicate once
/// and returns the input itself on success.
#[must_use]
pub fn use_if<T, P>(predicate: P) -> impl Fn(T) -> ContractResult<T>
where
    P: Fn(&T) -> bool,
{
    use_if_as(predicate, ContractKind::Precondition, REQUIRES_DEFAULT_MESSAGE)
}

/// Binds a predicate to an explicit violation category and message
///
/// Each rejection raises a fresh error of the selected category carrying the
/// configured message.
#[must_use]
pub fn use_if_as<T, P>(
    predicate: P,
    kind: ContractKind,
    message: impl Into<String>,
) -> impl Fn(T) -> ContractResult<T>
where
    P: Fn(&T) -> bool,
{
    let message = message.into();
    move |value| {
        if predicate(&value) { Ok(value) } else { Err(kind.with_message(message.clone())) }
    }
}

// Tests are in the central tests module (tests/guard.rs)
