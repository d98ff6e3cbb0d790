// dbc-logic/tests/error.rs
// ============================================================================
// Module: Contract Error Tests
// Description: Regression coverage for `ContractError` behaviors.
// Purpose: Ensure the taxonomy constructors, kind dispatch, display, and
//          serialization are stable and provide actionable diagnostics.
// Dependencies: serde_json (for round-trip verification), dbc_logic::error
// ============================================================================
//! ## Overview
//! Integration tests for the contract error taxonomy. These tests exercise
//! the documented helpers on [`ContractError`] and [`ContractKind`] to
//! guarantee that category dispatch, messaging, and serialization contracts
//! remain predictable for downstream consumers.

// ============================================================================
// SECTION: Test Support
// ============================================================================

mod support;

use dbc_logic::ContractError;
use dbc_logic::ContractKind;
use support::TestResult;
use support::ensure;

#[test]
fn test_constructor_helpers() -> TestResult {
    let err = ContractError::precondition("value out of range");
    ensure(
        matches!(err, ContractError::Precondition(_)),
        "Expected Precondition for precondition helper",
    )?;

    let err = ContractError::illegal_state("not initialized");
    ensure(
        matches!(err, ContractError::IllegalState(_)),
        "Expected IllegalState for illegal_state helper",
    )?;

    let err = ContractError::postcondition("result not sorted");
    ensure(
        matches!(err, ContractError::Postcondition(_)),
        "Expected Postcondition for postcondition helper",
    )?;

    let err = ContractError::assertion("index drifted");
    ensure(matches!(err, ContractError::Assertion(_)), "Expected Assertion for assertion helper")?;
    Ok(())
}

#[test]
fn test_kind_dispatch() -> TestResult {
    ensure(
        ContractError::precondition("x").kind() == ContractKind::Precondition,
        "Expected precondition kind",
    )?;
    ensure(
        ContractError::illegal_state("x").kind() == ContractKind::IllegalState,
        "Expected illegal-state kind",
    )?;
    ensure(
        ContractError::postcondition("x").kind() == ContractKind::Postcondition,
        "Expected postcondition kind",
    )?;
    ensure(
        ContractError::assertion("x").kind() == ContractKind::Assertion,
        "Expected assertion kind",
    )?;
    Ok(())
}

#[test]
fn test_kind_names_are_stable() -> TestResult {
    ensure(ContractKind::Precondition.name() == "precondition", "Expected precondition name")?;
    ensure(ContractKind::IllegalState.name() == "illegal-state", "Expected illegal-state name")?;
    ensure(ContractKind::Postcondition.name() == "postcondition", "Expected postcondition name")?;
    ensure(ContractKind::Assertion.name() == "assertion", "Expected assertion name")?;
    ensure(
        format!("{}", ContractKind::IllegalState) == "illegal-state",
        "Expected Display to match the stable name",
    )?;
    Ok(())
}

#[test]
fn test_with_message_builds_each_variant() -> TestResult {
    let err = ContractKind::Postcondition.with_message("output drained");
    ensure(
        err == ContractError::Postcondition("output drained".to_string()),
        "Expected with_message to build the selected variant",
    )?;
    ensure(err.message() == "output drained", "Expected message accessor to pass through")?;
    Ok(())
}

#[test]
fn test_display() -> TestResult {
    let display = format!("{}", ContractError::precondition("value out of range"));
    ensure(
        display == "precondition violated: value out of range",
        "Expected display to lead with the category phrase",
    )?;

    let display = format!("{}", ContractError::assertion("index drifted"));
    ensure(
        display == "assertion failed: index drifted",
        "Expected assertion display to lead with the category phrase",
    )?;
    Ok(())
}

#[test]
fn test_error_trait_object() -> TestResult {
    let err: Box<dyn std::error::Error> = Box::new(ContractError::illegal_state("closed"));
    ensure(err.to_string() == "illegal state: closed", "Expected Error trait display")?;
    Ok(())
}

#[test]
fn test_serialization() -> TestResult {
    let err = ContractError::postcondition("result not sorted");
    let serialized = serde_json::to_string(&err)?;
    let deserialized: ContractError = serde_json::from_str(&serialized)?;
    ensure(err == deserialized, "Expected serde roundtrip to preserve error")?;

    let kind = ContractKind::Assertion;
    let serialized = serde_json::to_string(&kind)?;
    let deserialized: ContractKind = serde_json::from_str(&serialized)?;
    ensure(kind == deserialized, "Expected serde roundtrip to preserve kind")?;
    Ok(())
}
