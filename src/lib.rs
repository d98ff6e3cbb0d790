// dbc-logic/src/lib.rs
// ============================================================================
// Module: Contract Root
// Description: Public API surface for the design-by-contract utilities.
// Purpose: Wire together core modules, re-exports, and the check macros.
// Dependencies: crate::{contract, error, failure, guard, presence}
// ============================================================================

//! ## Overview
//! This crate exposes a minimal design-by-contract layer: role-named checks
//! over booleans and optional values, a categorized error taxonomy, an
//! always-failing escape hatch, and exhaustiveness markers. Every check is a
//! pure synchronous call that either passes a value through or returns one
//! categorized [`ContractError`].
//!
//! ```
//! use dbc_logic::ContractResult;
//! use dbc_logic::requires_some;
//! use dbc_logic::requires_with;
//!
//! fn connect(port: Option<u16>) -> ContractResult<u16> {
//!     let port = requires_some(port)?;
//!     requires_with(port >= 1024, "port must be unprivileged")?;
//!     Ok(port)
//! }
//!
//! assert_eq!(connect(Some(8080)), Ok(8080));
//! assert!(connect(None).is_err());
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod contract;
pub mod error;
pub mod failure;
pub mod guard;
pub mod presence;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use contract::ASSERTS_DEFAULT_MESSAGE;
pub use contract::CHECKS_DEFAULT_MESSAGE;
pub use contract::ENSURES_DEFAULT_MESSAGE;
pub use contract::REQUIRES_DEFAULT_MESSAGE;
pub use contract::asserts;
pub use contract::asserts_with;
pub use contract::checks;
pub use contract::checks_with;
pub use contract::ensures;
pub use contract::ensures_with;
pub use contract::requires;
pub use contract::requires_with;
pub use error::ContractError;
pub use error::ContractKind;
pub use error::ContractResult;
pub use failure::FAIL_DEFAULT_MESSAGE;
pub use failure::UNREACHABLE_DEFAULT_MESSAGE;
pub use failure::fail;
pub use failure::fail_as;
pub use failure::fail_with;
pub use failure::unreachable_case;
pub use failure::unreachable_state;
pub use failure::unreachable_state_with;
pub use guard::use_if;
pub use guard::use_if_as;
pub use presence::PRESENCE_DEFAULT_MESSAGE;
pub use presence::checks_some;
pub use presence::checks_some_with;
pub use presence::ensures_some;
pub use presence::ensures_some_with;
pub use presence::is_defined;
pub use presence::requires_some;
pub use presence::requires_some_with;

// ============================================================================
// SECTION: Check Macros
// ============================================================================

/// Checks a precondition, propagating the violation with `?`
///
/// Accepts a bare condition (default diagnostic), a format string with
/// arguments, or any message expression:
///
/// ```
/// use dbc_logic::ContractResult;
///
/// fn set_ratio(ratio: f64) -> ContractResult<f64> {
///     dbc_logic::requires!(ratio.is_finite(), "ratio {ratio} must be finite");
///     Ok(ratio.clamp(0.0, 1.0))
/// }
///
/// assert!(set_ratio(0.25).is_ok());
/// assert!(set_ratio(f64::NAN).is_err());
/// ```
#[macro_export]
macro_rules! requires {
    ($condition:expr $(,)?) => {
        $crate::contract::requires($condition)?
    };
    ($condition:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::contract::requires_with($condition, ::std::format!($fmt $(, $arg)*))?
    };
    ($condition:expr, $message:expr $(,)?) => {
        $crate::contract::requires_with($condition, $message)?
    };
}

/// Checks a state invariant, propagating the violation with `?`
///
/// Accepts the same call shapes as [`requires!`].
#[macro_export]
macro_rules! checks {
    ($condition:expr $(,)?) => {
        $crate::contract::checks($condition)?
    };
    ($condition:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::contract::checks_with($condition, ::std::format!($fmt $(, $arg)*))?
    };
    ($condition:expr, $message:expr $(,)?) => {
        $crate::contract::checks_with($condition, $message)?
    };
}

/// Checks a postcondition, propagating the violation with `?`
///
/// Accepts the same call shapes as [`requires!`].
#[macro_export]
macro_rules! ensures {
    ($condition:expr $(,)?) => {
        $crate::contract::ensures($condition)?
    };
    ($condition:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::contract::ensures_with($condition, ::std::format!($fmt $(, $arg)*))?
    };
    ($condition:expr, $message:expr $(,)?) => {
        $crate::contract::ensures_with($condition, $message)?
    };
}

/// Checks an assertion, propagating the violation with `?`
///
/// Accepts the same call shapes as [`requires!`].
#[macro_export]
macro_rules! asserts {
    ($condition:expr $(,)?) => {
        $crate::contract::asserts($condition)?
    };
    ($condition:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::contract::asserts_with($condition, ::std::format!($fmt $(, $arg)*))?
    };
    ($condition:expr, $message:expr $(,)?) => {
        $crate::contract::asserts_with($condition, $message)?
    };
}

/// Raises a contract violation and returns early
///
/// Mirrors the escape-hatch call shapes: no arguments raises the default
/// illegal-state diagnostic, a message raises illegal state with it, and a
/// leading [`ContractKind`] selects the category:
///
/// ```
/// use dbc_logic::ContractKind;
/// use dbc_logic::ContractResult;
///
/// fn pick(slot: Option<u8>) -> ContractResult<u8> {
///     match slot {
///         Some(value) => Ok(value),
///         None => dbc_logic::fail!(ContractKind::Precondition, "no slot provided"),
///     }
/// }
///
/// assert_eq!(pick(Some(3)), Ok(3));
/// assert!(pick(None).is_err());
/// ```
#[macro_export]
macro_rules! fail {
    () => {
        return $crate::failure::fail()
    };
    ($kind:path, $($message:tt)+) => {
        return $crate::failure::fail_as($kind, ::std::format!($($message)+))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        return $crate::failure::fail_with(::std::format!($fmt $(, $arg)*))
    };
    ($message:expr $(,)?) => {
        return $crate::failure::fail_with($message)
    };
}
