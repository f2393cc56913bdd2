//! Contract checks, assertions, and the pluggable assert-handler strategy.
//!
//! The three contract macros ([`expects!`], [`ensures!`], [`invariant!`])
//! are always active: when the condition is false they raise the named
//! failure kind with `condition` and `check_type` context keys populated.
//! [`asserts!`] is the debug-only variant that also records a formatted
//! message; it compiles to a true no-op when debug checks are disabled.
//! [`soft_assert!`] is the legacy-style assertion: it formats a message
//! string and dispatches it to the process-wide [`AssertHandler`], which
//! either terminates the process or raises a structured failure.

#![warn(missing_docs)]

pub mod handler;
pub mod macros;

pub use handler::{
    assert_handler, set_assert_handler, AssertHandler, RaiseHandler, TerminateHandler,
};

// Re-exported for macro expansions.
pub use tattle_failure::{AssertionFailure, ContractViolation, Failure, Fluent, GenericFailure};
