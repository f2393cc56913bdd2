//! Failure taxonomy, fluent context building, and cause-chain linkage.
//!
//! A failure type is declared in one line with [`define_failure!`], naming
//! its parent kind. Every declared type owns a [`Context`], captures its
//! construction site, chains context fluently through [`Fluent`] without
//! losing its concrete type, and is matchable at any ancestor kind via
//! [`Failure::is_kind`], the result-type rendition of "catch by base
//! class". The cause chain surfaces through `std::error::Error::source`, so
//! declared failures interoperate with ordinary error handling.

#![warn(missing_docs)]

pub mod failure;
pub mod taxonomy;

pub use failure::{write_summary, Failure, FailureKind, Fluent};
pub use taxonomy::{AssertionFailure, ContractViolation, GenericFailure};

// Re-exported for `define_failure!` expansions and for downstream crates
// that only want one `use`.
pub use tattle_context::{Context, FromValue, SourceLocation, Value};
