//! Rendering backends for diagnostic contexts and cause chains.
//!
//! Two independent serializers consume a [`Context`](tattle_context::Context)
//! read-only: [`to_text`] produces the multi-line human-readable report and
//! [`to_json`] the machine-parseable JSON document. [`chain_to_text`] walks a
//! chain of nested failures and renders one line per element with increasing
//! indentation. All of them are total over a well-formed context; they
//! never fail themselves.

#![warn(missing_docs)]

pub mod chain;
pub mod human;
pub mod json;

pub use chain::{chain_to_text, error_chain_to_text, format_chain};
pub use human::to_text;
pub use json::{escape_json, to_json};
