//! Typed key/value context for failure diagnostics.
//!
//! This crate provides the data model that a failure carries from its raise
//! site to wherever it is finally reported: a closed [`Value`] union for the
//! supported context data types, a capture-time [`SourceLocation`], and the
//! [`Context`] bag that owns the type tag, the location, and an ordered
//! key/value store. Rendering lives in `tattle_render`; the failure taxonomy
//! and fluent building live in `tattle_failure`.

#![warn(missing_docs)]

pub mod context;
pub mod location;
pub mod value;

pub use context::Context;
pub use location::SourceLocation;
pub use value::{FromValue, Value};
