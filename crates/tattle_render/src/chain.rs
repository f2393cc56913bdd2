//! Recursive cause-chain unwinding into indented text.

use std::error::Error as StdError;
use tattle_failure::Failure;

/// Appends `failure`'s chain to `out`, one line per element.
///
/// The element at `level` 0 is appended with no leading indentation; every
/// deeper element is prefixed with a newline and `level * indent` spaces.
/// Recurses on the caused-by predecessor until the chain ends, so the
/// deepest cause lands last. Terminates in time proportional to chain
/// depth; a cyclic chain is an unchecked precondition violation.
pub fn format_chain(out: &mut String, failure: &dyn Failure, indent: usize, level: usize) {
    if level == 0 {
        out.push_str(&format!("{failure}"));
    } else {
        out.push_str(&format!("\n{:width$}{failure}", "", width = level * indent));
    }

    if let Some(cause) = Failure::cause(failure) {
        format_chain(out, cause, indent, level + 1);
    }
}

/// Renders `failure` and its chain of causes as a single indented string.
pub fn chain_to_text(failure: &dyn Failure, indent: usize) -> String {
    let mut out = String::new();
    format_chain(&mut out, failure, indent, 0);
    out
}

/// Renders a plain `std::error::Error` source chain the same way.
///
/// Each element contributes its `Display` text; chains built from declared
/// failures produce the same output as [`chain_to_text`], and foreign
/// errors mixed into a chain render with their own `Display`.
pub fn error_chain_to_text(error: &(dyn StdError + 'static), indent: usize) -> String {
    let mut out = String::new();
    let mut level = 0;
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(e) = current {
        if level == 0 {
            out.push_str(&format!("{e}"));
        } else {
            out.push_str(&format!("\n{:width$}{e}", "", width = level * indent));
        }
        level += 1;
        current = e.source();
    }
    out
}
