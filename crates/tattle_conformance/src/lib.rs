//! A worked domain taxonomy and fallible helpers used by the conformance
//! tests to exercise the full raise → propagate → render flow.

#![warn(missing_docs)]

use tattle_contract::expects;
use tattle_failure::{define_failure, ContractViolation, Fluent, GenericFailure};

define_failure!(
    /// Raised when a manifest line cannot be parsed.
    pub ManifestFailure: GenericFailure
);

define_failure!(
    /// Raised when a store rejects a manifest; chains the parse failure
    /// that triggered the rejection.
    pub StorageFailure: GenericFailure
);

/// Parses one `name=value` manifest line.
pub fn parse_manifest_line(line: &str) -> Result<(String, String), ManifestFailure> {
    match line.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ManifestFailure::new()
            .message(format_args!("malformed manifest line"))
            .with("line", line)),
    }
}

/// Parses a whole manifest, rejecting it on the first malformed line.
///
/// A parse failure is not surfaced directly: it becomes the cause of a
/// [`StorageFailure`] carrying the line number, so callers see the full
/// chain.
pub fn load_manifest(text: &str) -> Result<Vec<(String, String)>, StorageFailure> {
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_manifest_line(line) {
            Ok(entry) => entries.push(entry),
            Err(cause) => {
                return Err(StorageFailure::caused_by(cause)
                    .message(format_args!("manifest rejected"))
                    .with("line_number", (index + 1) as u64));
            }
        }
    }
    Ok(entries)
}

/// Reserves `len` slots out of `cap`, guarded by a precondition.
pub fn reserve_slots(len: u64, cap: u64) -> Result<u64, ContractViolation> {
    expects!(len <= cap, ContractViolation, "len" => len, "cap" => cap);
    Ok(cap - len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tattle_failure::Failure;

    #[test]
    fn parse_accepts_well_formed_lines() {
        let (name, value) = parse_manifest_line("answer = 42").unwrap();
        assert_eq!(name, "answer");
        assert_eq!(value, "42");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let failure = parse_manifest_line("no separator here").unwrap_err();
        assert_eq!(
            failure.context().get_as::<String>("line"),
            Some("no separator here".to_string())
        );
    }

    #[test]
    fn load_chains_the_parse_failure() {
        let failure = load_manifest("a=1\nbroken\nb=2").unwrap_err();
        assert_eq!(failure.context().get_as::<u64>("line_number"), Some(2));
        assert!(failure.cause().is_some());
    }
}
