//! Error types for timestamp formatting.

/// Errors that can occur when rendering a timestamp.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The format string contains an invalid or unsupported specifier.
    #[error("invalid timestamp format '{format}'")]
    InvalidFormat {
        /// The offending format string.
        format: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_format() {
        let err = ClockError::InvalidFormat {
            format: "%Y %".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid timestamp format '%Y %'");
    }
}
