//! UTC and local timestamp rendering over explicit instants.

use crate::error::ClockError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

/// Format configuration for [`utc_stamp`].
#[derive(Clone, Debug)]
pub struct UtcStampConfig {
    /// A `strftime`-style format string.
    pub format: String,
}

impl UtcStampConfig {
    /// The ISO form, e.g. `2021-04-14T14:41:26.833393854Z`.
    pub fn iso() -> Self {
        Self {
            format: "%Y-%m-%dT%H:%M:%S%.9fZ".to_string(),
        }
    }
}

impl Default for UtcStampConfig {
    fn default() -> Self {
        Self::iso()
    }
}

/// Format configuration for [`local_stamp`].
///
/// The ISO form appends the UTC offset (e.g. `-0400`) in place of a zone
/// name, which is what the local clock can report without a timezone
/// database.
#[derive(Clone, Debug)]
pub struct LocalStampConfig {
    /// A `strftime`-style format string.
    pub format: String,
}

impl LocalStampConfig {
    /// The ISO form, e.g. `2021-04-14T10:41:26.833393854 -0400`.
    pub fn iso() -> Self {
        Self {
            format: "%Y-%m-%dT%H:%M:%S%.9f %z".to_string(),
        }
    }
}

impl Default for LocalStampConfig {
    fn default() -> Self {
        Self::iso()
    }
}

/// Renders `instant` with `format`, validating the format first.
fn render<Tz: TimeZone>(format: &str, instant: &DateTime<Tz>) -> Result<String, ClockError>
where
    Tz::Offset: fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.contains(&Item::Error) {
        return Err(ClockError::InvalidFormat {
            format: format.to_string(),
        });
    }
    Ok(instant.format_with_items(items.into_iter()).to_string())
}

/// Formats an explicit UTC instant.
pub fn utc_stamp(config: &UtcStampConfig, instant: DateTime<Utc>) -> Result<String, ClockError> {
    render(&config.format, &instant)
}

/// Formats the current time in UTC.
pub fn now_utc(config: &UtcStampConfig) -> Result<String, ClockError> {
    utc_stamp(config, Utc::now())
}

/// Formats an explicit instant in the local timezone.
pub fn local_stamp(
    config: &LocalStampConfig,
    instant: DateTime<Local>,
) -> Result<String, ClockError> {
    render(&config.format, &instant)
}

/// Formats the current time in the local timezone.
pub fn now_local(config: &LocalStampConfig) -> Result<String, ClockError> {
    local_stamp(config, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn iso_format_known_instant() {
        let instant = Utc
            .with_ymd_and_hms(2021, 4, 14, 14, 41, 26)
            .unwrap()
            .with_nanosecond(833_393_854)
            .unwrap();
        let result = utc_stamp(&UtcStampConfig::iso(), instant).unwrap();
        assert_eq!(result, "2021-04-14T14:41:26.833393854Z");
    }

    #[test]
    fn custom_format() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 25, 8, 30, 0).unwrap();
        let config = UtcStampConfig {
            format: "%Y/%m/%d %H:%M:%S".to_string(),
        };
        assert_eq!(
            utc_stamp(&config, instant).unwrap(),
            "2023/12/25 08:30:00"
        );
    }

    #[test]
    fn leap_year_date() {
        let instant = Utc
            .with_ymd_and_hms(2024, 2, 29, 23, 59, 59)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();
        let result = utc_stamp(&UtcStampConfig::iso(), instant).unwrap();
        assert_eq!(result, "2024-02-29T23:59:59.999999999Z");
    }

    #[test]
    fn epoch() {
        let instant = Utc.timestamp_opt(0, 0).unwrap();
        let result = utc_stamp(&UtcStampConfig::iso(), instant).unwrap();
        assert_eq!(result, "1970-01-01T00:00:00.000000000Z");
    }

    #[test]
    fn invalid_format_is_an_error() {
        let config = UtcStampConfig {
            format: "%Y %".to_string(),
        };
        let err = utc_stamp(&config, Utc::now()).unwrap_err();
        assert!(matches!(err, ClockError::InvalidFormat { .. }));
    }

    #[test]
    fn local_stamp_renders_with_offset() {
        let instant = Local.timestamp_opt(0, 0).unwrap();
        let result = local_stamp(&LocalStampConfig::iso(), instant).unwrap();
        assert!(!result.is_empty());
        // The offset field is always present in the ISO form.
        assert!(result.contains(' '));
    }

    #[test]
    fn now_wrappers_render() {
        assert!(now_utc(&UtcStampConfig::iso()).is_ok());
        assert!(now_local(&LocalStampConfig::iso()).is_ok());
    }
}
