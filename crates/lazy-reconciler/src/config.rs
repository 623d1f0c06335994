//! Reconciler configuration
//!
//! Selects how fresh identifiers and change labels are rendered.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How new record identifiers are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdFormat {
    /// UUIDv7 text (time-ordered)
    #[default]
    UuidV7,

    /// Random non-negative 63-bit integer in base 10
    Decimal,
}

/// How change labels are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `Monday, 02-Jan-06 15:04:05 UTC`
    #[default]
    Rfc850,

    /// `2006-01-02T15:04:05Z`
    Rfc3339,
}

impl TimestampFormat {
    /// Render `at` as a change label
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use lazy_reconciler::TimestampFormat;
    ///
    /// let at = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    /// assert_eq!(TimestampFormat::Rfc850.render(&at), "Monday, 02-Jan-06 15:04:05 UTC");
    /// ```
    pub fn render(&self, at: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc850 => at.format("%A, %d-%b-%y %H:%M:%S UTC").to_string(),
            TimestampFormat::Rfc3339 => at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Configuration for identifier and label generation
///
/// # Examples
///
/// ```
/// use lazy_reconciler::{IdFormat, ReconcilerConfig, TimestampFormat};
///
/// let config = ReconcilerConfig::default();
/// assert_eq!(config.id_format, IdFormat::UuidV7);
/// assert_eq!(config.timestamp_format, TimestampFormat::Rfc850);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Identifier rendering
    pub id_format: IdFormat,

    /// Change label rendering
    pub timestamp_format: TimestampFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_config() {
        let config = ReconcilerConfig::default();
        assert_eq!(config.id_format, IdFormat::UuidV7);
        assert_eq!(config.timestamp_format, TimestampFormat::Rfc850);
    }

    #[test]
    fn test_rfc850_label() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 3, 22).unwrap();
        assert_eq!(
            TimestampFormat::Rfc850.render(&at),
            "Monday, 19-Oct-26 14:03:22 UTC"
        );
    }

    #[test]
    fn test_rfc3339_label() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 3, 22).unwrap();
        assert_eq!(TimestampFormat::Rfc3339.render(&at), "2026-10-19T14:03:22Z");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ReconcilerConfig {
            id_format: IdFormat::Decimal,
            timestamp_format: TimestampFormat::Rfc3339,
        };
        let serialized = serde_json::to_string(&config).unwrap();
        assert!(serialized.contains("\"decimal\""));
        assert!(serialized.contains("\"rfc3339\""));

        let deserialized: ReconcilerConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ReconcilerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReconcilerConfig::default());
    }
}
