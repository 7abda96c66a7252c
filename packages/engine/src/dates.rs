//! Three-state date classification.
//!
//! Event and open-call dates arrive as raw, partially-trustworthy strings.
//! Each raw value is classified exactly once, at enrichment, into a
//! [`DateValue`]; every downstream branch matches on the three states instead
//! of re-parsing or doing arithmetic on a possibly-garbage timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A date field as it actually exists in the data: present and well-formed,
/// absent, or present but unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DateValue {
    Known(DateTime<Utc>),
    Missing,
    Invalid,
}

impl DateValue {
    /// Classify a raw optional date string.
    ///
    /// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (taken as
    /// midnight UTC). Empty or whitespace-only strings count as missing,
    /// anything else present-but-unparseable is `Invalid`.
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(s) = raw else {
            return DateValue::Missing;
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return DateValue::Missing;
        }
        if let Ok(dt) = trimmed.parse::<DateTime<Utc>>() {
            return DateValue::Known(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return DateValue::Known(dt.and_utc());
            }
        }
        DateValue::Invalid
    }

    /// The instant, if this value is well-formed.
    pub fn known(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::Known(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, DateValue::Known(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DateValue::Missing)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, DateValue::Invalid)
    }

    /// Millisecond timestamp, substituting `sentinel` for missing or invalid
    /// values so comparator arithmetic stays total.
    pub fn timestamp_millis_or(&self, sentinel: i64) -> i64 {
        match self {
            DateValue::Known(dt) => dt.timestamp_millis(),
            _ => sentinel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn classifies_rfc3339() {
        let dv = DateValue::classify(Some("2025-03-15T12:30:00Z"));
        assert_eq!(
            dv.known(),
            Some(Utc.with_ymd_and_hms(2025, 3, 15, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn classifies_plain_date_as_midnight_utc() {
        let dv = DateValue::classify(Some("2025-03-15"));
        assert_eq!(
            dv.known(),
            Some(Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn absent_and_blank_are_missing() {
        assert!(DateValue::classify(None).is_missing());
        assert!(DateValue::classify(Some("")).is_missing());
        assert!(DateValue::classify(Some("   ")).is_missing());
    }

    #[test]
    fn garbage_is_invalid_not_a_panic() {
        assert!(DateValue::classify(Some("TBD")).is_invalid());
        assert!(DateValue::classify(Some("2025-13-45")).is_invalid());
        assert!(DateValue::classify(Some("soonish")).is_invalid());
    }

    #[test]
    fn sentinel_substitution_is_total() {
        assert_eq!(DateValue::Missing.timestamp_millis_or(0), 0);
        assert_eq!(DateValue::Invalid.timestamp_millis_or(i64::MAX), i64::MAX);
        let dv = DateValue::classify(Some("1970-01-01"));
        assert_eq!(dv.timestamp_millis_or(99), 0);
    }
}
