//! Parsing of persisted activation-bound timestamps.
//!
//! The persistence layer stores activation bounds as `Y-m-d H:i:s` strings
//! and uses an all-zero timestamp to mean "bound not set". This module maps
//! those strings onto `Option<DateTime<Utc>>` so the evaluators never see
//! the sentinel.

use chrono::{DateTime, NaiveDateTime, Utc};
use shopkit_core::{DomainError, DomainResult};

/// Format of persisted activation bounds.
pub const PERSISTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reserved "zero" timestamp meaning "bound not set".
pub const SENTINEL: &str = "0000-00-00 00:00:00";

/// Parse a persisted activation bound.
///
/// The sentinel value and the empty string map to `None`; anything else
/// must parse in [`PERSISTED_FORMAT`] or is rejected as a validation error.
pub fn parse_activation_bound(raw: &str) -> DomainResult<Option<DateTime<Utc>>> {
    if raw.is_empty() || raw == SENTINEL {
        return Ok(None);
    }
    let naive = NaiveDateTime::parse_from_str(raw, PERSISTED_FORMAT)
        .map_err(|e| DomainError::validation(format!("activation bound {raw:?}: {e}")))?;
    Ok(Some(naive.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn sentinel_means_no_bound() {
        assert_eq!(parse_activation_bound(SENTINEL).unwrap(), None);
    }

    #[test]
    fn empty_string_means_no_bound() {
        assert_eq!(parse_activation_bound("").unwrap(), None);
    }

    #[test]
    fn well_formed_bound_parses_as_utc() {
        let parsed = parse_activation_bound("2024-06-15 12:30:00").unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn malformed_bound_is_a_validation_error() {
        let err = parse_activation_bound("15.06.2024").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("15.06.2024")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
