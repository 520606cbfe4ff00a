use chrono::{DateTime, Utc};
use thiserror::Error;

/// A date string that is not an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimestampError {
    pub input: String,
    pub reason: String,
}

/// Parse a forge timestamp (RFC 3339, e.g. `2023-01-15T10:30:00Z`) into UTC.
///
/// Offsets other than `Z` are normalized to UTC; the instant is preserved.
pub fn parse_commit_time(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(input)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| TimestampError {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_utc_instant() {
        let parsed = parse_commit_time("2023-01-15T10:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn normalizes_offset_to_utc() {
        let offset = parse_commit_time("2023-01-15T12:30:00+02:00").unwrap();
        let zulu = parse_commit_time("2023-01-15T10:30:00Z").unwrap();
        assert_eq!(offset, zulu);
    }

    #[test]
    fn round_trips_without_loss() {
        let parsed = parse_commit_time("2019-04-29T18:36:45Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2019-04-29T18:36:45+00:00");
        assert_eq!(parsed.timestamp(), 1556563005);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_commit_time("not-a-date").unwrap_err();
        assert_eq!(err.input, "not-a-date");
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn rejects_date_without_time() {
        // RFC 3339 requires the time part; a bare date is not a timestamp.
        assert!(parse_commit_time("2023-01-15").is_err());
    }
}
