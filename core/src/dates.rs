use chrono::{DateTime, NaiveDate, Utc};

/// Strict parse of a backend timestamp. RFC 3339 first, then the date-only
/// form (`YYYY-MM-DD`, midnight UTC) some legacy endpoints still send.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Lenient parse with a caller-supplied fallback. Invalid or missing strings
/// yield `fallback` so an invalid date value can never leak into date math.
pub fn parse_date_or(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(parse_date).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_date("2025-01-15T18:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 15, 16, 30, 0).unwrap());
    }

    #[test]
    fn parses_date_only_as_midnight_utc() {
        let parsed = parse_date("2025-01-15").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("2025-13-45").is_none());
    }

    #[test]
    fn falls_back_on_missing_or_invalid_input() {
        let fallback = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(parse_date_or(None, fallback), fallback);
        assert_eq!(parse_date_or(Some("garbage"), fallback), fallback);
        assert_ne!(
            parse_date_or(Some("2025-01-15T18:30:00Z"), fallback),
            fallback
        );
    }
}
