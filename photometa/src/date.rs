//! Date and time parsing for both metadata standards.
//!
//! Exif always writes `YYYY:MM:DD HH:MM:SS`, with no zone. XMP uses a subset
//! of ISO 8601, where everything past the year is optional.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use photometa_types::value::Timestamp;

/// Formats that Exif date/time fields show up in.
///
/// The first is the standard one. The others are written by software that
/// didn't read the standard.
const EXIF_FORMATS: &[&str] = &[
    "%Y:%m:%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y:%m:%d %H:%M",
];

/// ISO 8601 formats with a zone designator.
const ISO_ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// ISO 8601 formats without one.
const ISO_NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses one Exif date/time, like `2024:05:01 10:30:00`.
///
/// Exif dates have no zone, so the result has no offset.
pub fn parse_exif_datetime(raw: &str) -> Option<Timestamp> {
    let s = clean(raw);

    let parsed = EXIF_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok());

    if parsed.is_none() {
        log::trace!("`{s}` isn't an Exif date/time.");
    }

    parsed.map(Timestamp::from)
}

/// Parses an Exif date alone, like `2024:05:01`. The time is midnight.
pub fn parse_exif_date(raw: &str) -> Option<Timestamp> {
    let s = clean(raw);

    ["%Y:%m:%d", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| Timestamp::from(d.and_time(NaiveTime::MIN)))
}

/// Parses an XMP date, which may be partial.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and `YYYY-MM-DDThh:mm[:ss[.s]]`
/// with an optional zone designator (`Z` or `+hh:mm`). Partial dates land on
/// the first day of their period, at midnight.
///
/// ```
/// use photometa::date::parse_xmp_date;
///
/// let ts = parse_xmp_date("2024-05-01T10:30:00Z").unwrap();
/// assert_eq!(ts.to_utc().unwrap().to_rfc3339(), "2024-05-01T10:30:00+00:00");
///
/// let year_only = parse_xmp_date("1999").unwrap();
/// assert_eq!(year_only.to_string(), "1999-01-01T00:00:00");
/// ```
pub fn parse_xmp_date(raw: &str) -> Option<Timestamp> {
    let s = clean(raw);

    // chrono's `%:z` wants a numeric offset, so spell out UTC
    let zoned: std::borrow::Cow<str> = match s.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00").into(),
        None => s.into(),
    };

    if let Some(dt) = ISO_ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&zoned, fmt).ok())
    {
        return Some(Timestamp::new(dt.naive_local(), Some(*dt.offset())));
    }

    if let Some(naive) = ISO_NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(Timestamp::from(naive));
    }

    // partial dates. chrono can't parse a date without a day, so pad it out
    let padded: String = match s.len() {
        4 => format!("{s}-01-01"),
        7 => format!("{s}-01"),
        _ => s.to_string(),
    };

    let parsed = NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .map(|d| Timestamp::from(d.and_time(NaiveTime::MIN)));

    if parsed.is_none() {
        log::trace!("`{s}` isn't an XMP date.");
    }

    parsed
}

/// Parses a date in whichever format it happens to be in.
///
/// Tries Exif first, then XMP.
pub fn parse_any(raw: &str) -> Option<Timestamp> {
    parse_exif_datetime(raw).or_else(|| parse_xmp_date(raw))
}

/// Parses an Exif offset field, like `+02:00` or `-05:30`.
pub fn parse_offset(raw: &str) -> Option<FixedOffset> {
    clean(raw)
        .parse::<FixedOffset>()
        .inspect_err(|e| log::warn!("Ignoring unparsable offset `{raw}`. err: {e}"))
        .ok()
}

/// Removes padding that writers leave around dates.
fn clean(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::{parse_any, parse_exif_date, parse_exif_datetime, parse_offset, parse_xmp_date};
    use crate::util::logger;

    #[test]
    fn exif_format_parses() {
        logger();

        let ts = parse_exif_datetime("2023:07:04 09:30:15").expect("standard Exif date");
        assert_eq!(ts.to_string(), "2023-07-04T09:30:15");
        assert_eq!(ts.offset, None);

        // with a trailing NUL, like right off the wire
        assert!(parse_exif_datetime("2023:07:04 09:30:15\0").is_some());

        // fractional seconds are allowed
        let frac = parse_exif_datetime("2023:07:04 09:30:15.25").expect("fractional seconds");
        assert_eq!(frac.to_string(), "2023-07-04T09:30:15.250");
    }

    /// Cameras with no clock set write all zeroes.
    #[test]
    fn blank_exif_dates_are_rejected() {
        logger();
        assert_eq!(parse_exif_datetime("0000:00:00 00:00:00"), None);
        assert_eq!(parse_exif_datetime("    :  :     :  :  "), None);
        assert_eq!(parse_exif_datetime(""), None);
    }

    #[test]
    fn exif_date_alone() {
        logger();
        let ts = parse_exif_date("2021:12:31").expect("GPS date stamp");
        assert_eq!(ts.to_string(), "2021-12-31T00:00:00");
    }

    #[test]
    fn xmp_dates_of_every_precision() {
        logger();

        assert_eq!(parse_xmp_date("2024").unwrap().to_string(), "2024-01-01T00:00:00");
        assert_eq!(parse_xmp_date("2024-05").unwrap().to_string(), "2024-05-01T00:00:00");
        assert_eq!(
            parse_xmp_date("2024-05-17").unwrap().to_string(),
            "2024-05-17T00:00:00"
        );
        assert_eq!(
            parse_xmp_date("2024-05-17T08:15").unwrap().to_string(),
            "2024-05-17T08:15:00"
        );

        let zoned = parse_xmp_date("2024-05-17T08:15:30.5-07:00").expect("zoned date");
        assert_eq!(zoned.offset, FixedOffset::west_opt(7 * 3600));
        assert_eq!(
            zoned.to_utc().unwrap().to_rfc3339(),
            "2024-05-17T15:15:30.500+00:00"
        );
    }

    #[test]
    fn garbage_isnt_a_date() {
        logger();
        assert_eq!(parse_xmp_date("yesterday"), None);
        assert_eq!(parse_xmp_date("2024-13-01"), None);
        assert_eq!(parse_any("not a date"), None);
    }

    #[test]
    fn parse_any_accepts_both_styles() {
        logger();
        assert_eq!(parse_any("2020:02:02 02:02:02"), parse_any("2020-02-02T02:02:02"));
    }

    #[test]
    fn offsets() {
        logger();
        assert_eq!(parse_offset("+02:00"), FixedOffset::east_opt(2 * 3600));
        assert_eq!(parse_offset("-05:30"), FixedOffset::west_opt(5 * 3600 + 1800));
        assert_eq!(parse_offset("   :  "), None);
    }
}
