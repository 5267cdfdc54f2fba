//! Reservation date parsing.
//!
//! Dates arrive as eight ASCII digits (`YYYYMMDD`). A procurement date
//! covers the day from its first instant; a return date runs to the last
//! representable microsecond of the day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

/// Human-readable description of the accepted date format.
pub const DATE_FORMAT_HINT: &str = "YYYYMMDD";

/// Parses an eight-digit `YYYYMMDD` string into a calendar date.
///
/// `field` names the request parameter and is carried into the error.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `raw` is not exactly eight ASCII
/// digits or does not name a real calendar date.
///
/// # Examples
///
/// ```
/// use streserve::reservation::parse_date;
///
/// let date = parse_date("dateprocured", "20180601").unwrap();
/// assert_eq!(date.to_string(), "2018-06-01");
///
/// assert!(parse_date("dateprocured", "20180231").is_err());
/// assert!(parse_date("dateprocured", "2018-06-01").is_err());
/// ```
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    let invalid = |reason: &str| Error::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(&format!(
            "expected eight digits in {DATE_FORMAT_HINT} form"
        )));
    }

    // All eight bytes are ASCII digits, so these parses cannot fail.
    let year: i32 = raw[0..4].parse().map_err(|_| invalid("bad year"))?;
    let month: u32 = raw[4..6].parse().map_err(|_| invalid("bad month"))?;
    let day: u32 = raw[6..8].parse().map_err(|_| invalid("bad day"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("no such calendar date"))
}

/// Combines a date with midnight.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Combines a date with the last microsecond of the day.
#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999999 always exists
    let last = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);
    date.and_time(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("dateprocured", "20180601").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2018, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_date("d", "20200229").is_ok());
        assert!(parse_date("d", "20190229").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let err = parse_date("dateprocured", "20180231").unwrap_err();
        assert_eq!(err.kind(), "InvalidDate");
        assert!(err.to_string().contains("dateprocured"));
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for raw in ["", "2018061", "201806011", "2018-6-1", "abcdefgh", " 20180601", "+2018061"] {
            assert!(parse_date("d", raw).is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Eight bytes that are not all ASCII digits
        assert!(parse_date("d", "２０１８").is_err());
    }

    #[test]
    fn test_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2018, 6, 1).unwrap();
        assert_eq!(format!("{:?}", start_of_day(date)), "2018-06-01T00:00:00");
    }

    #[test]
    fn test_end_of_day() {
        let date = NaiveDate::from_ymd_opt(2018, 6, 10).unwrap();
        assert_eq!(format!("{:?}", end_of_day(date)), "2018-06-10T23:59:59.999999");
        assert!(end_of_day(date) > start_of_day(date));
    }
}
