//! Serde adapter for dates printed on statements as `MM/DD/YYYY`.
//!
//! Use with `#[serde(with = "statement_date")]` on a [`NaiveDate`] field.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// The `chrono` format string for statement dates.
pub const STATEMENT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Formats a date the way statements print it.
///
/// # Example
///
/// ```
/// use paystub_engine::models::format_statement_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
/// assert_eq!(format_statement_date(date), "06/04/2024");
/// ```
pub fn format_statement_date(date: NaiveDate) -> String {
    date.format(STATEMENT_DATE_FORMAT).to_string()
}

/// Serializes a date as `MM/DD/YYYY`.
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_statement_date(*date))
}

/// Deserializes a date from `MM/DD/YYYY`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, STATEMENT_DATE_FORMAT).map_err(serde::de::Error::custom)
}
