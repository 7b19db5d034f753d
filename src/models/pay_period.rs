//! Resolved pay period model.
//!
//! This module contains the [`PayPeriod`] type: the dated window a single
//! statement covers, together with the year-to-date context used to scale
//! every per-period figure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pay period resolved from the configured pay date and an offset.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 30).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
///     period_days: 14,
///     ytd_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     periods_ytd: 12,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
/// assert_eq!(period.length_in_days(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of work covered (inclusive).
    pub start_date: NaiveDate,
    /// The last day of work covered (inclusive).
    pub end_date: NaiveDate,
    /// The check date for this period.
    pub pay_date: NaiveDate,
    /// The nominal length of a period for the pay frequency.
    pub period_days: u32,
    /// The later of January 1 of the pay year and the hire date.
    pub ytd_start: NaiveDate,
    /// Number of periods counted into year-to-date figures, including this one.
    pub periods_ytd: u32,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the worked window.
    pub fn length_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
