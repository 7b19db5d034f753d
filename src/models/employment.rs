//! Employment configuration model and related types.
//!
//! This module defines the [`EmploymentConfiguration`] record that drives every
//! pay statement calculation, along with the [`PayFrequency`] and
//! [`EmploymentType`] enums.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often the employee is paid.
///
/// Semi-monthly and monthly periods are approximated by a fixed number of days
/// so that historical statements can be produced by plain day subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid every 7 days, 52 periods per year.
    #[serde(alias = "Weekly")]
    Weekly,
    /// Paid every 14 days, 26 periods per year.
    #[serde(alias = "Bi-Weekly")]
    BiWeekly,
    /// Paid twice a month (modeled as 15 days), 24 periods per year.
    #[serde(alias = "Semi-Monthly")]
    SemiMonthly,
    /// Paid once a month (modeled as 30 days), 12 periods per year.
    #[serde(alias = "Monthly")]
    Monthly,
}

impl PayFrequency {
    /// Returns the length of one pay period in calendar days.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::models::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::BiWeekly.period_days(), 14);
    /// assert_eq!(PayFrequency::Monthly.period_days(), 30);
    /// ```
    pub fn period_days(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 7,
            PayFrequency::BiWeekly => 14,
            PayFrequency::SemiMonthly => 15,
            PayFrequency::Monthly => 30,
        }
    }

    /// Returns the number of pay periods in a year, used to spread a salary.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::BiWeekly => 26,
            PayFrequency::SemiMonthly => 24,
            PayFrequency::Monthly => 12,
        }
    }

    /// Returns the label printed on statements (e.g. "Bi-Weekly").
    pub fn label(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Weekly",
            PayFrequency::BiWeekly => "Bi-Weekly",
            PayFrequency::SemiMonthly => "Semi-Monthly",
            PayFrequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Paid per hour worked, with overtime above 40 hours.
    #[serde(alias = "Hourly")]
    Hourly,
    /// Paid a fixed annual salary spread evenly across pay periods.
    #[serde(alias = "Salary")]
    Salary,
}

/// A postal address printed on the statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    #[serde(default)]
    pub street: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State or region code.
    #[serde(default)]
    pub state: String,
    /// Postal code.
    #[serde(default)]
    pub zip: String,
}

impl Address {
    /// Formats the address on a single line, skipping empty parts.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::models::Address;
    ///
    /// let address = Address {
    ///     street: "42 Wallaby Way".to_string(),
    ///     city: "Sydney".to_string(),
    ///     state: "TX".to_string(),
    ///     zip: "76000".to_string(),
    /// };
    /// assert_eq!(address.single_line(), "42 Wallaby Way, Sydney, TX 76000");
    /// ```
    pub fn single_line(&self) -> String {
        let region = [self.state.as_str(), self.zip.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        [self.street.as_str(), self.city.as_str(), region.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Time-off balances shown on the statement. The engine never computes these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffBalances {
    /// Vacation hours available.
    #[serde(default)]
    pub vacation_balance: Decimal,
    /// Vacation hours used this year.
    #[serde(default)]
    pub vacation_used: Decimal,
    /// Sick hours available.
    #[serde(default)]
    pub sick_balance: Decimal,
    /// Sick hours used this year.
    #[serde(default)]
    pub sick_used: Decimal,
}

/// The employment parameters a pay statement is derived from.
///
/// Identity and address fields are carried through to rendered statements
/// untouched; only the dates, pay settings and tax rates feed the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentConfiguration {
    /// Employer name.
    pub company_name: String,
    /// Employer address.
    pub company_address: Address,
    /// Employee name.
    pub employee_name: String,
    /// Employee address.
    pub employee_address: Address,
    /// Employer-assigned employee identifier.
    pub employee_id: String,
    /// Last four digits of the employee's SSN.
    pub ssn_last4: String,
    /// Last four digits of the direct-deposit account.
    pub account_last4: String,
    /// Filing status printed on the statement (e.g. "Single").
    pub marital_status: String,
    /// Number of withholding exemptions claimed.
    pub exemptions: u32,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The most recent check date; statement offset 0 is paid on this date.
    pub pay_date: NaiveDate,
    /// How often the employee is paid.
    pub pay_frequency: PayFrequency,
    /// Hourly or salaried.
    pub employment_type: EmploymentType,
    /// Hourly rate, used for hourly employees.
    pub hourly_rate: Decimal,
    /// Hours worked per period, used for hourly employees.
    pub hours_per_week: Decimal,
    /// Annual salary, used for salaried employees.
    pub annual_salary: Decimal,
    /// Federal withholding as a percentage (0-100).
    pub federal_tax_rate: Decimal,
    /// State withholding as a percentage (0-100).
    pub state_tax_rate: Decimal,
    /// Adds the synthetic benefits and deductions package to the statement.
    pub include_random_deductions: bool,
    /// Time-off balances shown on the statement.
    #[serde(default)]
    pub time_off: TimeOffBalances,
}

impl EmploymentConfiguration {
    /// Returns true if the employee is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        self.employment_type == EmploymentType::Hourly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_days_per_frequency() {
        assert_eq!(PayFrequency::Weekly.period_days(), 7);
        assert_eq!(PayFrequency::BiWeekly.period_days(), 14);
        assert_eq!(PayFrequency::SemiMonthly.period_days(), 15);
        assert_eq!(PayFrequency::Monthly.period_days(), 30);
    }

    #[test]
    fn test_periods_per_year_per_frequency() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(PayFrequency::BiWeekly.periods_per_year(), 26);
        assert_eq!(PayFrequency::SemiMonthly.periods_per_year(), 24);
        assert_eq!(PayFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_pay_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&PayFrequency::BiWeekly).unwrap(),
            "\"bi_weekly\""
        );
        assert_eq!(
            serde_json::to_string(&PayFrequency::SemiMonthly).unwrap(),
            "\"semi_monthly\""
        );
    }

    #[test]
    fn test_pay_frequency_accepts_display_labels() {
        let frequency: PayFrequency = serde_json::from_str("\"Bi-Weekly\"").unwrap();
        assert_eq!(frequency, PayFrequency::BiWeekly);

        let frequency: PayFrequency = serde_json::from_str("\"Semi-Monthly\"").unwrap();
        assert_eq!(frequency, PayFrequency::SemiMonthly);
    }

    #[test]
    fn test_pay_frequency_display() {
        assert_eq!(PayFrequency::BiWeekly.to_string(), "Bi-Weekly");
        assert_eq!(PayFrequency::Monthly.to_string(), "Monthly");
    }

    #[test]
    fn test_employment_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::Hourly).unwrap(),
            "\"hourly\""
        );
        let parsed: EmploymentType = serde_json::from_str("\"Salary\"").unwrap();
        assert_eq!(parsed, EmploymentType::Salary);
    }

    #[test]
    fn test_address_single_line_skips_empty_parts() {
        let address = Address {
            street: "101 Silicon Valley Blvd".to_string(),
            city: String::new(),
            state: "CA".to_string(),
            zip: String::new(),
        };
        assert_eq!(address.single_line(), "101 Silicon Valley Blvd, CA");
        assert_eq!(Address::default().single_line(), "");
    }

    #[test]
    fn test_time_off_defaults_to_zero() {
        let balances: TimeOffBalances = serde_json::from_str("{}").unwrap();
        assert_eq!(balances.vacation_balance, Decimal::ZERO);
        assert_eq!(balances.sick_used, Decimal::ZERO);
    }
}
