//! Configuration input types.
//!
//! [`EmploymentConfigInput`] is the serialized form of an
//! [`EmploymentConfiguration`] as it appears in YAML files and API request
//! bodies. Dates are plain `YYYY-MM-DD` strings so that a malformed date can
//! be reported against the field it came from.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Address, EmploymentConfiguration, EmploymentType, PayFrequency, TimeOffBalances,
};

/// Format of configuration dates.
pub const CONFIG_DATE_FORMAT: &str = "%Y-%m-%d";

/// An employment configuration as written by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentConfigInput {
    /// Employer name.
    pub company_name: String,
    /// Employer address.
    #[serde(default)]
    pub company_address: Address,
    /// Employee name.
    pub employee_name: String,
    /// Employee address.
    #[serde(default)]
    pub employee_address: Address,
    /// Employer-assigned employee identifier.
    #[serde(default)]
    pub employee_id: String,
    /// Last four digits of the employee's SSN.
    #[serde(default)]
    pub ssn_last4: String,
    /// Last four digits of the direct-deposit account.
    #[serde(default)]
    pub account_last4: String,
    /// Filing status.
    #[serde(default)]
    pub marital_status: String,
    /// Withholding exemptions claimed.
    #[serde(default)]
    pub exemptions: u32,
    /// Hire date, `YYYY-MM-DD`.
    pub hire_date: String,
    /// Most recent check date, `YYYY-MM-DD`. Defaults to today (UTC) when absent.
    #[serde(default)]
    pub pay_date: Option<String>,
    /// Pay frequency.
    pub pay_frequency: PayFrequency,
    /// Hourly or salaried.
    pub employment_type: EmploymentType,
    /// Hourly rate.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Hours per period.
    #[serde(default)]
    pub hours_per_week: Decimal,
    /// Annual salary.
    #[serde(default)]
    pub annual_salary: Decimal,
    /// Federal withholding percentage.
    pub federal_tax_rate: Decimal,
    /// State withholding percentage.
    #[serde(default)]
    pub state_tax_rate: Decimal,
    /// Enables the benefits package deductions.
    #[serde(default)]
    pub include_random_deductions: bool,
    /// Time-off balances.
    #[serde(default)]
    pub time_off: TimeOffBalances,
}

fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CONFIG_DATE_FORMAT).map_err(|e| {
        EngineError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        }
    })
}

impl EmploymentConfigInput {
    /// Validates the dates and produces a typed configuration.
    ///
    /// A missing `pay_date` becomes today's UTC date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] naming the first malformed date field.
    pub fn into_configuration(self) -> EngineResult<EmploymentConfiguration> {
        self.into_configuration_as_of(Utc::now().date_naive())
    }

    /// Like [`into_configuration`](Self::into_configuration), with an explicit
    /// date used when `pay_date` is absent.
    pub fn into_configuration_as_of(self, today: NaiveDate) -> EngineResult<EmploymentConfiguration> {
        let hire_date = parse_date("hire_date", &self.hire_date)?;
        let pay_date = match self.pay_date.as_deref() {
            Some(value) => parse_date("pay_date", value)?,
            None => today,
        };

        Ok(EmploymentConfiguration {
            company_name: self.company_name,
            company_address: self.company_address,
            employee_name: self.employee_name,
            employee_address: self.employee_address,
            employee_id: self.employee_id,
            ssn_last4: self.ssn_last4,
            account_last4: self.account_last4,
            marital_status: self.marital_status,
            exemptions: self.exemptions,
            hire_date,
            pay_date,
            pay_frequency: self.pay_frequency,
            employment_type: self.employment_type,
            hourly_rate: self.hourly_rate,
            hours_per_week: self.hours_per_week,
            annual_salary: self.annual_salary,
            federal_tax_rate: self.federal_tax_rate,
            state_tax_rate: self.state_tax_rate,
            include_random_deductions: self.include_random_deductions,
            time_off: self.time_off,
        })
    }
}

impl From<&EmploymentConfiguration> for EmploymentConfigInput {
    fn from(config: &EmploymentConfiguration) -> Self {
        Self {
            company_name: config.company_name.clone(),
            company_address: config.company_address.clone(),
            employee_name: config.employee_name.clone(),
            employee_address: config.employee_address.clone(),
            employee_id: config.employee_id.clone(),
            ssn_last4: config.ssn_last4.clone(),
            account_last4: config.account_last4.clone(),
            marital_status: config.marital_status.clone(),
            exemptions: config.exemptions,
            hire_date: config.hire_date.format(CONFIG_DATE_FORMAT).to_string(),
            pay_date: Some(config.pay_date.format(CONFIG_DATE_FORMAT).to_string()),
            pay_frequency: config.pay_frequency,
            employment_type: config.employment_type,
            hourly_rate: config.hourly_rate,
            hours_per_week: config.hours_per_week,
            annual_salary: config.annual_salary,
            federal_tax_rate: config.federal_tax_rate,
            state_tax_rate: config.state_tax_rate,
            include_random_deductions: config.include_random_deductions,
            time_off: config.time_off.clone(),
        }
    }
}
