//! Shared configurations for unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Address, EmploymentConfiguration, EmploymentType, PayFrequency, TimeOffBalances,
};

/// Bi-weekly hourly employee at $25/h for 40 hours, 12% federal, no state tax,
/// paid 2024-06-14, hired 2023-01-15, without the benefits package.
pub(crate) fn hourly_configuration() -> EmploymentConfiguration {
    EmploymentConfiguration {
        company_name: "Tech Solutions Inc.".to_string(),
        company_address: Address {
            street: "101 Silicon Valley Blvd".to_string(),
            city: "San Jose".to_string(),
            state: "CA".to_string(),
            zip: "94000".to_string(),
        },
        employee_name: "Jane Smith".to_string(),
        employee_address: Address {
            street: "42 Wallaby Way".to_string(),
            city: "Sydney".to_string(),
            state: "TX".to_string(),
            zip: "76000".to_string(),
        },
        employee_id: "EMP-9921".to_string(),
        ssn_last4: "1234".to_string(),
        account_last4: "9876".to_string(),
        marital_status: "Single".to_string(),
        exemptions: 1,
        hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        pay_date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
        pay_frequency: PayFrequency::BiWeekly,
        employment_type: EmploymentType::Hourly,
        hourly_rate: Decimal::new(25, 0),
        hours_per_week: Decimal::new(40, 0),
        annual_salary: Decimal::new(85000, 0),
        federal_tax_rate: Decimal::new(12, 0),
        state_tax_rate: Decimal::ZERO,
        include_random_deductions: false,
        time_off: TimeOffBalances {
            vacation_balance: Decimal::new(455, 1),
            vacation_used: Decimal::new(16, 0),
            sick_balance: Decimal::new(24, 0),
            sick_used: Decimal::new(8, 0),
        },
    }
}

/// The hourly configuration switched to an $85,000 salary with the benefits package.
pub(crate) fn salaried_configuration() -> EmploymentConfiguration {
    EmploymentConfiguration {
        employment_type: EmploymentType::Salary,
        include_random_deductions: true,
        ..hourly_configuration()
    }
}
