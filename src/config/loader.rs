//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading employment
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentConfiguration;

use super::types::EmploymentConfigInput;

const INLINE_SOURCE: &str = "<inline>";

/// Loads and validates an employment configuration.
///
/// A configuration file is a single YAML document in the
/// [`EmploymentConfigInput`] layout:
///
/// ```text
/// company_name: Tech Solutions Inc.
/// employee_name: Jane Smith
/// hire_date: "2023-01-15"
/// pay_date: "2024-06-14"
/// pay_frequency: bi_weekly
/// employment_type: salary
/// annual_salary: 85000
/// federal_tax_rate: 12
/// ```
///
/// # Example
///
/// ```no_run
/// use paystub_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample_employee.yaml").unwrap();
/// println!("Employee: {}", loader.configuration().employee_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    configuration: EmploymentConfiguration,
}

impl ConfigLoader {
    /// Loads a configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a required field (`ConfigParseError`)
    /// - A date is malformed (`InvalidDate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let input = Self::load_yaml::<EmploymentConfigInput>(path.as_ref())?;
        Self::from_input(input)
    }

    /// Parses a configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::config::ConfigLoader;
    /// use paystub_engine::models::PayFrequency;
    ///
    /// let yaml = r#"
    /// company_name: Acme
    /// employee_name: Sam Lee
    /// hire_date: "2020-02-01"
    /// pay_date: "2024-01-05"
    /// pay_frequency: weekly
    /// employment_type: hourly
    /// hourly_rate: 20
    /// hours_per_week: 40
    /// federal_tax_rate: 10
    /// "#;
    ///
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.configuration().pay_frequency, PayFrequency::Weekly);
    /// # Ok::<(), paystub_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let input = Self::parse_yaml::<EmploymentConfigInput>(content, INLINE_SOURCE)?;
        Self::from_input(input)
    }

    fn from_input(input: EmploymentConfigInput) -> EngineResult<Self> {
        Ok(Self {
            configuration: input.into_configuration()?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, source: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn configuration(&self) -> &EmploymentConfiguration {
        &self.configuration
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_configuration(self) -> EmploymentConfiguration {
        self.configuration
    }
}
