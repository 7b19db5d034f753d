//! Configuration loading for the paystub engine.
//!
//! Employment configurations are written as YAML (or JSON in API requests)
//! with dates as `YYYY-MM-DD` strings, then validated into an
//! [`EmploymentConfiguration`](crate::models::EmploymentConfiguration).
//!
//! # Example
//!
//! ```no_run
//! use paystub_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/sample_employee.yaml").unwrap();
//! println!("Loaded configuration for {}", loader.configuration().employee_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CONFIG_DATE_FORMAT, EmploymentConfigInput};
