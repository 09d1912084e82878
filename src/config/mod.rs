//! Configuration loading and management for the salary engine.
//!
//! This module loads the shop configuration from YAML files: shop metadata,
//! the active compensation policy, and the employee and organization
//! directories.
//!
//! # Example
//!
//! ```no_run
//! use detailing_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/detail-lab").unwrap();
//! println!("Loaded shop: {}", config.shop().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeesConfig, OrganizationsConfig, ShopConfig, ShopMetadata};
