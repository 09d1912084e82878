//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shop
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationPolicy, Employee, Organization, validate_directory};

use super::types::{EmployeesConfig, OrganizationsConfig, ShopConfig, ShopMetadata};

/// Loads and provides access to the shop configuration.
///
/// # Directory Structure
///
/// ```text
/// config/detail-lab/
/// ├── shop.yaml           # Shop metadata
/// ├── compensation.yaml   # Active compensation policy
/// ├── employees.yaml      # Employee directory
/// └── organizations.yaml  # Corporate clients
/// ```
///
/// Every file is required. There is no fallback policy: a shop without a
/// `compensation.yaml` fails to load.
///
/// # Example
///
/// ```no_run
/// use detailing_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/detail-lab").unwrap();
/// println!("{} pays by '{}'", loader.shop().name, loader.policy().method_name());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ShopConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or an unknown policy method (`ConfigParseError`)
    /// - The policy has an out-of-range value (`InvalidPolicy`)
    /// - An employee id is empty or repeated (`InvalidEmployee`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ShopMetadata>(&path.join("shop.yaml"))?;

        let policy = Self::load_yaml::<CompensationPolicy>(&path.join("compensation.yaml"))?;
        policy.validate()?;

        let employees = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?.employees;
        validate_directory(&employees)?;

        let organizations =
            Self::load_yaml::<OrganizationsConfig>(&path.join("organizations.yaml"))?.organizations;

        let config = ShopConfig::new(metadata, policy, employees, organizations);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying shop configuration.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Returns the shop metadata.
    pub fn shop(&self) -> &ShopMetadata {
        self.config.shop()
    }

    /// Returns the active compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        self.config.policy()
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Returns the organization directory.
    pub fn organizations(&self) -> &[Organization] {
        self.config.organizations()
    }

    /// Looks up an employee by id.
    pub fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.config.employees().iter().find(|e| e.id == id)
    }
}
