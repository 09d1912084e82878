//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{CompensationPolicy, Employee, Organization};

/// Metadata about the shop.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopMetadata {
    /// The shop's display name.
    pub name: String,
    /// ISO 4217 code of the currency amounts are kept in.
    pub currency: String,
}

/// Employee directory file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// Every employee known to the shop.
    pub employees: Vec<Employee>,
}

/// Organization directory file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationsConfig {
    /// Every corporate client known to the shop.
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

/// The complete shop configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    metadata: ShopMetadata,
    policy: CompensationPolicy,
    employees: Vec<Employee>,
    organizations: Vec<Organization>,
}

impl ShopConfig {
    /// Creates a new ShopConfig from its component parts.
    pub fn new(
        metadata: ShopMetadata,
        policy: CompensationPolicy,
        employees: Vec<Employee>,
        organizations: Vec<Organization>,
    ) -> Self {
        Self {
            metadata,
            policy,
            employees,
            organizations,
        }
    }

    /// Returns the shop metadata.
    pub fn shop(&self) -> &ShopMetadata {
        &self.metadata
    }

    /// Returns the active compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the organization directory.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }
}
