//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod job;
mod policy;
mod report_period;
mod salary_report;
mod shift_roster;

pub use employee::{Employee, Organization, validate_directory};
pub use job::{Job, MAX_AMOUNT, PaymentType};
pub use policy::CompensationPolicy;
pub use report_period::ReportPeriod;
pub use salary_report::{
    AuditStep, AuditTrace, AuditWarning, DailySummary, EmployeeSummary, OrganizationRevenue,
    PaymentTypeTotals, ReportTotals, SalaryReport, WARNING_JOB_OUTSIDE_PERIOD,
    WARNING_ORPHANED_REVENUE, WARNING_UNKNOWN_EMPLOYEE,
};
pub use shift_roster::ShiftRoster;
