//! Configuration loading and management for the timesheet generator.
//!
//! This module provides functionality to load the organization settings,
//! the employee directory and the secrets from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use bctd_timesheet::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bctd").unwrap();
//! println!("Country: {}", config.organization().country_code);
//! ```

mod loader;
mod types;

pub use loader::{API_SECRET_ENV, ConfigLoader};
pub use types::{
    AppConfig, DirectoryEntry, EmployeeDirectory, OrganizationConfig, QuickAccessEntry,
    RenderConfig, RosterConfig, SecretsConfig,
};
