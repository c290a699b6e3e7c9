//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the timesheet
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::OrganizationFields;
use crate::sheet::Template;

use super::types::{
    AppConfig, EmployeeDirectory, OrganizationConfig, RosterConfig, SecretsConfig,
};

/// Environment variable overriding the rendering service secret.
pub const API_SECRET_ENV: &str = "BCTDTS_API_SECRET";

/// Loads and provides access to the timesheet configuration.
///
/// # Directory Structure
///
/// ```text
/// config/bctd/
/// ├── organization.yaml   # Country, leadership, marker, template, rendering
/// ├── roster.yaml         # Employee directory
/// ├── secrets.yaml        # Optional: API secret and quick-access tokens
/// └── template.xlsx       # Timesheet template workbook
/// ```
///
/// # Example
///
/// ```no_run
/// use bctd_timesheet::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bctd")?;
/// let entry = loader.directory().lookup(1001)?;
/// println!("Employee: {}", entry.name);
/// # Ok::<(), bctd_timesheet::error::TimesheetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `organization.yaml` or `roster.yaml` is missing
    /// - Any present file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> TimesheetResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        let secrets_path = path.join("secrets.yaml");
        let secrets = if secrets_path.exists() {
            Self::load_yaml::<SecretsConfig>(&secrets_path)?
        } else {
            SecretsConfig::default()
        };

        let config = AppConfig::new(
            path.to_path_buf(),
            organization,
            EmployeeDirectory::new(roster.employees),
            secrets,
        );

        Ok(Self { config })
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Replaces the rendering service secret.
    pub fn with_api_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.secrets_mut().api_secret = Some(secret.into());
        self
    }

    /// Applies [`API_SECRET_ENV`] if it is set.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(API_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => self.with_api_secret(secret),
            _ => self,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TimesheetResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TimesheetError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TimesheetError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the organization settings.
    pub fn organization(&self) -> &OrganizationConfig {
        self.config.organization()
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        self.config.directory()
    }

    /// Returns the secrets.
    pub fn secrets(&self) -> &SecretsConfig {
        self.config.secrets()
    }

    /// Builds the organizational sheet fields for a request.
    pub fn organization_fields(&self, team_leader_name: &str) -> OrganizationFields {
        let organization = self.organization();
        OrganizationFields {
            country_code: organization.country_code.clone(),
            leadership_name: organization.leadership_name.clone(),
            team_leader_name: team_leader_name.to_string(),
            attendance_marker: organization.attendance_marker.clone(),
        }
    }

    /// Loads a fresh copy of the template workbook.
    pub fn load_template(&self) -> TimesheetResult<Template> {
        Template::load(
            self.config.template_path(),
            &self.organization().template_sheet,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/bctd"
    }

    fn write_config(dir: &Path, organization: &str, roster: &str) {
        fs::write(dir.join("organization.yaml"), organization).unwrap();
        fs::write(dir.join("roster.yaml"), roster).unwrap();
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.organization().country_code, "KSA");
        assert_eq!(loader.organization().attendance_marker, "ARAMCO");
        assert!(!loader.directory().is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(TimesheetError::ConfigNotFound { path }) => {
                assert!(path.contains("organization.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_without_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "country_code: KSA\n",
            "employees:\n  1001:\n    name: Ken Lynn\n    rig: 4\n",
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert!(loader.secrets().api_secret.is_none());
        assert!(loader.secrets().quick_access.is_empty());
        assert_eq!(loader.directory().lookup(1001).unwrap().name, "Ken Lynn");
    }

    #[test]
    fn test_load_malformed_roster_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "{}\n", "employees: [not, a, map]\n");

        match ConfigLoader::load(dir.path()) {
            Err(TimesheetError::ConfigParseError { path, .. }) => {
                assert!(path.contains("roster.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_with_api_secret_overrides_file_value() {
        let loader = ConfigLoader::load(config_path())
            .unwrap()
            .with_api_secret("from-env");
        assert_eq!(loader.secrets().api_secret.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_organization_fields_carry_team_leader() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let fields = loader.organization_fields("Ken Lynn");

        assert_eq!(fields.team_leader_name, "Ken Lynn");
        assert_eq!(fields.country_code, "KSA");
        assert_eq!(fields.leadership_name, "Jahad Aldawood");
    }

    #[test]
    fn test_load_sample_template() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let template = loader.load_template().unwrap();

        assert_eq!(template.sheet().title(), "timesheet");
        assert_eq!(template.sheet().footer().left, "BCTD timesheet");
        assert_eq!(template.sheet().footer().right, "Page &P of &N");
        assert!(template.workbook().is_some());
    }

    #[test]
    fn test_load_template_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "template_path: absent.xlsx\n", "employees: {}\n");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert!(matches!(
            loader.load_template(),
            Err(TimesheetError::TemplateNotFound { .. })
        ));
    }
}
