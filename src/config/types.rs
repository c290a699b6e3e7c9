//! Configuration types for timesheet generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{TimesheetError, TimesheetResult};
use crate::render::OutputFormat;
use crate::sheet::DEFAULT_TEMPLATE_SHEET;
use crate::timesheet::QuickAccessPolicy;

fn default_country_code() -> String {
    "KSA".to_string()
}

fn default_leadership_name() -> String {
    "Jahad Aldawood".to_string()
}

fn default_attendance_marker() -> String {
    "ARAMCO".to_string()
}

fn default_rig_prefix() -> String {
    "BCTD".to_string()
}

fn default_template_path() -> PathBuf {
    PathBuf::from("template.xlsx")
}

fn default_template_sheet() -> String {
    DEFAULT_TEMPLATE_SHEET.to_string()
}

fn default_render_base_url() -> String {
    "https://v2.convertapi.com".to_string()
}

/// Rendering service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Base URL of the conversion service.
    #[serde(default = "default_render_base_url")]
    pub base_url: String,
    /// Format delivered to the caller.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: default_render_base_url(),
            format: OutputFormat::default(),
        }
    }
}

/// Organization-wide settings from `organization.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationConfig {
    /// Country code printed in the header.
    #[serde(default = "default_country_code")]
    pub country_code: String,
    /// Supervising leadership name printed in the approval cell.
    #[serde(default = "default_leadership_name")]
    pub leadership_name: String,
    /// Marker written into the status column on attended days.
    #[serde(default = "default_attendance_marker")]
    pub attendance_marker: String,
    /// Prefix of rig labels, e.g. `BCTD` for `BCTD-4`.
    #[serde(default = "default_rig_prefix")]
    pub rig_prefix: String,
    /// Template workbook, relative to the configuration directory.
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
    /// Name of the timesheet sheet inside the template workbook.
    #[serde(default = "default_template_sheet")]
    pub template_sheet: String,
    /// Rendering service settings.
    #[serde(default)]
    pub render: RenderConfig,
    /// Handling of unknown quick-access tokens.
    #[serde(default)]
    pub quick_access_policy: QuickAccessPolicy,
}

/// One entry of the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    /// Full name of the employee.
    pub name: String,
    /// Rig-designation suffix, e.g. `4` for `BCTD-4`.
    pub rig: u32,
}

/// Roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Map of employee identifier to directory entry.
    pub employees: BTreeMap<u32, DirectoryEntry>,
}

/// Read-only mapping from employee identifier to name and rig.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDirectory {
    entries: BTreeMap<u32, DirectoryEntry>,
}

impl EmployeeDirectory {
    /// Creates a directory from its entries.
    pub fn new(entries: BTreeMap<u32, DirectoryEntry>) -> Self {
        Self { entries }
    }

    /// Looks an employee up.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if `employee_id` is not in the directory.
    pub fn lookup(&self, employee_id: u32) -> TimesheetResult<&DirectoryEntry> {
        self.entries
            .get(&employee_id)
            .ok_or(TimesheetError::EmployeeNotFound { employee_id })
    }

    /// Number of employees in the directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, DirectoryEntry)> for EmployeeDirectory {
    fn from_iter<I: IntoIterator<Item = (u32, DirectoryEntry)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Employee details stored behind a quick-access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickAccessEntry {
    /// Employee identifier.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Day rate.
    pub rate: Decimal,
    /// Full rig label, e.g. `BCTD-4`.
    pub rig: String,
}

/// Secrets file structure (`secrets.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretsConfig {
    /// Credential for the rendering service.
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Quick-access entries keyed by token (without the leading `#`).
    #[serde(default)]
    pub quick_access: HashMap<String, QuickAccessEntry>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the configuration was loaded from.
    base_dir: PathBuf,
    /// Organization settings.
    organization: OrganizationConfig,
    /// Employee directory.
    directory: EmployeeDirectory,
    /// Secrets.
    secrets: SecretsConfig,
}

impl AppConfig {
    /// Creates an AppConfig from its component parts.
    pub fn new(
        base_dir: PathBuf,
        organization: OrganizationConfig,
        directory: EmployeeDirectory,
        secrets: SecretsConfig,
    ) -> Self {
        Self {
            base_dir,
            organization,
            directory,
            secrets,
        }
    }

    /// Returns the organization settings.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Returns the secrets.
    pub fn secrets(&self) -> &SecretsConfig {
        &self.secrets
    }

    /// Mutable access to the secrets, for environment overrides.
    pub(crate) fn secrets_mut(&mut self) -> &mut SecretsConfig {
        &mut self.secrets
    }

    /// Template path resolved against the configuration directory.
    pub fn template_path(&self) -> PathBuf {
        if self.organization.template_path.is_absolute() {
            self.organization.template_path.clone()
        } else {
            self.base_dir.join(&self.organization.template_path)
        }
    }
}
