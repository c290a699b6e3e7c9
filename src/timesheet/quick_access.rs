//! Quick access for the single-employee form.
//!
//! A full name of the form `#token` asks for the employee's id, name, rate
//! and rig to be taken from the secrets instead of the form. What happens
//! when the token cannot be resolved is set by [`QuickAccessPolicy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{QuickAccessEntry, SecretsConfig};
use crate::error::{TimesheetError, TimesheetResult};

/// Marker that turns a name field into a quick-access token.
pub const QUICK_ACCESS_PREFIX: char = '#';

/// What to do when a quick-access token cannot be resolved.
///
/// Configured as `quick_access_policy` in `organization.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAccessPolicy {
    /// Log the failure and keep the values typed into the form.
    #[default]
    FallBackToForm,
    /// Fail the request with `QuickAccessFailed`.
    Surface,
}

/// Employee fields as entered on the single-employee form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// Full name, or `#token`.
    pub full_name: String,
    /// Employee identifier.
    pub employee_id: u32,
    /// Day rate.
    pub day_rate: Decimal,
    /// Rig label, e.g. `BCTD-4`.
    pub rig_name: String,
}

/// Returns the token if `full_name` requests quick access.
pub fn quick_access_token(full_name: &str) -> Option<&str> {
    full_name.strip_prefix(QUICK_ACCESS_PREFIX)
}

/// Looks a token up in the secrets.
///
/// # Errors
///
/// Returns `QuickAccessFailed` if the token has no entry.
pub fn lookup_quick_access<'a>(
    token: &str,
    secrets: &'a SecretsConfig,
) -> TimesheetResult<&'a QuickAccessEntry> {
    secrets
        .quick_access
        .get(token)
        .ok_or_else(|| TimesheetError::QuickAccessFailed {
            token: token.to_string(),
            message: "no quick access entry".to_string(),
        })
}

/// Applies quick access to a form under `policy`.
///
/// Forms without a token are returned unchanged.
///
/// # Errors
///
/// Returns `QuickAccessFailed` for an unknown token under
/// [`QuickAccessPolicy::Surface`].
pub fn apply_quick_access(
    form: EmployeeForm,
    secrets: &SecretsConfig,
    policy: QuickAccessPolicy,
) -> TimesheetResult<EmployeeForm> {
    let Some(token) = quick_access_token(&form.full_name) else {
        return Ok(form);
    };

    match lookup_quick_access(token, secrets) {
        Ok(entry) => {
            info!(employee_id = entry.id, "Resolved quick access token");
            Ok(EmployeeForm {
                full_name: entry.name.clone(),
                employee_id: entry.id,
                day_rate: entry.rate,
                rig_name: entry.rig.clone(),
            })
        }
        Err(err) => match policy {
            QuickAccessPolicy::FallBackToForm => {
                warn!(error = %err, "Quick access failed, using form values");
                Ok(form)
            }
            QuickAccessPolicy::Surface => Err(err),
        },
    }
}
