//! Policy settings file loading.
//!
//! This module provides the [`PolicyLoader`] type for bootstrapping
//! [`PolicySettings`] from a YAML file holding the same flat key/value
//! shape as the settings table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::settings::{PolicySettings, SettingRow};

/// Loads policy settings from a YAML file.
///
/// The file is a flat map of setting keys to string-encoded numbers,
/// mirroring the settings table in the backing store:
///
/// ```text
/// shift_hours: "12"
/// unpaid_break_threshold_hours: "6"
/// casual_lateness_penalty_rate: "10"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::policy::PolicyLoader;
///
/// let settings = PolicyLoader::load("./config/policy.yaml")?;
/// println!("Shift hours: {}", settings.shift_hours);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader;

impl PolicyLoader {
    /// Loads settings from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`PolicySettings`] on success, or an error if:
    /// - The file is missing (`SettingsFileNotFound`)
    /// - The file is not a valid YAML string map (`SettingsFileParseError`)
    /// - Any known key holds a non-numeric value (`SettingParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PolicySettings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::SettingsFileNotFound {
            path: path_str.clone(),
        })?;

        let map: HashMap<String, String> = serde_yaml::from_str(&content).map_err(|e| {
            PayrollError::SettingsFileParseError {
                path: path_str,
                message: e.to_string(),
            }
        })?;

        let rows: Vec<SettingRow> = map
            .into_iter()
            .map(|(key, value)| SettingRow { key, value })
            .collect();

        PolicySettings::from_rows(&rows)
    }
}
