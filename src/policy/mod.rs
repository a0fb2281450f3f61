//! Pay-policy settings for the Payroll Calculation Engine.
//!
//! Policy settings arrive as a flat table of string-encoded numbers. This
//! module provides the typed [`PolicySettings`] value with the engine's
//! defaults, and the [`PolicyLoader`] that reads the same shape from a
//! YAML file for server bootstrap.
//!
//! # Example
//!
//! ```
//! use payroll_engine::policy::PolicySettings;
//!
//! let settings = PolicySettings::default();
//! assert_eq!(settings.shift_hours.to_string(), "12");
//! ```

mod loader;
mod settings;

pub use loader::PolicyLoader;
pub use settings::{PolicySettings, SettingRow};
