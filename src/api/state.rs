//! Application state for the Payroll Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::policy::PolicySettings;

/// Shared application state.
///
/// Holds the policy settings cache. The cache starts unset and is
/// populated by the reload endpoint; calculations refuse to run while it
/// is unset. Reads vastly outnumber reloads, and two concurrent
/// calculations may briefly observe different settings around a reload;
/// that is accepted behavior for this read-mostly cache.
#[derive(Clone, Default)]
pub struct AppState {
    settings: Arc<RwLock<Option<PolicySettings>>>,
}

impl AppState {
    /// Creates state with an unset policy cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state with the policy cache already populated, for servers
    /// bootstrapped from a settings file.
    pub fn with_settings(settings: PolicySettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Some(settings))),
        }
    }

    /// Returns the cached policy settings, if any have been loaded.
    pub fn policy(&self) -> Option<PolicySettings> {
        *self
            .settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replaces the cached policy settings.
    pub fn reload_policy(&self, settings: PolicySettings) {
        *self
            .settings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(settings);
    }
}
