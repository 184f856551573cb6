//! Registry configuration.
//!
//! Configuration is loaded from environment variables with defaults suitable
//! for production: access control enabled, re-declaration rejected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AccessControlError;

/// What the registry does when a role name is declared again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Any second declaration of a name fails with `DuplicateRole`.
    #[default]
    Reject,
    /// Re-declaring an identical registration is a no-op. A differing
    /// definition under the same name still fails with `DuplicateRole`.
    IgnoreIdentical,
}

impl DuplicatePolicy {
    /// Get string representation of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::IgnoreIdentical => "ignore_identical",
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = AccessControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "ignore_identical" | "ignore-identical" => Ok(DuplicatePolicy::IgnoreIdentical),
            other => Err(AccessControlError::ConfigError(format!(
                "unknown duplicate policy '{other}', expected 'reject' or 'ignore_identical'"
            ))),
        }
    }
}

/// Configuration for [`MemoryRoleRegistry`](crate::MemoryRoleRegistry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Whether fine-grained access control is active. When disabled,
    /// declarations are validated but nothing is stored.
    pub enabled: bool,

    /// Behavior on re-declaration of an existing role name.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RBAC_ENABLED`: Whether access control is active (default: true)
    /// - `RBAC_DUPLICATE_POLICY`: `reject` or `ignore_identical` (default: reject)
    ///
    /// Unparseable values fall back to the default and are logged.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let enabled = match lookup("RBAC_ENABLED") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Ignoring RBAC_ENABLED");
                default.enabled
            }),
            None => default.enabled,
        };

        let duplicate_policy = match lookup("RBAC_DUPLICATE_POLICY") {
            Some(raw) => raw.parse::<DuplicatePolicy>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring RBAC_DUPLICATE_POLICY");
                default.duplicate_policy
            }),
            None => default.duplicate_policy,
        };

        Self {
            enabled,
            duplicate_policy,
        }
    }
}

/// Accepts `true`/`false`/`1`/`0`, case-insensitive.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" => Some(true),
        "0" => Some(false),
        other => other.parse().ok(),
    }
}
