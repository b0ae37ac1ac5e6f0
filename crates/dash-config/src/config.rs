//! Migration configuration
//!
//! Loadable from TOML, e.g.
//!
//! ```toml
//! status_policy = "drop"
//! default_name = "home"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::migrate::StatusPolicy;
use crate::model::DEFAULT_CONFIG_NAME;

/// Knobs for a migration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    /// Handling of status strings that are not numbers
    pub status_policy: StatusPolicy,
    /// Name given to documents that carry none
    pub default_name: String,
}

impl MigrationConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With status policy
    #[inline]
    #[must_use]
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// With default document name
    #[inline]
    #[must_use]
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Parse from TOML; missing keys take their defaults
    ///
    /// # Errors
    /// Returns error on malformed TOML, unknown keys, or an unknown policy
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::default(),
            default_name: DEFAULT_CONFIG_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MigrationConfig::new();
        assert_eq!(config.status_policy, StatusPolicy::Preserve);
        assert_eq!(config.default_name, "default");
    }

    #[test]
    fn from_toml_partial() {
        let config = MigrationConfig::from_toml_str("status_policy = \"reject\"\n").unwrap();
        assert_eq!(config.status_policy, StatusPolicy::Reject);
        assert_eq!(config.default_name, "default");

        let empty = MigrationConfig::from_toml_str("").unwrap();
        assert_eq!(empty, MigrationConfig::default());
    }

    #[test]
    fn from_toml_policy_ignores_case() {
        let config = MigrationConfig::from_toml_str("status_policy = \"Drop\"\n").unwrap();
        assert_eq!(config.status_policy, StatusPolicy::Drop);
    }

    #[test]
    fn from_toml_rejects_unknown() {
        assert!(MigrationConfig::from_toml_str("colour = \"red\"").is_err());
        assert!(MigrationConfig::from_toml_str("status_policy = \"lenient\"").is_err());
    }

    #[test]
    fn builder() {
        let config = MigrationConfig::new()
            .with_status_policy(StatusPolicy::Drop)
            .with_default_name("home");
        assert_eq!(config.status_policy, StatusPolicy::Drop);
        assert_eq!(config.default_name, "home");
    }
}
