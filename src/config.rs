//! Configuration for Keyrack
//!
//! Centralized configuration with sensible defaults.

use serde::{Deserialize, Serialize};

/// Main configuration for a provider instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Routing Configuration
    // -------------------------------------------------------------------------
    /// The namespace this provider answers for; requests naming any other
    /// namespace are rejected. Compared case-insensitively.
    pub namespace: String,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Name of the numeric record property that orders enumeration
    pub ordering_field: String,

    /// Whether create/set/delete are allowed at startup; togglable at
    /// runtime through the provider's control methods
    pub enable_modifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "root/keyrack".to_string(),
            ordering_field: "InstanceId".to_string(),
            enable_modifications: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the namespace this provider answers for
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the ordering-field name
    pub fn ordering_field(mut self, field: impl Into<String>) -> Self {
        self.config.ordering_field = field.into();
        self
    }

    /// Set whether modifications are allowed at startup
    pub fn enable_modifications(mut self, enabled: bool) -> Self {
        self.config.enable_modifications = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
