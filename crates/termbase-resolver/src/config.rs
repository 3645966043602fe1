//! Configuration for resolution

use crate::error::ResolverError;
use serde::{Deserialize, Serialize};

/// Configuration for the Resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Broader slug given to uncategorized terms from matching sources
    pub default_broader_slug: String,

    /// Substring of a source file name that enables the default broader slug
    pub fallback_source_marker: String,

    /// Characters of definition shown in collision reports
    pub preview_length: usize,
}

impl ResolverConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.preview_length == 0 {
            return Err("preview_length must be greater than 0".to_string());
        }
        if self.fallback_source_marker.is_empty() != self.default_broader_slug.is_empty() {
            return Err(
                "default_broader_slug and fallback_source_marker must be set together".to_string(),
            );
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ResolverError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ResolverError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ResolverError> {
        toml::to_string_pretty(self)
            .map_err(|e| ResolverError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_broader_slug: "operations".to_string(),
            fallback_source_marker: "process-management".to_string(),
            preview_length: 80,
        }
    }
}
