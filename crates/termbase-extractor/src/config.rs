//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Headings that are document structure, not glossary terms
const DEFAULT_HEADING_BLOCKLIST: [&str; 12] = [
    "navigation",
    "table of contents",
    "purpose",
    "core terminology",
    "relationship hierarchy",
    "quick reference",
    "summary",
    "process relationships",
    "key distinctions",
    "decision guide",
    "relationship guide",
    "hierarchy overview",
];

/// Field values that mean "nothing here"
const DEFAULT_NA_VALUES: [&str; 5] = ["n/a", "na", "none", "n.a.", ""];

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Heading texts (case-insensitive) that never become terms
    pub heading_blocklist: Vec<String>,

    /// Field values (case-insensitive) treated as absent
    pub na_values: Vec<String>,

    /// Number of content lines inspected by format detection
    pub detection_window: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.detection_window == 0 {
            return Err("detection_window must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Whether a heading is document structure rather than a term
    pub fn is_blocklisted(&self, heading: &str) -> bool {
        let normalized = heading.trim().to_lowercase();
        self.heading_blocklist
            .iter()
            .any(|h| h.trim().to_lowercase() == normalized)
    }

    /// Whether a field value is an "n/a" sentinel
    pub fn is_na(&self, value: &str) -> bool {
        let normalized = value.trim().to_lowercase();
        self.na_values
            .iter()
            .any(|v| v.trim().to_lowercase() == normalized)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            heading_blocklist: DEFAULT_HEADING_BLOCKLIST.iter().map(|s| s.to_string()).collect(),
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
            detection_window: 60,
        }
    }
}
