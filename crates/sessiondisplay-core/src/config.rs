//! Configuration for session rendering

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Model parameter carrying a function-call specification
    pub functions_parameter: String,

    /// Role of the turn appended to a chat to show the model's response
    pub response_role: String,

    /// Decimals for the total session latency in the overview
    pub overview_latency_precision: u32,
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self {
            functions_parameter: "functions".to_string(),
            response_role: "assistant".to_string(),
            overview_latency_precision: 1,
        }
    }

    /// Load from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
