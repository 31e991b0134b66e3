//! Scenario configuration with YAML schema and validation.
//!
//! Mistake-proofs analysis input through type-safe structs, serde-level
//! schema enforcement (`deny_unknown_fields`) and a semantic validation
//! pass after parsing. A scenario file pairs descriptive metadata with
//! one [`QueueParameters`] record:
//!
//! ```yaml
//! scenario:
//!   name: machine shop
//!   description: seven mechanics serving a hundred machines
//! queue:
//!   lambda: 0.25
//!   mu: 4.0
//!   servers: 7
//!   population: 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::EngineResult;
use crate::model::QueueParameters;

/// Top-level scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Scenario metadata.
    #[serde(default)]
    pub scenario: ScenarioMeta,

    /// Queue parameters to analyze.
    #[validate(nested)]
    pub queue: QueueParameters,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// Scenario metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioMeta {
    /// Scenario name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> EngineResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.queue.ensure_valid()?;

        Ok(config)
    }
}
