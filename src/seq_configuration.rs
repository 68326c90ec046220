//! Configuration types for pipelines

use serde::{Deserialize, Serialize};

use crate::error::SeqResult;

/// Settings shared by every pipeline derived from one builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Name used in log lines and metrics
    pub name: String,
    /// Wrap the source in a metering cursor
    pub enable_metrics: bool,
    /// Initial buffer capacity of each group created by `group_eager`
    pub group_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: "unnamed-pipeline".to_string(),
            enable_metrics: false,
            group_capacity: 0,
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Enable or disable source metering
    pub fn enable_metrics(mut self, enabled: bool) -> Self {
        self.enable_metrics = enabled;
        self
    }

    /// Set the initial capacity of group buffers
    pub fn group_capacity(mut self, capacity: usize) -> Self {
        self.group_capacity = capacity;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> SeqResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
