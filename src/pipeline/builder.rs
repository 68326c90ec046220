use std::rc::Rc;

use crate::error::{SeqError, SeqResult};
use crate::seq::{Seq, SeqRef};
use crate::seq_configuration::PipelineConfig;
use crate::seq_metrics;

use super::Pipeline;

/// Assembles a [`Pipeline`] from a configuration and a source cursor
pub struct PipelineBuilder<T> {
    config: PipelineConfig,
    source: Option<SeqRef<T>>,
}

impl<T: 'static> Default for PipelineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> PipelineBuilder<T> {
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            source: None,
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.config.name = name.to_string();
        self
    }

    pub fn with_metrics(mut self) -> Self {
        self.config.enable_metrics = true;
        self
    }

    /// Use an existing shared cursor as the source
    pub fn source(mut self, seq: SeqRef<T>) -> Self {
        self.source = Some(seq);
        self
    }

    /// Use a concrete cursor as the source
    pub fn source_seq<S>(self, seq: S) -> Self
    where
        S: Seq<Item = T> + 'static,
    {
        self.source(SeqRef::new(seq))
    }

    pub fn build(self) -> SeqResult<Pipeline<T>> {
        let Some(source) = self.source else {
            log::error!("Pipeline '{}' has no source", self.config.name);
            return Err(SeqError::MissingDependency("source"));
        };

        let config = Rc::new(self.config);
        if config.enable_metrics {
            let (seq, metrics) = seq_metrics::with_metrics(source, Some(config.name.clone()));
            log::debug!("Pipeline '{}' built with source metrics", config.name);
            Ok(Pipeline::from_parts(seq, config, Some(metrics)))
        } else {
            Ok(Pipeline::from_parts(source, config, None))
        }
    }
}
