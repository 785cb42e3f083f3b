//! Builder API for assembling pipelines.

use crate::core::{Record, Rule};
use crate::pipeline::events::{EventSink, Reporter, TracingSink};
use crate::pipeline::runner::Pipeline;
use crate::rules::{AlwaysPass, FlagRule, PredicateRule, ThresholdRule};
use std::sync::Arc;

/// Source used when none is given
pub const DEFAULT_SOURCE: &str = "Pipeline";

/// Builder for creating pipelines
///
/// Rules run in the order they are added.
pub struct PipelineBuilder<R: Record> {
    rules: Vec<Box<dyn Rule<R>>>,
    source: Option<String>,
    sink: Option<Arc<dyn EventSink>>,
}

impl<R: Record + 'static> PipelineBuilder<R> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            source: None,
            sink: None,
        }
    }

    /// Append any rule
    pub fn rule<T>(mut self, rule: T) -> Self
    where
        T: Rule<R> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append an upper-limit check on a measured quantity
    pub fn max<F>(self, name: impl Into<String>, limit: u32, measure: F) -> Self
    where
        F: Fn(&R) -> u32 + Send + Sync + 'static,
    {
        self.rule(ThresholdRule::new(name, limit, measure))
    }

    /// Append a check that a boolean flag is set
    pub fn require_flag<F>(
        self,
        name: impl Into<String>,
        precondition: impl Into<String>,
        flag: F,
    ) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.rule(FlagRule::new(name, precondition, flag))
    }

    /// Append a check that always passes
    pub fn placeholder(self, name: impl Into<String>) -> Self {
        self.rule(AlwaysPass::new(name))
    }

    /// Append a simple predicate check with error message
    pub fn require_pred<F>(
        self,
        name: impl Into<String>,
        predicate: F,
        error_msg: String,
    ) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.rule(PredicateRule::new(name, predicate, error_msg))
    }

    /// Set the source named in emitted events
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the sink receiving events; defaults to [`TracingSink`]
    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline<R> {
        let source = self.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let sink = self.sink.unwrap_or_else(|| Arc::new(TracingSink));
        Pipeline::new(self.rules, Reporter::new(source, sink))
    }
}

impl<R: Record + 'static> Default for PipelineBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
