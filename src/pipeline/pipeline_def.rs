//! Pipeline definition and builder

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::pipeline::agent::AgentType;
use crate::pipeline::stage::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative pipeline produced from a job configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pipeline {
    /// Agent for pipeline execution
    pub agent: AgentType,

    /// Stages in pipeline, in emission order
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Creates an empty pipeline running on any agent
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pipeline(agent {}, {} stages)",
            self.agent,
            self.stages.len()
        )
    }
}

/// Builder for pipelines
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    agent: AgentType,
    stages: Vec<Stage>,
}

impl PipelineBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Builds the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            agent: self.agent,
            stages: self.stages,
        }
    }
}
