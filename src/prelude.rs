//! Prelude module for common imports

pub use crate::infrastructure::{Config, JenkinsfileBackend};
pub use crate::job::{JobConfig, ScmConfig, ShellBuilder};
pub use crate::pipeline::agent::AgentType;
pub use crate::pipeline::errors::{ConvertError, ParseError};
pub use crate::pipeline::pipeline_def::{Pipeline, PipelineBuilder};
pub use crate::pipeline::stage::Stage;
pub use crate::pipeline::steps::{Step, StepType};
pub use crate::translator::{Translator, convert};
