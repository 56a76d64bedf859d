//! Pipeline domain types

pub mod agent;
pub mod errors;
pub mod pipeline_def;
pub mod stage;
pub mod steps;

pub use agent::AgentType;
pub use errors::{ConvertError, ParseError};
pub use pipeline_def::{Pipeline, PipelineBuilder};
pub use stage::{CHECKOUT_STAGE, Stage};
pub use steps::{Step, StepType};
