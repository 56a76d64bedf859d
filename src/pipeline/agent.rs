//! Agent configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the pipeline runs
///
/// Freestyle jobs carry no agent constraint that survives conversion, so
/// converted pipelines always run on any available executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// Run on any available agent
    #[default]
    Any,
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
        }
    }
}
