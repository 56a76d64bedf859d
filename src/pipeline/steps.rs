//! Step types for pipeline stages
//!
//! This module defines the actions a generated stage can perform.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of steps a converted job can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepType {
    /// Source checkout through the git step
    Git {
        /// Branch to check out
        branch: String,
        /// Repository URL
        url: String,
    },

    /// Shell command execution
    Shell {
        /// Command to execute
        command: String,
    },
}

impl StepType {
    /// Creates a git checkout step
    pub fn git(branch: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Git {
            branch: branch.into(),
            url: url.into(),
        }
    }

    /// Creates a shell command step
    pub fn shell(command: impl Into<String>) -> Self {
        Self::Shell {
            command: command.into(),
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git { branch, url } => write!(f, "git({url}@{branch})"),
            Self::Shell { command } => write!(f, "sh({command})"),
        }
    }
}

/// A single step in a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Type of step
    #[serde(flatten)]
    pub step_type: StepType,
}

impl Step {
    /// Creates a new step
    pub fn new(step_type: StepType) -> Self {
        Self { step_type }
    }

    /// Creates a git checkout step
    pub fn git(branch: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(StepType::git(branch, url))
    }

    /// Creates a shell command step
    pub fn shell(command: impl Into<String>) -> Self {
        Self::new(StepType::shell(command))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step: {}", self.step_type)
    }
}
