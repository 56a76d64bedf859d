//! Stage types for pipeline definition

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::steps::Step;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the stage generated from the job's SCM section
pub const CHECKOUT_STAGE: &str = "Checkout";

/// A named stage holding an ordered list of steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage name as shown in the Jenkins UI
    pub name: String,

    /// Steps executed by the stage, in order
    pub steps: Vec<Step>,
}

impl Stage {
    /// Creates a new stage
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Creates the checkout stage for a repository
    pub fn checkout(branch: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(CHECKOUT_STAGE, vec![Step::git(branch, url)])
    }

    /// Creates a build stage for the shell builder at `position` (1-based)
    pub fn build_step(position: usize, command: impl Into<String>) -> Self {
        Self::new(
            format!("Build Step {position}"),
            vec![Step::shell(command)],
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage({}, {} steps)", self.name, self.steps.len())
    }
}
