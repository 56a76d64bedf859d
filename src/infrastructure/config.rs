//! Configuration management

use serde::{Deserialize, Serialize};

/// Repository URL used when the job's SCM section names none
pub const DEFAULT_SCM_URL: &str = "https://example.com/repo.git";
/// Branch used when the job's SCM section names none
pub const DEFAULT_BRANCH: &str = "main";

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placeholder repository URL for the checkout stage
    pub default_url: String,
    /// Placeholder branch for the checkout stage
    pub default_branch: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_SCM_URL.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            log_level: "info".to_string(),
        }
    }
}
