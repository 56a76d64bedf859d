//! Infrastructure layer
//!
//! Configuration, logging and the Jenkinsfile output backend.

mod config;
mod jenkinsfile;
mod logging;

pub use config::{Config, DEFAULT_BRANCH, DEFAULT_SCM_URL};
pub use jenkinsfile::JenkinsfileBackend;
pub use logging::init_logging;
