//! `jenkinsfile-gen inspect` - Show the extracted job model

use anyhow::{Context, Result};
use jenkinsfile_gen::JobConfig;
use std::path::Path;

/// Reads a job and renders what conversion would use from it as pretty JSON
pub fn inspect_job(input: &Path) -> Result<String> {
    let job = JobConfig::from_file(input)
        .with_context(|| format!("Failed to inspect job: {}", input.display()))?;

    serde_json::to_string_pretty(&job).context("Failed to serialize job")
}
