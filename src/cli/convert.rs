//! `jenkinsfile-gen convert` - Translate a job into a Jenkinsfile

use anyhow::{Context, Result};
use jenkinsfile_gen::Translator;
use std::path::Path;

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "Jenkinsfile";

/// Converts `input` into a Jenkinsfile at `output`
///
/// Returns the status line to show the user.
pub fn convert_job(input: &Path, output: &Path) -> Result<String> {
    tracing::debug!("Converting {} -> {}", input.display(), output.display());

    Translator::default()
        .translate_file(input, output)
        .with_context(|| format!("Failed to convert job: {}", input.display()))?;

    Ok(format!(
        "Jenkinsfile generated successfully: {}",
        output.display()
    ))
}
