//! Job-to-pipeline translation
//!
//! Turns a freestyle [`JobConfig`] into a declarative [`Pipeline`] and writes
//! it out as a Jenkinsfile:
//!
//! - an `<scm>` section becomes a `Checkout` stage using the `git` step;
//! - every `hudson.tasks.Shell` builder with a command becomes a
//!   `Build Step N` stage, where `N` is the builder's 1-based position among
//!   the shell builders. Builders without a command are skipped and their
//!   position is not reused.

use crate::infrastructure::{Config, JenkinsfileBackend};
use crate::job::JobConfig;
use crate::pipeline::{ConvertError, Pipeline, Stage};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Converts job configurations into Jenkinsfiles
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: Config,
    backend: JenkinsfileBackend,
}

impl Translator {
    /// Creates a translator with the given configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            backend: JenkinsfileBackend::new(),
        }
    }

    /// Returns the translator configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the pipeline for a job
    #[must_use]
    pub fn build_pipeline(&self, job: &JobConfig) -> Pipeline {
        let mut builder = Pipeline::builder();

        if let Some(scm) = &job.scm {
            let url = scm.url.as_deref().unwrap_or(&self.config.default_url);
            let branch = scm.branch.as_deref().unwrap_or(&self.config.default_branch);
            tracing::debug!("Checkout stage: {} @ {}", url, branch);
            builder = builder.stage(Stage::checkout(branch, url));
        }

        for (idx, shell) in job.builders.iter().flatten().enumerate() {
            let position = idx + 1;
            match shell.script() {
                Some(command) => builder = builder.stage(Stage::build_step(position, command)),
                None => tracing::debug!("Skipping shell builder {} without a command", position),
            }
        }

        builder.build()
    }

    /// Translates job XML into Jenkinsfile text
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Xml`] if the document is not well-formed.
    pub fn translate_str(&self, xml: &str) -> Result<String, ConvertError> {
        let job = JobConfig::from_xml(xml)?;
        Ok(self.backend.translate(&self.build_pipeline(&job)))
    }

    /// Translates the job file at `input` and writes the Jenkinsfile to `output`
    ///
    /// The output is replaced atomically: on any error an existing file at
    /// `output` is left as it was, and none is created.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Parse`] if the input cannot be read or parsed,
    /// and [`ConvertError::Io`] if the output cannot be written.
    pub fn translate_file(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let job = JobConfig::from_file(input)?;
        let pipeline = self.build_pipeline(&job);
        let jenkinsfile = self.backend.translate(&pipeline);

        write_atomic(output, &jenkinsfile)?;

        tracing::info!(
            "Wrote {} ({} stages) from {}",
            output.display(),
            pipeline.stages.len(),
            input.display()
        );
        Ok(())
    }
}

/// Translates `input` into a Jenkinsfile at `output` with the default configuration
///
/// # Errors
///
/// See [`Translator::translate_file`].
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    Translator::default().translate_file(input, output)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConvertError> {
    let io_error = |e: std::io::Error| ConvertError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(io_error)?;
    }

    file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}
