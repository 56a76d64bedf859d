//! Freestyle job configuration model
//!
//! Extracts the parts of a Jenkins `config.xml` that survive conversion:
//! the SCM section and the shell builders.

pub mod xml;

use crate::pipeline::{ConvertError, ParseError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use xml::Element;

/// Element holding the source-control section
pub const SCM_ELEMENT: &str = "scm";
/// Element holding the build steps
pub const BUILDERS_ELEMENT: &str = "builders";
/// Element name of a shell build step
pub const SHELL_BUILDER_ELEMENT: &str = "hudson.tasks.Shell";

/// Repository reference found under `<scm>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScmConfig {
    /// Repository URL, from the first `<url>` descendant
    pub url: Option<String>,
    /// Branch, from the first `<name>` descendant
    pub branch: Option<String>,
}

impl ScmConfig {
    fn from_element(scm: &Element) -> Self {
        Self {
            url: scm.descendant("url").and_then(Element::text).map(str::to_string),
            branch: scm.descendant("name").and_then(Element::text).map(str::to_string),
        }
    }
}

/// A `hudson.tasks.Shell` build step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShellBuilder {
    /// Raw text of the `<command>` child, if any
    pub command: Option<String>,
}

impl ShellBuilder {
    /// Creates a builder with the given command text
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
        }
    }

    /// The command with surrounding whitespace removed, or `None` when the
    /// `<command>` text is missing or empty
    ///
    /// Whitespace-only text still counts as a command and yields `Some("")`.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.command
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::trim)
    }
}

/// The convertible parts of a freestyle job
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobConfig {
    /// SCM section, when the job has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmConfig>,
    /// Shell builders in document order, when the job has a `<builders>` section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builders: Option<Vec<ShellBuilder>>,
}

impl JobConfig {
    /// Extracts the job from a parsed document root
    #[must_use]
    pub fn from_element(root: &Element) -> Self {
        let scm = root.child(SCM_ELEMENT).map(ScmConfig::from_element);
        let builders = root.child(BUILDERS_ELEMENT).map(|builders| {
            builders
                .children_named(SHELL_BUILDER_ELEMENT)
                .map(|shell| ShellBuilder {
                    command: shell
                        .child("command")
                        .and_then(Element::text)
                        .map(str::to_string),
                })
                .collect()
        });

        Self { scm, builders }
    }

    /// Parses a job from XML text
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the document is not well-formed.
    pub fn from_xml(xml: &str) -> Result<Self, ParseError> {
        let root = xml::parse(xml)?;
        Ok(Self::from_element(&root))
    }

    /// Reads and parses a job configuration file
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Parse`] if the file cannot be read or is not
    /// well-formed.
    pub fn from_file(path: &Path) -> Result<Self, ConvertError> {
        let parse_error = |reason: String| ConvertError::Parse {
            path: path.display().to_string(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        let job = Self::from_xml(&content).map_err(|e| parse_error(e.message))?;

        tracing::debug!(
            "Loaded job {}: scm={}, shell builders={}",
            path.display(),
            job.scm.is_some(),
            job.builders.as_ref().map_or(0, Vec::len)
        );

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GIT_JOB: &str = r#"<?xml version='1.1' encoding='UTF-8'?>
<project>
  <description>Nightly build</description>
  <scm class="hudson.plugins.git.GitSCM" plugin="git@5.2.1">
    <configVersion>2</configVersion>
    <userRemoteConfigs>
      <hudson.plugins.git.UserRemoteConfig>
        <url>https://github.com/acme/widgets.git</url>
      </hudson.plugins.git.UserRemoteConfig>
    </userRemoteConfigs>
    <branches>
      <hudson.plugins.git.BranchSpec>
        <name>*/release</name>
      </hudson.plugins.git.BranchSpec>
    </branches>
  </scm>
  <builders>
    <hudson.tasks.Shell>
      <command>make all</command>
    </hudson.tasks.Shell>
    <hudson.tasks.Maven>
      <targets>package</targets>
    </hudson.tasks.Maven>
    <hudson.tasks.Shell/>
  </builders>
</project>
"#;

    #[test]
    fn test_from_xml_extracts_scm() {
        let job = JobConfig::from_xml(GIT_JOB).unwrap();
        let scm = job.scm.unwrap();

        assert_eq!(scm.url.as_deref(), Some("https://github.com/acme/widgets.git"));
        assert_eq!(scm.branch.as_deref(), Some("*/release"));
    }

    #[test]
    fn test_from_xml_keeps_only_shell_builders_in_order() {
        let job = JobConfig::from_xml(GIT_JOB).unwrap();
        let builders = job.builders.unwrap();

        assert_eq!(builders.len(), 2);
        assert_eq!(builders[0].script(), Some("make all"));
        assert_eq!(builders[1].command, None);
    }

    #[test]
    fn test_from_xml_without_sections() {
        let job = JobConfig::from_xml("<project><keepDependencies>false</keepDependencies></project>")
            .unwrap();
        assert_eq!(job, JobConfig::default());
    }

    #[test]
    fn test_scm_without_url_or_name() {
        let job = JobConfig::from_xml(r#"<project><scm class="hudson.scm.NullSCM"/></project>"#)
            .unwrap();
        assert_eq!(job.scm, Some(ScmConfig::default()));
    }

    #[test]
    fn test_nested_scm_is_ignored() {
        let job = JobConfig::from_xml("<project><properties><scm/></properties></project>").unwrap();
        assert!(job.scm.is_none());
    }

    #[test]
    fn test_shell_builder_script() {
        assert_eq!(ShellBuilder::new("  ls -la\n").script(), Some("ls -la"));
        assert_eq!(ShellBuilder::new(" \n\t").script(), Some(""));
        assert_eq!(ShellBuilder::new("").script(), None);
        assert_eq!(ShellBuilder::default().script(), None);
    }

    #[test]
    fn test_from_file_missing() {
        let err = JobConfig::from_file(Path::new("/nonexistent/config.xml")).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("/nonexistent/config.xml"));
    }

    #[test]
    fn test_from_file_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.xml");
        fs::write(&path, "<project><scm></project>").unwrap();

        let err = JobConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }

    #[test]
    fn test_serialize_skips_absent_sections() {
        let job = JobConfig {
            scm: None,
            builders: Some(vec![ShellBuilder::new("echo hi")]),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert!(json.get("scm").is_none());
        assert_eq!(json["builders"][0]["command"], "echo hi");
    }
}
