//! Jenkinsfile backend
//!
//! Renders pipelines as declarative Jenkinsfile text.

use crate::pipeline::{Pipeline, Stage, Step, StepType};

const INDENT: &str = "    ";

/// Backend for generating declarative Jenkinsfiles
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsfileBackend;

impl JenkinsfileBackend {
    /// Creates a new Jenkinsfile backend
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Translates a pipeline to Jenkinsfile text
    ///
    /// Lines are joined with `\n`; there is no trailing newline.
    #[must_use]
    pub fn translate(&self, pipeline: &Pipeline) -> String {
        self.lines(pipeline).join("\n")
    }

    /// Translates a pipeline to the individual lines of a Jenkinsfile
    #[must_use]
    pub fn lines(&self, pipeline: &Pipeline) -> Vec<String> {
        let mut lines = vec![
            "pipeline {".to_string(),
            format!("{INDENT}agent {}", pipeline.agent),
            format!("{INDENT}stages {{"),
        ];

        for stage in &pipeline.stages {
            lines.extend(self.translate_stage(stage));
        }

        lines.push(format!("{INDENT}}}"));
        lines.push("}".to_string());
        lines
    }

    fn translate_stage(&self, stage: &Stage) -> Vec<String> {
        let pad = INDENT.repeat(2);
        let step_pad = INDENT.repeat(4);

        let mut lines = vec![
            format!("{pad}stage('{}') {{", stage.name),
            format!("{pad}{INDENT}steps {{"),
        ];
        lines.extend(
            stage
                .steps
                .iter()
                .map(|step| format!("{step_pad}{}", self.translate_step(step))),
        );
        lines.push(format!("{pad}{INDENT}}}"));
        lines.push(format!("{pad}}}"));
        lines
    }

    // Values are inserted verbatim; quotes in them are not escaped.
    fn translate_step(&self, step: &Step) -> String {
        match &step.step_type {
            StepType::Git { branch, url } => format!("git branch: '{branch}', url: '{url}'"),
            StepType::Shell { command } => format!("sh '''{command}'''"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_pipeline_skeleton() {
        let output = JenkinsfileBackend::new().translate(&Pipeline::new());
        assert_eq!(output, "pipeline {\n    agent any\n    stages {\n    }\n}");
    }

    #[test]
    fn test_checkout_stage_lines() {
        let pipeline = Pipeline::builder()
            .stage(Stage::checkout("develop", "git@example.org:team/app.git"))
            .build();

        let lines = JenkinsfileBackend::new().lines(&pipeline);
        assert_eq!(
            lines[3..8].to_vec(),
            vec![
                "        stage('Checkout') {",
                "            steps {",
                "                git branch: 'develop', url: 'git@example.org:team/app.git'",
                "            }",
                "        }",
            ]
        );
    }

    #[test]
    fn test_shell_command_is_verbatim() {
        let pipeline = Pipeline::builder()
            .stage(Stage::build_step(1, "echo 'quoted' && make\nmake install"))
            .build();

        let output = JenkinsfileBackend::new().translate(&pipeline);
        assert!(output.contains("                sh '''echo 'quoted' && make\nmake install'''"));
    }

    #[test]
    fn test_multiple_steps_in_stage() {
        let stage = Stage::new("Build", vec![Step::shell("make"), Step::shell("make check")]);
        let lines = JenkinsfileBackend::new().lines(&Pipeline::builder().stage(stage).build());

        assert_eq!(lines.len(), 5 + 6);
        assert_eq!(lines[5], "                sh '''make'''");
        assert_eq!(lines[6], "                sh '''make check'''");
    }
}
