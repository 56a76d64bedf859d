//! `jenkinsfile-gen completions` - Generate shell completions

use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs;
use std::path::Path;

/// Renders the completion script for `shell`, covering the `convert`,
/// `inspect` and `completions` subcommands
pub fn generate_completions(shell: Shell) -> Result<String> {
    use clap_complete::generate;

    let mut cmd = super::build_cli();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "jenkinsfile-gen", &mut buf);

    String::from_utf8(buf).context("Failed to generate completions")
}

/// Writes a completion script to `output_path`, replacing any existing file
pub fn save_completions(completions: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, completions)
        .with_context(|| format!("Failed to write completions to: {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_bash_completions() {
        let completions = generate_completions(Shell::Bash).unwrap();
        assert!(completions.contains("jenkinsfile-gen"));
        assert!(completions.contains("convert"));
    }

    #[test]
    fn test_generate_fish_completions() {
        let completions = generate_completions(Shell::Fish).unwrap();
        assert!(completions.contains("inspect"));
    }

    #[test]
    fn test_save_completions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jenkinsfile-gen.bash");

        save_completions("complete -F _jenkinsfile_gen jenkinsfile-gen", &path).unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with("complete"));
    }
}
