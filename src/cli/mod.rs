//! CLI for jenkinsfile-gen
//!
//! - `convert`: Translate a job `config.xml` into a Jenkinsfile
//! - `inspect`: Show what would be extracted from a job, as JSON
//! - `completions`: Generate shell completions

pub mod completions;
pub mod convert;
pub mod inspect;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for jenkinsfile-gen
#[derive(Parser, Debug)]
#[command(name = "jenkinsfile-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a freestyle job config.xml into a declarative Jenkinsfile
    Convert {
        /// Job configuration to read
        input: PathBuf,
        /// Jenkinsfile to write (overwritten if present)
        #[arg(default_value = convert::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Print the SCM and shell builders extracted from a job as JSON
    Inspect {
        /// Job configuration to read
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    Args::command()
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Convert { input, output } => {
            let message = convert::convert_job(&input, &output)?;
            println!("{message}");
        }
        Command::Inspect { input } => {
            println!("{}", inspect::inspect_job(&input)?);
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{completions}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_convert_output_defaults_to_jenkinsfile() {
        let args = Args::try_parse_from(["jenkinsfile-gen", "convert", "config.xml"]).unwrap();
        match args.command {
            Command::Convert { input, output } => {
                assert_eq!(input, PathBuf::from("config.xml"));
                assert_eq!(output, PathBuf::from("Jenkinsfile"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_convert_requires_input() {
        assert!(Args::try_parse_from(["jenkinsfile-gen", "convert"]).is_err());
    }
}
