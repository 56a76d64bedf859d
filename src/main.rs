//! jenkinsfile-gen - Convert freestyle Jenkins jobs into declarative Jenkinsfiles
//!
//! ## Commands
//!
//! - `jenkinsfile-gen convert` - Translate a job `config.xml` into a Jenkinsfile
//! - `jenkinsfile-gen inspect` - Show the SCM and shell builders found in a job
//! - `jenkinsfile-gen completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Writes ./Jenkinsfile
//! jenkinsfile-gen convert jobs/nightly/config.xml
//!
//! # Explicit destination
//! jenkinsfile-gen convert jobs/nightly/config.xml ci/Jenkinsfile
//!
//! # See what will be converted
//! jenkinsfile-gen inspect jobs/nightly/config.xml
//! ```
//!
//! Set `JENKINSFILE_GEN_DEBUG` to enable logging (filtered by `RUST_LOG`), and
//! `JENKINSFILE_GEN_VERBOSE` to print the full error chain on failure.

use jenkinsfile_gen::Config;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    if std::env::var("JENKINSFILE_GEN_DEBUG").is_ok() {
        jenkinsfile_gen::init_logging(&Config::default().log_level);
    }

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if std::env::var("JENKINSFILE_GEN_VERBOSE").is_ok() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
