//! # jenkinsfile-gen - Freestyle jobs to declarative Jenkinsfiles
//!
//! Reads a Jenkins freestyle job `config.xml` and writes an equivalent
//! declarative pipeline skeleton: a `Checkout` stage for the job's SCM section
//! and one stage per shell build step.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! jenkinsfile_gen::convert(Path::new("config.xml"), Path::new("Jenkinsfile"))?;
//! # Ok::<(), jenkinsfile_gen::ConvertError>(())
//! ```
//!
//! Conversion from text, without touching the filesystem:
//!
//! ```
//! use jenkinsfile_gen::Translator;
//!
//! let jenkinsfile = Translator::default().translate_str("<project/>")?;
//! assert_eq!(jenkinsfile, "pipeline {\n    agent any\n    stages {\n    }\n}");
//! # Ok::<(), jenkinsfile_gen::ConvertError>(())
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod job;
pub mod pipeline;
pub mod translator;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{Config, JenkinsfileBackend, init_logging};
pub use job::{JobConfig, ScmConfig, ShellBuilder};
pub use pipeline::{AgentType, ConvertError, ParseError, Pipeline, Stage, Step, StepType};
pub use translator::{Translator, convert};

/// Version of the jenkinsfile-gen crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
