//! Logging configuration
//!
//! Initializes tracing for the application. Output goes to stderr so that
//! stdout stays free for generated content.

/// Initializes logging with the specified level
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than
/// once keeps the first subscriber.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_installs_subscriber() {
        init_logging("debug");
        assert!(tracing::dispatcher::has_been_set());

        // A second call keeps the first subscriber instead of panicking.
        init_logging("info");
        assert!(tracing::dispatcher::has_been_set());
    }
}
