//! Diagnostic logging through `tracing`.
//!
//! Logs go to stderr so they never mix with the progress lines on stdout.
//! `RUST_LOG` wins over the `-v` count when it is set.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a log level.
///
/// - 0: warn
/// - 1 (`-v`): info
/// - 2 (`-vv`): debug
/// - 3+: trace
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "build_bump={}",
            level_from_verbosity(verbosity).as_str().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), Level::WARN);
        assert_eq!(level_from_verbosity(1), Level::INFO);
        assert_eq!(level_from_verbosity(2), Level::DEBUG);
        assert_eq!(level_from_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_logging(0);
        let err = init_logging(0).unwrap_err();
        assert!(err.to_string().contains("failed to initialise logging"));
    }
}
