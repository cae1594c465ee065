//! Logging system initialization.
//!
//! Diagnostics go to stderr so `outline --json` stays clean on stdout.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flags.
pub fn init(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose > 0)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0, false), "warn");
        assert_eq!(default_filter(1, false), "debug");
        assert_eq!(default_filter(2, false), "trace");
        assert_eq!(default_filter(7, false), "trace");
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(default_filter(0, true), "error");
        assert_eq!(default_filter(2, true), "error");
    }
}
