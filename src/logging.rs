//! Tracing subscriber setup for the `gtranslate` binary.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "gtranslate=debug,warn",
        _ => "trace",
    }
}

/// Installs a compact fmt subscriber on stderr.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init(verbosity: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(verbosity > 1)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(1).contains("gtranslate=debug"));
        assert_eq!(default_filter(2), "trace");
        assert_eq!(default_filter(9), "trace");
    }
}
