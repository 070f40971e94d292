//! Process-wide output settings.
//!
//! Translations are written to stdout so they can be piped. Status lines
//! and errors go to stderr, and `--quiet` silences only the status lines.

use std::sync::OnceLock;

static SETTINGS: OnceLock<OutputConfig> = OnceLock::new();

/// The `--quiet` and `--no-color` switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the settings from CLI flags. Colors are also off when
    /// `NO_COLOR` is set (<https://no-color.org/>).
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || std::env::var_os("NO_COLOR").is_some(),
        }
    }

    /// Makes these settings visible to [`is_quiet`] and [`is_no_color`].
    /// Later calls are ignored.
    pub fn install(self) {
        let _ = SETTINGS.set(self);
    }
}

fn current() -> OutputConfig {
    SETTINGS
        .get()
        .copied()
        .unwrap_or_else(|| OutputConfig::from_flags(false, false))
}

pub fn is_quiet() -> bool {
    current().quiet
}

pub fn is_no_color() -> bool {
    current().no_color
}

/// Prints a status line to stderr unless `--quiet` was given.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_flags_passes_switches_through() {
        unsafe {
            std::env::remove_var("NO_COLOR");
        }

        assert_eq!(
            OutputConfig::from_flags(true, false),
            OutputConfig {
                quiet: true,
                no_color: false
            }
        );
        assert!(OutputConfig::from_flags(false, true).no_color);
    }

    #[test]
    #[serial]
    fn test_no_color_env_disables_colors() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let config = OutputConfig::from_flags(false, false);

        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(config.no_color);
        assert!(!config.quiet);
    }
}
