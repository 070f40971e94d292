#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variable (API key only)
//! 3. Config file
//! 4. Built-in defaults

use gtranslate::config::{
    ApiConfig, ConfigFile, DefaultsConfig, ResolveOptions, resolve_config,
};
use gtranslate::translation::DEFAULT_ENDPOINT;
use serial_test::serial;

const ENV_VAR: &str = "GTRANSLATE_PRIORITY_TEST_KEY";

fn make_config() -> ConfigFile {
    ConfigFile {
        gtranslate: DefaultsConfig {
            to: Some("pt".to_string()),
            from: Some("en".to_string()),
        },
        api: ApiConfig {
            key: Some("file-key".to_string()),
            key_env: Some(ENV_VAR.to_string()),
            endpoint: Some("http://file.local/v2".to_string()),
        },
    }
}

fn with_env_key<F: FnOnce()>(value: Option<&str>, f: F) {
    unsafe {
        match value {
            Some(v) => std::env::set_var(ENV_VAR, v),
            None => std::env::remove_var(ENV_VAR),
        }
    }
    f();
    unsafe { std::env::remove_var(ENV_VAR) };
}

#[test]
#[serial]
fn test_cli_key_overrides_env_and_file() {
    with_env_key(Some("env-key"), || {
        let options = ResolveOptions {
            key: Some("cli-key".to_string()),
            ..ResolveOptions::default()
        };
        let resolved = resolve_config(&options, &make_config()).unwrap();
        assert_eq!(resolved.access_key, "cli-key");
    });
}

#[test]
#[serial]
fn test_env_key_overrides_file() {
    with_env_key(Some("env-key"), || {
        let resolved = resolve_config(&ResolveOptions::default(), &make_config()).unwrap();
        assert_eq!(resolved.access_key, "env-key");
    });
}

#[test]
#[serial]
fn test_empty_env_key_falls_back_to_file() {
    with_env_key(Some(""), || {
        let resolved = resolve_config(&ResolveOptions::default(), &make_config()).unwrap();
        assert_eq!(resolved.access_key, "file-key");
    });
}

#[test]
#[serial]
fn test_file_values_used_when_cli_not_specified() {
    with_env_key(None, || {
        let resolved = resolve_config(&ResolveOptions::default(), &make_config()).unwrap();

        assert_eq!(resolved.access_key, "file-key");
        assert_eq!(resolved.endpoint, "http://file.local/v2");
        assert_eq!(resolved.target_language.as_deref(), Some("pt"));
        assert_eq!(resolved.source_language.as_deref(), Some("en"));
    });
}

#[test]
#[serial]
fn test_cli_languages_and_endpoint_override_file() {
    with_env_key(None, || {
        let options = ResolveOptions {
            key: None,
            endpoint: Some("http://cli.local/v2".to_string()),
            to: Some("ja".to_string()),
            from: Some("fr".to_string()),
        };
        let resolved = resolve_config(&options, &make_config()).unwrap();

        assert_eq!(resolved.endpoint, "http://cli.local/v2");
        assert_eq!(resolved.target_language.as_deref(), Some("ja"));
        assert_eq!(resolved.source_language.as_deref(), Some("fr"));
    });
}

#[test]
#[serial]
fn test_builtin_endpoint_default() {
    with_env_key(None, || {
        let mut config = make_config();
        config.api.endpoint = None;

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    });
}

#[test]
#[serial]
fn test_no_key_anywhere_is_an_error() {
    with_env_key(None, || {
        let mut config = make_config();
        config.api.key = None;

        let result = resolve_config(&ResolveOptions::default(), &config);
        assert!(result.unwrap_err().to_string().contains("API key"));
    });
}
