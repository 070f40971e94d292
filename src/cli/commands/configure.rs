//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};

use crate::config::{ApiConfig, ConfigFile, ConfigManager, DefaultsConfig};
use crate::translation::{ACCESS_KEY_LEN, DEFAULT_ENDPOINT, is_valid_language};
use crate::ui::Style;

/// How an interactive configure session ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Saved,
    /// Escape or Ctrl+C at any prompt; the file is left untouched.
    Cancelled,
}

/// Runs the configure command.
///
/// With `show`, prints the current configuration; otherwise prompts for the
/// API key, default languages and endpoint and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        print_config(&manager.load_or_default(), &manager);
        return Ok(());
    }

    match settle(edit_config(&manager))? {
        Outcome::Saved => {
            println!();
            println!(
                "{} Configuration saved to {}",
                Style::success("✓"),
                Style::secondary(manager.config_path().display())
            );
        }
        Outcome::Cancelled => {
            println!();
            println!("{}", Style::secondary("Configuration unchanged"));
        }
    }

    Ok(())
}

/// Turns a prompt cancellation into [`Outcome::Cancelled`] and passes any
/// other failure through.
fn settle(session: Result<()>) -> Result<Outcome> {
    match session {
        Ok(()) => Ok(Outcome::Saved),
        Err(err) if err.downcast_ref::<InquireError>().is_some_and(is_cancellation) => {
            Ok(Outcome::Cancelled)
        }
        Err(err) => Err(err),
    }
}

const fn is_cancellation(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Prompts for every setting, then writes the file once all answers are in.
fn edit_config(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default();
    print_config(&config, manager);

    let key = prompt_key(&config.api)?;
    let to = prompt_language("Default target language:", config.gtranslate.to.as_deref(), true)?;
    let from = prompt_language(
        "Default source language (empty to auto-detect):",
        config.gtranslate.from.as_deref(),
        false,
    )?;
    let endpoint = prompt_endpoint(config.api.endpoint.as_deref())?;

    config.gtranslate = DefaultsConfig { to, from };
    config.api = ApiConfig {
        key: key.or_else(|| config.api.key.clone()),
        key_env: config.api.key_env.clone(),
        endpoint,
    };

    manager.save(&config)
}

/// Asks whether to store a key in the file. Returns `None` to keep the current one.
fn prompt_key(api: &ApiConfig) -> Result<Option<String>> {
    let env_var = api.key_env_name();
    let store = Confirm::new("Store the API key in the config file?")
        .with_default(api.key.is_some())
        .with_help_message(&format!(
            "Keys in ${env_var} take precedence over the config file"
        ))
        .prompt()?;

    if !store {
        return Ok(None);
    }

    let key = Password::new("API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    let key = key.trim().to_string();

    if key.len() != ACCESS_KEY_LEN {
        bail!("API key must be exactly {ACCESS_KEY_LEN} characters long");
    }

    Ok(Some(key))
}

fn prompt_language(message: &str, default: Option<&str>, required: bool) -> Result<Option<String>> {
    let mut prompt = Text::new(message).with_help_message("Language code, e.g. pt, en, zh-tw");
    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let code = prompt.prompt()?.trim().to_string();
    if code.is_empty() {
        if required {
            bail!("Target language cannot be empty");
        }
        return Ok(None);
    }

    if !is_valid_language(&code) {
        bail!("Invalid language code: '{code}'");
    }

    Ok(Some(code))
}

fn prompt_endpoint(default: Option<&str>) -> Result<Option<String>> {
    let endpoint = Text::new("API endpoint:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .prompt()?;
    let endpoint = endpoint.trim();

    if endpoint.is_empty() || endpoint == DEFAULT_ENDPOINT {
        Ok(None)
    } else {
        Ok(Some(endpoint.to_string()))
    }
}

fn print_config(config: &ConfigFile, manager: &ConfigManager) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        config.gtranslate.to.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("from"),
        config
            .gtranslate
            .from
            .as_deref()
            .map_or_else(|| Style::secondary("(auto-detect)"), Style::value)
    );
    println!(
        "  {}       {}",
        Style::label("key"),
        config
            .api
            .get_key()
            .map_or_else(not_set, |k| Style::value(mask_key(&k)))
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::value(config.api.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    );
    println!();
}

/// Shows only the last four characters of a key.
fn mask_key(key: &str) -> String {
    let visible: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_completed_session_is_saved() {
        assert_eq!(settle(Ok(())).unwrap(), Outcome::Saved);
    }

    #[test]
    fn test_settle_escape_and_ctrl_c_cancel() {
        let escaped = settle(Err(InquireError::OperationCanceled.into())).unwrap();
        assert_eq!(escaped, Outcome::Cancelled);

        let interrupted = settle(Err(InquireError::OperationInterrupted.into())).unwrap();
        assert_eq!(interrupted, Outcome::Cancelled);
    }

    #[test]
    fn test_settle_keeps_real_failures() {
        let err = settle(Err(anyhow::anyhow!("Invalid language code: '12'"))).unwrap_err();
        assert!(err.to_string().contains("Invalid language code"));

        let err = settle(Err(InquireError::NotTTY.into())).unwrap_err();
        assert!(err.downcast_ref::<InquireError>().is_some());
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("HOHilKG4n7hzKc9xWRrZMfO5xvZpgcvBM1gCebf"), "****Cebf");
        assert_eq!(mask_key("ab"), "****ab");
    }
}
