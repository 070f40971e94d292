//! # gtranslate - Google Translate API client
//!
//! A client for the Google Translate v2 REST API, plus the `gtranslate`
//! command-line tool built on it.
//!
//! ## Library
//!
//! ```no_run
//! use gtranslate::translation::{OneOrMany, TranslationClient};
//!
//! # async fn demo() -> gtranslate::translation::Result<()> {
//! let client = TranslationClient::new("your-39-character-google-api-key-here")?;
//!
//! // One text in, one text out; the detected source language comes back too.
//! let translation = client.translate("What's your name?", "pt", None).await?;
//! assert!(translation.text.is_one());
//!
//! // A batch keeps its order.
//! let batch = client.translate(["Good morning", "Good night"], "pt", Some("en")).await?;
//! if let OneOrMany::Many(texts) = batch.text {
//!     assert_eq!(texts.len(), 2);
//! }
//!
//! let languages = client.languages(Some("pt-br")).await?;
//! # let _ = languages;
//! # Ok(())
//! # }
//! ```
//!
//! ## Command line
//!
//! ```bash
//! gtranslate --to pt "What's your name?"
//! echo "Good morning" | gtranslate --to ja --show-detected
//! gtranslate languages --target pt-br
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gtranslate/config.toml`:
//!
//! ```toml
//! [gtranslate]
//! to = "pt"
//!
//! [api]
//! key_env = "GOOGLE_TRANSLATE_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and option resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Tracing subscriber setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Google Translate API client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
