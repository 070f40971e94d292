//! Subcommand implementations.

use anyhow::Result;

use crate::cli::args::ApiArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::translation::TranslationClient;

/// Configure command handler.
pub mod configure;

/// Languages listing command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;

/// Merges CLI overrides with the config file and builds a client.
///
/// Fails with the library's `InvalidAccessKey` before any request is made.
fn connect(
    api: &ApiArgs,
    to: Option<String>,
    from: Option<String>,
) -> Result<(TranslationClient, ResolvedConfig)> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let options = ResolveOptions {
        key: api.key.clone(),
        endpoint: api.endpoint.clone(),
        to,
        from,
    };
    let config = resolve_config(&options, &file_config)?;

    let client =
        TranslationClient::new(config.access_key.clone())?.with_endpoint(config.endpoint.clone());

    Ok((client, config))
}
