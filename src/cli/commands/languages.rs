//! Languages listing command handler.

use anyhow::Result;

use super::connect;
use crate::cli::args::ApiArgs;
use crate::translation::{LanguageEntry, ListLanguages};
use crate::ui::{Spinner, Style};

/// Prints the languages supported by the API to stdout.
///
/// With `target`, display names are shown in that language.
pub async fn run_languages(api: &ApiArgs, target: Option<&str>, json: bool) -> Result<()> {
    let (client, _) = connect(api, None, None)?;

    let spinner = Spinner::new("Fetching languages...");
    let result = fetch_languages(&client, target).await;
    spinner.stop();
    let languages = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&languages)?);
    } else {
        print_languages(&languages);
    }

    Ok(())
}

async fn fetch_languages(
    lister: &impl ListLanguages,
    target: Option<&str>,
) -> Result<Vec<LanguageEntry>> {
    Ok(lister.languages(target).await?)
}

fn print_languages(languages: &[LanguageEntry]) {
    let width = languages
        .iter()
        .map(|l| l.language.len())
        .max()
        .unwrap_or(0);

    println!("{}", Style::header("Supported languages"));
    for entry in languages {
        let padded = format!("{:width$}", entry.language);
        match &entry.name {
            Some(name) => println!("  {} {}", Style::code(padded), Style::secondary(name)),
            None => println!("  {}", Style::code(entry.language.as_str())),
        }
    }
}
