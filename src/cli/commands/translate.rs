use anyhow::{Result, bail};

use super::connect;
use crate::cli::args::ApiArgs;
use crate::input::{InputReader, InputSource};
use crate::status;
use crate::translation::{OneOrMany, Translate, Translation};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub source: InputSource,
    pub to: Option<String>,
    pub from: Option<String>,
    pub api: ApiArgs,
    pub show_detected: bool,
    pub json: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let (client, config) = connect(&options.api, options.to, options.from)?;
    let target = config.require_target()?;
    let texts = InputReader::read(&options.source)?;

    let spinner = Spinner::new("Translating...");
    let result = translate_texts(&client, texts, target, config.source_language.as_deref()).await;
    spinner.stop();
    let translation = result?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&translation)?);
    } else {
        print_translation(&translation, options.show_detected);
    }

    status!(
        "{}",
        Style::secondary(format!(
            "{} text(s) translated to {target}",
            translation.text.len()
        ))
    );

    Ok(())
}

/// Sends the input texts in one request. A single text is sent as a single
/// value so the answer comes back unwrapped.
async fn translate_texts(
    translator: &impl Translate,
    mut texts: Vec<String>,
    target: &str,
    source: Option<&str>,
) -> Result<Translation> {
    if texts.iter().all(String::is_empty) {
        bail!("Input is empty");
    }

    let input = if texts.len() == 1 {
        OneOrMany::One(texts.remove(0))
    } else {
        OneOrMany::Many(texts)
    };

    Ok(translator.translate(input, target, source).await?)
}

fn print_translation(translation: &Translation, show_detected: bool) {
    let texts: Vec<&String> = match &translation.text {
        OneOrMany::One(text) => vec![text],
        OneOrMany::Many(texts) => texts.iter().collect(),
    };

    for (index, text) in texts.into_iter().enumerate() {
        match source_for(&translation.source_language, index) {
            Some(code) if show_detected => println!("{} {text}", Style::code(format!("[{code}]"))),
            _ => println!("{text}"),
        }
    }
}

/// Source language that applies to the text at `index`.
///
/// A single source (given by the caller or detected for a single text)
/// applies to every position.
fn source_for(source: &OneOrMany<Option<String>>, index: usize) -> Option<&str> {
    match source {
        OneOrMany::One(code) => code.as_deref(),
        OneOrMany::Many(codes) => codes.get(index).and_then(Option::as_deref),
    }
}
