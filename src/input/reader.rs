use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// Largest input accepted from a file or stdin.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Where the text to translate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Texts given on the command line, translated as one batch.
    Args(Vec<String>),
    File(String),
    Stdin,
}

impl InputSource {
    /// Picks the input source from CLI arguments: positional texts win over `--file`.
    pub fn from_args(texts: Vec<String>, file: Option<String>) -> Self {
        if !texts.is_empty() {
            Self::Args(texts)
        } else if let Some(path) = file {
            Self::File(path)
        } else {
            Self::Stdin
        }
    }
}

pub struct InputReader;

impl InputReader {
    /// Reads the texts to translate.
    ///
    /// Files and stdin yield a single text with the trailing newline removed.
    pub fn read(source: &InputSource) -> Result<Vec<String>> {
        let text = match source {
            InputSource::Args(texts) => return Ok(texts.clone()),
            InputSource::File(path) => Self::read_file(path)?,
            InputSource::Stdin => Self::read_limited(io::stdin().lock(), "stdin")?,
        };

        Ok(vec![text.trim_end_matches(['\n', '\r']).to_string()])
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size, "file"));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_limited(reader: impl Read, what: &str) -> Result<String> {
        let mut buffer = Vec::new();
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read from {what}"))?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(too_large(buffer.len(), "input"));
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn too_large(size: usize, what: &str) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the {what} into smaller parts.",
        size as f64 / 1024.0 / 1024.0
    )
}
