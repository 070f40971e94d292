use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, warn};

use super::error::{Error, Result};
use super::language::is_valid_language;
use super::query::{QueryValue, build_query};
use super::response::{LanguageEntry, parse_languages, parse_translations};
use super::text::OneOrMany;
use super::transport::{HttpTransport, ReqwestTransport};

/// Base URL of the Google Translate v2 API.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/language/translate/v2";

/// Required length of an API access key.
pub const ACCESS_KEY_LEN: usize = 39;

/// Result of [`TranslationClient::translate`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Translation {
    /// Translated text(s), in the shape of the input.
    pub text: OneOrMany<String>,
    /// The caller's source language as `One` when one was given, otherwise
    /// the language detected for each text in the shape of the input.
    /// `None` marks a text the API reported no detection for.
    pub source_language: OneOrMany<Option<String>>,
}

pub struct TranslationClient<T = ReqwestTransport> {
    access_key: String,
    endpoint: String,
    transport: T,
}

impl TranslationClient {
    /// Creates a client using the default reqwest transport.
    pub fn new(access_key: impl Into<String>) -> Result<Self> {
        Self::with_transport(access_key, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> TranslationClient<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(access_key: impl Into<String>, transport: T) -> Result<Self> {
        let access_key = access_key.into();
        if access_key.len() != ACCESS_KEY_LEN {
            return Err(Error::InvalidAccessKey);
        }

        Ok(Self {
            access_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport,
        })
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Translates one text or a batch of texts into `target_language`.
    ///
    /// A single `&str`/`String` yields a single translation; a sequence yields
    /// a sequence in input order. When `source_language` is `None` (or empty)
    /// the API detects it and the detection is returned in
    /// [`Translation::source_language`].
    pub async fn translate(
        &self,
        text: impl Into<OneOrMany<String>>,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<Translation> {
        let text = text.into();
        let source_language = source_language.filter(|s| !s.is_empty());

        let single = text.is_one();
        let texts = text.into_vec();
        if texts.is_empty() || (single && texts[0].is_empty()) {
            return Err(Error::InvalidText);
        }

        if !is_valid_language(target_language) {
            return Err(Error::InvalidTargetLanguage);
        }

        if let Some(source) = source_language
            && !is_valid_language(source)
        {
            return Err(Error::InvalidSourceLanguage);
        }

        let text_count = texts.len();
        let q = if single {
            QueryValue::Single(texts.into_iter().next().unwrap_or_default())
        } else {
            QueryValue::Multiple(texts)
        };

        let mut params = vec![
            ("key", QueryValue::from(self.access_key.as_str())),
            ("q", q),
            ("target", QueryValue::from(target_language)),
        ];
        if let Some(source) = source_language {
            params.push(("source", QueryValue::from(source)));
        }

        debug!(
            endpoint = %self.endpoint,
            texts = text_count,
            target_language,
            source_language,
            "sending translate request"
        );

        let body = self
            .transport
            .request(Method::POST, &self.endpoint, &build_query(&params))
            .await
            .map_err(Error::translation_transport)?;

        let results = parse_translations(&body).ok_or_else(Error::translation_invalid_response)?;

        if results.len() != text_count {
            warn!(
                expected = text_count,
                received = results.len(),
                "translate response count differs from input count"
            );
        }

        let shape = if single {
            OneOrMany::One(())
        } else {
            OneOrMany::Many(Vec::new())
        };

        let detected: Vec<Option<String>> = results
            .iter()
            .map(|r| r.detected_source_language.clone())
            .collect();
        let translated: Vec<String> = results.into_iter().map(|r| r.translated_text).collect();

        let text = shape
            .reshape(translated)
            .ok_or_else(Error::translation_invalid_response)?;

        let source_language = match source_language {
            Some(source) => OneOrMany::One(Some(source.to_string())),
            None => shape
                .reshape(detected)
                .ok_or_else(Error::translation_invalid_response)?,
        };

        Ok(Translation {
            text,
            source_language,
        })
    }

    /// Lists the languages supported by the API.
    ///
    /// With a `target_language`, each entry also carries its display name in
    /// that language.
    pub async fn languages(&self, target_language: Option<&str>) -> Result<Vec<LanguageEntry>> {
        let target_language = target_language.filter(|s| !s.is_empty());

        if let Some(target) = target_language
            && !is_valid_language(target)
        {
            return Err(Error::InvalidTargetLanguage);
        }

        let mut params = vec![("key", QueryValue::from(self.access_key.as_str()))];
        if let Some(target) = target_language {
            params.push(("target", QueryValue::from(target)));
        }

        let url = format!("{}/languages", self.endpoint);
        debug!(url = %url, target_language, "sending languages request");

        let body = self
            .transport
            .request(Method::GET, &url, &build_query(&params))
            .await
            .map_err(Error::languages_transport)?;

        let languages = parse_languages(&body).ok_or_else(Error::languages_invalid_response)?;
        debug!(count = languages.len(), "received languages");

        Ok(languages)
    }
}

/// Text translation, as offered by [`TranslationClient`].
///
/// Code that only needs to translate can take `&impl Translate` and be
/// exercised without a network.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(
        &self,
        text: OneOrMany<String>,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<Translation>;
}

/// Supported-language listing, as offered by [`TranslationClient`].
#[async_trait]
pub trait ListLanguages: Send + Sync {
    async fn languages(&self, target_language: Option<&str>) -> Result<Vec<LanguageEntry>>;
}

#[async_trait]
impl<T: HttpTransport> Translate for TranslationClient<T> {
    async fn translate(
        &self,
        text: OneOrMany<String>,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<Translation> {
        Self::translate(self, text, target_language, source_language).await
    }
}

#[async_trait]
impl<T: HttpTransport> ListLanguages for TranslationClient<T> {
    async fn languages(&self, target_language: Option<&str>) -> Result<Vec<LanguageEntry>> {
        Self::languages(self, target_language).await
    }
}
