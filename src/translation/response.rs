//! Response shapes returned by the translation API.

use serde::{Deserialize, Serialize};

/// One translated text, in the position of its input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
}

/// A language supported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language code, e.g. `pt-BR`.
    pub language: String,
    /// Display name, present when the listing was requested with a target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TranslationsData {
    translations: Vec<TranslationResult>,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<LanguageEntry>,
}

/// Parses a translate response body, decoding HTML entities in each text.
///
/// Returns `None` when the body is not JSON or lacks `data.translations`.
pub(crate) fn parse_translations(body: &str) -> Option<Vec<TranslationResult>> {
    let envelope: Envelope<TranslationsData> = serde_json::from_str(body).ok()?;

    Some(
        envelope
            .data
            .translations
            .into_iter()
            .map(|result| TranslationResult {
                translated_text: html_escape::decode_html_entities(&result.translated_text)
                    .into_owned(),
                detected_source_language: result.detected_source_language,
            })
            .collect(),
    )
}

/// Parses a languages response body.
///
/// Returns `None` when the body is not JSON or lacks `data.languages`.
pub(crate) fn parse_languages(body: &str) -> Option<Vec<LanguageEntry>> {
    let envelope: Envelope<LanguagesData> = serde_json::from_str(body).ok()?;
    Some(envelope.data.languages)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translations() {
        let body = r#"{"data":{"translations":[{"translatedText":"Qual o seu nome?","detectedSourceLanguage":"en"}]}}"#;
        let results = parse_translations(body).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].translated_text, "Qual o seu nome?");
        assert_eq!(results[0].detected_source_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_translations_without_detection() {
        let body = r#"{"data":{"translations":[{"translatedText":"Olá"}]}}"#;
        let results = parse_translations(body).unwrap();

        assert_eq!(results[0].detected_source_language, None);
    }

    #[test]
    fn test_parse_translations_decodes_entities() {
        let body = r#"{"data":{"translations":[{"translatedText":"I&#39;m &quot;here&quot; &amp; there"}]}}"#;
        let results = parse_translations(body).unwrap();

        assert_eq!(results[0].translated_text, r#"I'm "here" & there"#);
    }

    #[test]
    fn test_parse_translations_missing_data() {
        assert!(parse_translations(r#"{"error":{"code":400}}"#).is_none());
        assert!(parse_translations(r#"{"data":{}}"#).is_none());
        assert!(parse_translations(r#"{"data":{"translations":"nope"}}"#).is_none());
        assert!(parse_translations("not json").is_none());
        assert!(parse_translations("").is_none());
    }

    #[test]
    fn test_parse_translations_entry_without_text() {
        assert!(parse_translations(r#"{"data":{"translations":[{"detectedSourceLanguage":"en"}]}}"#).is_none());
    }

    #[test]
    fn test_parse_languages() {
        let body = r#"{"data":{"languages":[{"language":"en","name":"Inglês"},{"language":"pt"}]}}"#;
        let languages = parse_languages(body).unwrap();

        assert_eq!(
            languages,
            vec![
                LanguageEntry {
                    language: "en".to_string(),
                    name: Some("Inglês".to_string()),
                },
                LanguageEntry {
                    language: "pt".to_string(),
                    name: None,
                },
            ]
        );
    }

    #[test]
    fn test_parse_languages_missing_data() {
        assert!(parse_languages(r#"{"data":{"translations":[]}}"#).is_none());
        assert!(parse_languages("[]").is_none());
    }

    #[test]
    fn test_serialize_language_entry_skips_missing_name() {
        let entry = LanguageEntry {
            language: "en".to_string(),
            name: None,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"language":"en"}"#
        );
    }
}
