//! Error types for the translation client.

/// Message used when a response body does not have the expected shape.
pub const INVALID_RESPONSE: &str = "Invalid response";

/// Failure reported by an [`HttpTransport`](super::HttpTransport).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    ///
    /// The request URL is stripped, since its query string carries the key.
    #[error(transparent)]
    Http(reqwest::Error),

    /// The server answered with a non-success status.
    #[error("`{method} {url}` resulted in a `{status}` response: {body}")]
    Status {
        method: String,
        /// Request URL without the query string.
        url: String,
        status: u16,
        body: String,
    },

    /// Any other transport-specific failure.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Errors returned by [`TranslationClient`](super::TranslationClient).
///
/// Every variant carries a fixed numeric classification, see [`Error::code`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid access key")]
    InvalidAccessKey,

    #[error("Invalid text")]
    InvalidText,

    #[error("Invalid target language")]
    InvalidTargetLanguage,

    #[error("Invalid source language")]
    InvalidSourceLanguage,

    /// Transport failure or malformed body for a translate call.
    #[error("{message}")]
    Translation {
        message: String,
        #[source]
        source: Option<TransportError>,
    },

    /// Transport failure or malformed body for a languages call.
    #[error("{message}")]
    Languages {
        message: String,
        #[source]
        source: Option<TransportError>,
    },
}

impl Error {
    /// Returns the numeric classification of this error.
    pub const fn code(&self) -> u8 {
        match self {
            Self::InvalidAccessKey => 1,
            Self::InvalidText => 2,
            Self::InvalidTargetLanguage | Self::InvalidSourceLanguage => 3,
            Self::Translation { .. } => 4,
            Self::Languages { .. } => 5,
        }
    }

    pub(crate) fn translation_transport(err: TransportError) -> Self {
        Self::Translation {
            message: format!("Translation error: {err}"),
            source: Some(err),
        }
    }

    pub(crate) fn translation_invalid_response() -> Self {
        Self::Translation {
            message: INVALID_RESPONSE.to_string(),
            source: None,
        }
    }

    pub(crate) fn languages_transport(err: TransportError) -> Self {
        Self::Languages {
            message: format!("Languages error: {err}"),
            source: Some(err),
        }
    }

    pub(crate) fn languages_invalid_response() -> Self {
        Self::Languages {
            message: INVALID_RESPONSE.to_string(),
            source: None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
