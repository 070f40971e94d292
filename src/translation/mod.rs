mod client;
mod error;
mod language;
mod query;
mod response;
mod text;
mod transport;

pub use client::{
    ACCESS_KEY_LEN, DEFAULT_ENDPOINT, ListLanguages, Translate, Translation, TranslationClient,
};
pub use error::{Error, INVALID_RESPONSE, Result, TransportError};
pub use language::is_valid_language;
pub use query::{QueryValue, build_query};
pub use response::{LanguageEntry, TranslationResult};
pub use text::OneOrMany;
pub use transport::{HttpTransport, ReqwestTransport};
