//! Query-string construction for the translation API.
//!
//! The API expects repeated parameters (`q=a&q=b`) rather than an encoded
//! array, so multi-valued parameters are serialized one pair per element.

use url::form_urlencoded;

/// Value of a single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}

/// Builds a form-URL-encoded query string.
///
/// Multi-valued parameters come first, one `name=value` pair per element in
/// element order. Single-valued parameters follow in the order given. An
/// empty `Multiple` contributes nothing.
pub fn build_query(params: &[(&str, QueryValue)]) -> String {
    let mut fragments = Vec::new();

    for (name, value) in params {
        if let QueryValue::Multiple(values) = value {
            for item in values {
                fragments.push(encode_pairs(&[(*name, item.as_str())]));
            }
        }
    }

    let singles: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(name, value)| match value {
            QueryValue::Single(item) => Some((*name, item.as_str())),
            QueryValue::Multiple(_) => None,
        })
        .collect();

    if !singles.is_empty() {
        fragments.push(encode_pairs(&singles));
    }

    fragments.join("&")
}

fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
