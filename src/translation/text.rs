//! Single-or-sequence values at the public boundary of the client.

use serde::Serialize;

/// Either one value or an ordered sequence of values.
///
/// [`TranslationClient::translate`](super::TranslationClient::translate)
/// answers in the same shape it was called with: `One` in gives `One` out,
/// `Many` in gives `Many` out with the order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into a sequence, whichever shape this is.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Returns the single value, or `None` for a sequence.
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    /// Rebuilds a value of the same shape as `self` from `items`.
    ///
    /// For `One`, the first item is kept; `None` is returned when `items` is empty.
    pub(crate) fn reshape<U>(&self, items: Vec<U>) -> Option<OneOrMany<U>> {
        match self {
            Self::One(_) => items.into_iter().next().map(OneOrMany::One),
            Self::Many(_) => Some(OneOrMany::Many(items)),
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&String> for OneOrMany<String> {
    fn from(value: &String) -> Self {
        Self::One(value.clone())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(value: [&str; N]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_string()).collect())
    }
}
