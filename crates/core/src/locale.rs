//! Locale codes used to key translations.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A locale code such as `en`, `en_US` or `es_AR`.
///
/// Accepts a two or three letter lowercase language, optionally followed by an
/// underscore and a two letter uppercase region. Hyphens are normalised to
/// underscores on parse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language part (`en` for `en_US`).
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }
}

impl ValueObject for Locale {}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        let mut parts = normalized.split('_');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        let language_ok = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_lowercase());
        let region_ok = match region {
            None => true,
            Some(r) => r.len() == 2 && r.chars().all(|c| c.is_ascii_uppercase()),
        };

        if !language_ok || !region_ok || parts.next().is_some() {
            return Err(DomainError::validation(format!("invalid locale code: {s:?}")));
        }
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for Locale {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
