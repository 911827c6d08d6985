//! Configuration loading and representation.

use marketplace_core::Locale;
use tracing::warn;

pub const DEFAULT_LOCALE_VAR: &str = "MARKETPLACE_DEFAULT_LOCALE";
pub const FALLBACK_LOCALE_VAR: &str = "MARKETPLACE_FALLBACK_LOCALE";
pub const SHOP_PAGE_SIZE_VAR: &str = "MARKETPLACE_SHOP_PAGE_SIZE";

const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_PAGE_SIZE: usize = 9;

/// Catalog-wide settings used by the persistence and lookup collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Locale the shop renders when a request names none.
    pub default_locale: Locale,
    /// Locale used when a vendor has no translation in the requested one.
    pub fallback_locale: Locale,
    /// Products per shop list page when the query does not ask for a page.
    pub shop_page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl CatalogConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Invalid values are logged and replaced by
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_locale = lookup(DEFAULT_LOCALE_VAR)
            .and_then(|raw| parse_locale(DEFAULT_LOCALE_VAR, &raw))
            .unwrap_or_else(builtin_locale);

        let fallback_locale = lookup(FALLBACK_LOCALE_VAR)
            .and_then(|raw| parse_locale(FALLBACK_LOCALE_VAR, &raw))
            .unwrap_or_else(|| default_locale.clone());

        let shop_page_size = match lookup(SHOP_PAGE_SIZE_VAR) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!(var = SHOP_PAGE_SIZE_VAR, value = %raw, "invalid page size; using default");
                    DEFAULT_PAGE_SIZE
                }
            },
        };

        Self {
            default_locale,
            fallback_locale,
            shop_page_size,
        }
    }
}

fn builtin_locale() -> Locale {
    match DEFAULT_LOCALE.parse() {
        Ok(locale) => locale,
        Err(err) => unreachable!("built-in locale {DEFAULT_LOCALE} rejected: {err}"),
    }
}

fn parse_locale(var: &str, raw: &str) -> Option<Locale> {
    match raw.parse() {
        Ok(locale) => Some(locale),
        Err(err) => {
            warn!(var, value = %raw, error = %err, "invalid locale; using default");
            None
        }
    }
}
