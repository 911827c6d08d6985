//! Locale-keyed translation collections.
//!
//! Translatable entities keep one record per locale. Lookup takes the locale as
//! an explicit argument; there is no ambient "current locale".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A locale-scoped record of translatable content.
pub trait Translation {
    fn locale(&self) -> &Locale;
}

/// Translation collection keyed by locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations<T> {
    by_locale: BTreeMap<Locale, T>,
}

impl<T> Default for Translations<T> {
    fn default() -> Self {
        Self {
            by_locale: BTreeMap::new(),
        }
    }
}

impl<T: Translation> Translations<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-locale lookup.
    pub fn get(&self, locale: &Locale) -> Option<&T> {
        self.by_locale.get(locale)
    }

    pub fn get_mut(&mut self, locale: &Locale) -> Option<&mut T> {
        self.by_locale.get_mut(locale)
    }

    /// Lookup with fallback: exact locale first, then `fallback` when given.
    pub fn resolve(&self, locale: &Locale, fallback: Option<&Locale>) -> Option<&T> {
        self.get(locale)
            .or_else(|| fallback.and_then(|f| self.get(f)))
    }

    /// Returns the record for `locale`, creating it with `factory` when absent.
    pub fn get_or_create<F>(&mut self, locale: &Locale, factory: F) -> &mut T
    where
        F: FnOnce(Locale) -> T,
    {
        self.by_locale
            .entry(locale.clone())
            .or_insert_with(|| factory(locale.clone()))
    }

    /// Insert or replace the record for its own locale. Returns the replaced one.
    pub fn insert(&mut self, translation: T) -> Option<T> {
        let locale = translation.locale().clone();
        self.by_locale.insert(locale, translation)
    }

    pub fn remove(&mut self, locale: &Locale) -> Option<T> {
        self.by_locale.remove(locale)
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.by_locale.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.by_locale.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_locale.values()
    }

    pub fn len(&self) -> usize {
        self.by_locale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_locale.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        locale: Locale,
        text: String,
    }

    impl Translation for Label {
        fn locale(&self) -> &Locale {
            &self.locale
        }
    }

    fn locale(code: &str) -> Locale {
        code.parse().unwrap()
    }

    fn label(code: &str, text: &str) -> Label {
        Label {
            locale: locale(code),
            text: text.to_string(),
        }
    }

    #[test]
    fn resolve_prefers_exact_locale() {
        let mut t = Translations::new();
        t.insert(label("en_US", "hello"));
        t.insert(label("es_AR", "hola"));

        let found = t.resolve(&locale("es_AR"), Some(&locale("en_US"))).unwrap();
        assert_eq!(found.text, "hola");
    }

    #[test]
    fn resolve_falls_back_when_locale_missing() {
        let mut t = Translations::new();
        t.insert(label("en_US", "hello"));

        let found = t.resolve(&locale("fr_FR"), Some(&locale("en_US"))).unwrap();
        assert_eq!(found.text, "hello");
        assert!(t.resolve(&locale("fr_FR"), None).is_none());
    }

    #[test]
    fn get_or_create_only_invokes_factory_once() {
        let mut t: Translations<Label> = Translations::new();
        let mut calls = 0;
        for _ in 0..3 {
            t.get_or_create(&locale("de_DE"), |l| {
                calls += 1;
                Label {
                    locale: l,
                    text: String::new(),
                }
            });
        }
        assert_eq!(calls, 1);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn insert_replaces_record_for_same_locale() {
        let mut t = Translations::new();
        assert!(t.insert(label("en", "a")).is_none());
        let replaced = t.insert(label("en", "b")).unwrap();
        assert_eq!(replaced.text, "a");
        assert_eq!(t.get(&locale("en")).unwrap().text, "b");
    }
}
