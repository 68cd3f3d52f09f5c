// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization of family substitutions.

use alloc::string::String;
use hashbrown::HashMap;
use icu_locale_core::LanguageIdentifier;

/// Maps requested family names and languages to resolved family names.
///
/// Callers are expected to pass the effective language, with ambient
/// languages already replaced by the system language. Entries are never
/// evicted.
#[derive(Clone, Default, Debug)]
pub struct SubstitutionCache {
    entries: HashMap<String, HashMap<LanguageIdentifier, String>>,
}

impl SubstitutionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached substitute for the given family and language.
    pub fn lookup(&self, target: &str, language: &LanguageIdentifier) -> Option<&str> {
        self.entries
            .get(target)?
            .get(language)
            .map(String::as_str)
    }

    /// Records `resolved` as the substitute for the given family and
    /// language.
    pub fn store(&mut self, target: &str, language: &LanguageIdentifier, resolved: &str) {
        self.entries
            .entry_ref(target)
            .or_default()
            .insert(language.clone(), resolved.into());
    }

    /// Returns the number of cached substitutions.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over `(target, language, resolved)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageIdentifier, &str)> + '_ {
        self.entries.iter().flat_map(|(target, per_language)| {
            per_language
                .iter()
                .map(move |(language, resolved)| (target.as_str(), language, resolved.as_str()))
        })
    }
}
