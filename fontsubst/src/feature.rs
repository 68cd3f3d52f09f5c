// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of font families by name.
//!
//! A [`FontFeature`] groups families that are stylistically interchangeable,
//! for example all Ming/Song style faces. Requested names are matched against
//! the feature's pattern list and the feature then supplies the candidate
//! families to try, per language.

use crate::language::{lookup_keys, TextLanguage};
use crate::pattern::{self, append_list};
use alloc::{string::String, vec::Vec};
use hashbrown::HashMap;
use icu_locale_core::LanguageIdentifier;

/// Maps languages to `;` separated family lists.
pub type LanguageFontMap = HashMap<LanguageIdentifier, String>;

/// Named classification bucket for font families.
#[derive(Clone, Default, Debug)]
pub struct FontFeature {
    pattern: String,
    equal_fonts: LanguageFontMap,
    default_fallback: String,
    union_fonts: LanguageFontMap,
    default_union: String,
    private_use_area_font: String,
}

impl FontFeature {
    /// Creates a new feature matching names against the given pattern list.
    ///
    /// See [`pattern::matches`] for the pattern syntax.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    /// Sets the families considered drop-in equals, per language.
    pub fn with_equal_fonts(mut self, equal_fonts: LanguageFontMap) -> Self {
        self.equal_fonts = equal_fonts;
        self
    }

    /// Sets the families appended after the language specific equals.
    pub fn with_default_fallback(mut self, families: impl Into<String>) -> Self {
        self.default_fallback = families.into();
        self
    }

    /// Sets the families used for glyph coverage fallback, per language.
    pub fn with_union_fonts(mut self, union_fonts: LanguageFontMap) -> Self {
        self.union_fonts = union_fonts;
        self
    }

    /// Sets the coverage fallback families used when a language has none.
    pub fn with_default_union(mut self, families: impl Into<String>) -> Self {
        self.default_union = families.into();
        self
    }

    /// Sets the family supplying private use area glyphs.
    pub fn with_private_use_area_font(mut self, family: impl Into<String>) -> Self {
        self.private_use_area_font = family.into();
        self
    }

    /// Returns the pattern list of the feature.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the per-language equal family lists.
    pub fn equal_fonts(&self) -> &LanguageFontMap {
        &self.equal_fonts
    }

    /// Returns the default fallback family list.
    pub fn default_fallback(&self) -> &str {
        &self.default_fallback
    }

    /// Returns the per-language union family lists.
    pub fn union_fonts(&self) -> &LanguageFontMap {
        &self.union_fonts
    }

    /// Returns the default union family list.
    pub fn default_union(&self) -> &str {
        &self.default_union
    }

    /// Returns the private use area family, empty if none was set.
    pub fn private_use_area_font(&self) -> &str {
        &self.private_use_area_font
    }

    pub(crate) fn set_private_use_area_font(&mut self, family: &str) {
        self.private_use_area_font.clear();
        self.private_use_area_font.push_str(family);
    }

    /// Returns true if `name` matches the pattern list of this feature.
    pub fn is_match(&self, name: &str) -> bool {
        pattern::matches(&self.pattern, name)
    }

    /// Returns the ordered equal family list for the given language, with
    /// the default fallback families appended.
    pub fn equal_fonts_for(&self, language: &TextLanguage) -> String {
        let mut list = String::new();
        if let Some(families) = lookup(&self.equal_fonts, language) {
            append_list(&mut list, families);
        }
        append_list(&mut list, &self.default_fallback);
        list
    }

    /// Returns the union family list for the given language, or the default
    /// union families if the language has none.
    pub fn union_fonts_for(&self, language: &TextLanguage) -> &str {
        match lookup(&self.union_fonts, language) {
            Some(families) if !families.is_empty() => families,
            _ => &self.default_union,
        }
    }
}

fn lookup<'a>(map: &'a LanguageFontMap, language: &TextLanguage) -> Option<&'a str> {
    let id = language.tag()?;
    if let Some(families) = map.get(id) {
        return Some(families);
    }
    lookup_keys(id)
        .iter()
        .find_map(|key| map.get(key))
        .map(String::as_str)
}

/// Ordered collection of font features.
///
/// Lookups always proceed in registration order and the first match wins.
#[derive(Clone, Default, Debug)]
pub struct FeatureTable {
    features: Vec<FontFeature>,
}

impl FeatureTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feature to the table.
    pub fn register(&mut self, feature: FontFeature) {
        self.features.push(feature);
    }

    /// Returns the first registered feature matching `name`.
    pub fn find(&self, name: &str) -> Option<&FontFeature> {
        self.features.iter().find(|feature| feature.is_match(name))
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut FontFeature> {
        self.features.iter_mut().find(|feature| feature.is_match(name))
    }

    /// Returns an iterator over the features in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FontFeature> + Clone {
        self.features.iter()
    }

    /// Returns the number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if no features are registered.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
