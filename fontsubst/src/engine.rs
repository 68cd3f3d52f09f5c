// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Family substitution.

use crate::builtin;
use crate::cache::SubstitutionCache;
use crate::collection::{is_open_symbol, FontCollection, FontFamily};
use crate::compat::CompatibilityMap;
use crate::defaults::{DefaultFontKind, DefaultFonts};
use crate::eudc::EudcRelations;
use crate::feature::{FeatureTable, FontFeature};
use crate::hook::PreMatchHook;
use crate::FontQuery;
use alloc::{borrow::ToOwned, boxed::Box, string::String};
use icu_locale_core::{langid, LanguageIdentifier};

/// Options for a substitution engine.
#[derive(Clone, Debug)]
pub struct SubstitutionOptions {
    /// Language used for cache keys when a request carries no concrete
    /// language.
    ///
    /// The default value is `en-US`.
    pub system_language: LanguageIdentifier,

    /// If true, the builtin CJK font features are registered.
    ///
    /// The default value is true.
    pub builtin_features: bool,

    /// If true, the builtin compatible CJK families are registered.
    ///
    /// The default value is true.
    pub builtin_compatible_fonts: bool,

    /// Families tried last by glyph fallback for non-CJK text.
    ///
    /// The default value is empty.
    pub final_fallback_fonts: String,

    /// Families tried last by glyph fallback for CJK text.
    ///
    /// The default value is [`builtin::FINAL_CJK_FALLBACK_FONTS`].
    pub final_cjk_fallback_fonts: String,
}

impl Default for SubstitutionOptions {
    fn default() -> Self {
        Self {
            system_language: langid!("en-US"),
            builtin_features: true,
            builtin_compatible_fonts: true,
            final_fallback_fonts: String::new(),
            final_cjk_fallback_fonts: builtin::FINAL_CJK_FALLBACK_FONTS.into(),
        }
    }
}

/// Font substitution engine.
///
/// Owns the rule tables and the resolution cache. The font collection is
/// borrowed per request and may change between requests; cached results are
/// only dropped by [`FontSubstitution::clear_cache`].
pub struct FontSubstitution {
    pub(crate) features: FeatureTable,
    compat: CompatibilityMap,
    cache: SubstitutionCache,
    eudc: EudcRelations,
    pub(crate) defaults: Box<dyn DefaultFonts>,
    hook: Option<Box<dyn PreMatchHook>>,
    system_language: LanguageIdentifier,
    pub(crate) final_fallback_fonts: String,
    pub(crate) final_cjk_fallback_fonts: String,
}

impl FontSubstitution {
    /// Creates a new engine with the given options and default fonts.
    pub fn new(options: SubstitutionOptions, defaults: impl DefaultFonts + 'static) -> Self {
        let mut engine = Self {
            features: FeatureTable::new(),
            compat: CompatibilityMap::new(),
            cache: SubstitutionCache::new(),
            eudc: EudcRelations::new(),
            defaults: Box::new(defaults),
            hook: None,
            system_language: options.system_language,
            final_fallback_fonts: options.final_fallback_fonts,
            final_cjk_fallback_fonts: options.final_cjk_fallback_fonts,
        };
        if options.builtin_features {
            for feature in builtin::cjk_features() {
                engine.register_feature(feature);
            }
        }
        if options.builtin_compatible_fonts {
            for (family, alias) in builtin::compatible_fonts() {
                engine.register_compatible_font(family, alias);
            }
        }
        engine
    }

    /// Returns the language used for requests without a concrete language.
    pub fn system_language(&self) -> &LanguageIdentifier {
        &self.system_language
    }

    /// Sets the language used for requests without a concrete language.
    pub fn set_system_language(&mut self, language: LanguageIdentifier) {
        self.system_language = language;
    }

    /// Appends a font feature.
    ///
    /// Features registered earlier take priority.
    pub fn register_feature(&mut self, feature: FontFeature) {
        self.features.register(feature);
    }

    /// Returns the first feature whose pattern matches `name`.
    pub fn find_feature(&self, name: &str) -> Option<&FontFeature> {
        self.features.find(name)
    }

    /// Returns the registered features in priority order.
    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    /// Registers `alias` as compatible with `family`.
    pub fn register_compatible_font(&mut self, family: &str, alias: &str) {
        self.compat.register(family, alias);
    }

    /// Returns the compatible family table.
    pub fn compatible_fonts(&self) -> &CompatibilityMap {
        &self.compat
    }

    /// Registers the EUDC font for a master family.
    ///
    /// A master of [`SYSTEM_DEFAULT_EUDC_FONT`](crate::SYSTEM_DEFAULT_EUDC_FONT)
    /// sets the system wide EUDC font. Otherwise the relation is recorded and
    /// the first feature matching `master` adopts `font` as its private use
    /// area font.
    pub fn set_eudc_relation(&mut self, master: &str, font: &str) {
        if self.eudc.set(master, font) {
            if let Some(feature) = self.features.find_mut(master) {
                feature.set_private_use_area_font(font);
            }
        }
    }

    /// Returns the installed EUDC family for `master`.
    pub fn eudc_relation<'a>(
        &self,
        fonts: &'a dyn FontCollection,
        master: &str,
    ) -> Option<&'a dyn FontFamily> {
        self.eudc.resolve(&self.features, fonts, master)
    }

    /// Returns the families tried last by glyph fallback for non-CJK text.
    pub fn final_fallback_fonts(&self) -> &str {
        &self.final_fallback_fonts
    }

    /// Sets the families tried last by glyph fallback for non-CJK text.
    pub fn set_final_fallback_fonts(&mut self, families: &str) {
        families.clone_into(&mut self.final_fallback_fonts);
    }

    /// Returns the families tried last by glyph fallback for CJK text.
    pub fn final_cjk_fallback_fonts(&self) -> &str {
        &self.final_cjk_fallback_fonts
    }

    /// Sets the families tried last by glyph fallback for CJK text.
    pub fn set_final_cjk_fallback_fonts(&mut self, families: &str) {
        families.clone_into(&mut self.final_cjk_fallback_fonts);
    }

    /// Sets the hook consulted after the builtin heuristics fail.
    pub fn set_pre_match_hook(&mut self, hook: impl PreMatchHook + 'static) {
        self.hook = Some(Box::new(hook));
    }

    /// Removes the pre-match hook.
    pub fn clear_pre_match_hook(&mut self) {
        self.hook = None;
    }

    /// Returns the resolution cache.
    pub fn cache(&self) -> &SubstitutionCache {
        &self.cache
    }

    /// Drops every cached resolution.
    ///
    /// Call this after the set of installed fonts changes.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Logs every cached resolution at debug level.
    pub fn dump_cache(&self) {
        log::debug!("Substitution cache: {} entries", self.cache.len());
        for (target, language, resolved) in self.cache.iter() {
            log::debug!("  {target:?} [{language}] -> {resolved:?}");
        }
    }

    /// Replaces the search name of `query` with an installed family that can
    /// stand in for the requested one.
    ///
    /// Returns false if no substitute was found, in which case the search
    /// name is left as it was.
    pub fn substitute_family(&mut self, fonts: &dyn FontCollection, query: &mut FontQuery) -> bool {
        if query.symbol_encoded || is_open_symbol(&query.target_name) {
            return false;
        }
        let language = query.language.or_system(&self.system_language).clone();
        if let Some(resolved) = self.cache.lookup(&query.target_name, &language) {
            log::trace!(
                "Cache hit for {:?} [{language}]: {resolved:?}",
                query.target_name
            );
            resolved.clone_into(&mut query.search_name);
            return true;
        }
        let Some((stage, resolved)) = self.resolve_uncached(fonts, query) else {
            log::trace!("No substitute for {:?} [{language}]", query.target_name);
            return false;
        };
        log::debug!(
            "Substituted {:?} [{language}] with {resolved:?} ({stage})",
            query.target_name
        );
        self.cache.store(&query.target_name, &language, &resolved);
        query.search_name = resolved;
        true
    }

    fn resolve_uncached(
        &self,
        fonts: &dyn FontCollection,
        query: &mut FontQuery,
    ) -> Option<(&'static str, String)> {
        if let Some(resolved) = self.compat.resolve(fonts, &query.target_name) {
            return Some(("compatible", resolved));
        }
        if let Some(feature) = self.features.find(&query.target_name) {
            let families = feature.equal_fonts_for(&query.language);
            log::trace!("Feature {:?} candidates: {families:?}", feature.pattern());
            if let Some(family) = fonts.find_family_by_any_of(&families) {
                return Some(("feature", family.name().into()));
            }
        } else if query.language.is_cjk() {
            for kind in [DefaultFontKind::CjkText, DefaultFontKind::UiSans] {
                let families = self.defaults.default_font(&query.language, kind);
                let found = families
                    .as_deref()
                    .and_then(|families| fonts.find_family_by_any_of(families));
                if let Some(family) = found {
                    return Some(("default", family.name().into()));
                }
            }
        }
        let hook: &dyn PreMatchHook = self.hook.as_deref()?;
        let saved = query.search_name.clone();
        if PreMatchHook::substitute(hook, query) && query.search_name != saved {
            if let Some(family) = fonts.find_family(&query.search_name) {
                return Some(("hook", family.name().into()));
            }
            log::trace!(
                "Hook rewrote {:?} to missing family {:?}",
                query.target_name,
                query.search_name
            );
        }
        query.search_name = saved;
        None
    }
}

impl core::fmt::Debug for FontSubstitution {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontSubstitution")
            .field("features", &self.features.len())
            .field("compatible_fonts", &self.compat.len())
            .field("cache", &self.cache.len())
            .field("has_hook", &self.hook.is_some())
            .field("system_language", &self.system_language)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{FontSubstitution, SubstitutionOptions};
    use crate::collection::{MemoryCollection, MemoryFace};
    use crate::{FontFeature, FontQuery, NoDefaultFonts};

    fn bare() -> FontSubstitution {
        let options = SubstitutionOptions {
            builtin_features: false,
            builtin_compatible_fonts: false,
            ..Default::default()
        };
        FontSubstitution::new(options, NoDefaultFonts)
    }

    #[test]
    fn default_options_register_builtins() {
        let engine = FontSubstitution::new(SubstitutionOptions::default(), NoDefaultFonts);
        assert!(engine.find_feature("PMingLiU").is_some());
        assert!(!engine.compatible_fonts().is_empty());
        assert!(engine.final_fallback_fonts().is_empty());
        assert!(engine.final_cjk_fallback_fonts().contains("TW-Sung"));
        let empty = bare();
        assert!(empty.features().is_empty());
        assert!(empty.compatible_fonts().is_empty());
    }

    #[test]
    fn symbol_requests_are_refused() {
        let mut engine = bare();
        engine.register_compatible_font("OpenSymbol", "Symbol");
        engine.register_compatible_font("Arial", "Liberation Sans");
        let mut fonts = MemoryCollection::new();
        fonts
            .add_face(MemoryFace::new("Symbol"))
            .add_face(MemoryFace::new("Liberation Sans"));

        let mut query = FontQuery::new("Open Symbol");
        assert!(!engine.substitute_family(&fonts, &mut query));
        assert_eq!(query.search_name, "Open Symbol");

        let mut query = FontQuery::new("Arial").with_symbol_encoding(true);
        assert!(!engine.substitute_family(&fonts, &mut query));
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn eudc_relation_updates_feature() {
        let mut engine = bare();
        engine.register_feature(FontFeature::new("*Ming"));
        engine.set_eudc_relation("PMingLiU", "MingEUDC");
        assert_eq!(
            engine.find_feature("PMingLiU").unwrap().private_use_area_font(),
            "MingEUDC"
        );
        engine.set_eudc_relation("SystemDefaultEUDCFont", "EUDC");
        assert_eq!(
            engine.find_feature("PMingLiU").unwrap().private_use_area_font(),
            "MingEUDC"
        );
    }

    #[test]
    fn missing_explicit_eudc_font_skips_feature_font() {
        let mut engine = bare();
        engine.register_feature(FontFeature::new("*Ming"));
        engine.set_eudc_relation("PMingLiU", "Missing EUDC");
        engine.set_eudc_relation("MingLiU", "MingEUDC");
        let mut fonts = MemoryCollection::new();
        fonts.add_face(MemoryFace::new("MingEUDC"));

        assert!(engine.eudc_relation(&fonts, "PMingLiU").is_none());
        let found = engine.eudc_relation(&fonts, "Ming Light").unwrap();
        assert_eq!(found.name(), "MingEUDC");
    }

    #[test]
    fn final_lists_can_be_replaced() {
        let mut engine = bare();
        engine.set_final_fallback_fonts("Noto Sans;DejaVu Sans");
        engine.set_final_cjk_fallback_fonts("Noto Sans CJK TC");
        assert_eq!(engine.final_fallback_fonts(), "Noto Sans;DejaVu Sans");
        assert_eq!(engine.final_cjk_fallback_fonts(), "Noto Sans CJK TC");
    }
}
