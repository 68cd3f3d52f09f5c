// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback for characters missing from a face.

use crate::collection::{is_open_symbol, FontCollection, FontFace, QueryStatus};
use crate::pattern::{append_list, family_names};
use crate::{FontQuery, FontSubstitution, MissingChars, TextLanguage};
use alloc::{borrow::ToOwned, string::String};
use core::ops::RangeInclusive;

/// Private use area range of the Microsoft symbol encoding.
const SYMBOL_RANGE: RangeInclusive<char> = '\u{F020}'..='\u{F0FF}';

const SYMBOL_FAMILY: &str = "Wingdings";

impl FontSubstitution {
    /// Selects a family to render characters that `face` lacks.
    ///
    /// On return `query.search_name` names the family to use next and
    /// `missing` holds the characters that family still cannot render. If
    /// nothing covers the characters, the family of `face` is chosen and
    /// `missing` is cleared so the host renders its missing glyph boxes.
    ///
    /// Always returns true.
    pub fn substitute_for_missing_glyphs(
        &self,
        fonts: &dyn FontCollection,
        query: &mut FontQuery,
        face: &dyn FontFace,
        missing: &mut MissingChars,
    ) -> bool {
        let stage = if self.symbol_fallback(fonts, query, face, missing) {
            "symbol"
        } else if self.feature_fallback(fonts, query, missing) {
            "feature"
        } else if self.eudc_fallback(fonts, query, missing) {
            "eudc"
        } else if scan_fallback(fonts, query, missing) {
            "scan"
        } else {
            face.family_name().clone_into(&mut query.search_name);
            missing.clear();
            "face"
        };
        log::debug!(
            "Glyph fallback for {:?} [{}]: {:?} ({stage}), {} still missing",
            query.target_name,
            query.language,
            query.search_name,
            missing.len()
        );
        true
    }

    fn symbol_fallback(
        &self,
        fonts: &dyn FontCollection,
        query: &mut FontQuery,
        face: &dyn FontFace,
        missing: &mut MissingChars,
    ) -> bool {
        let Some(symbol_family) = fonts.find_family(SYMBOL_FAMILY) else {
            return false;
        };
        if missing.remove_where(|ch| SYMBOL_RANGE.contains(&ch)) == 0 {
            return false;
        }
        // Non-CJK faces keep their own missing glyphs for symbol characters.
        let family = if face.code_pages().cjk().any() {
            symbol_family.name()
        } else {
            face.family_name()
        };
        family.clone_into(&mut query.search_name);
        true
    }

    fn feature_fallback(
        &self,
        fonts: &dyn FontCollection,
        query: &mut FontQuery,
        missing: &mut MissingChars,
    ) -> bool {
        let mut candidates = String::new();
        if let Some(feature) = self.features.find(&query.target_name) {
            append_list(&mut candidates, &feature.equal_fonts_for(&query.language));
            append_list(&mut candidates, feature.union_fonts_for(&query.language));
        } else {
            let ui_font = if query.language == TextLanguage::Unknown {
                self.defaults.ui_font(&self.defaults.ui_language())
            } else {
                self.defaults.ui_font(&query.language)
            };
            if let Some(ui_font) = ui_font {
                append_list(&mut candidates, &ui_font);
            }
        }
        let final_fonts = if query.language.is_cjk() {
            &self.final_cjk_fallback_fonts
        } else {
            &self.final_fallback_fonts
        };
        append_list(&mut candidates, final_fonts);

        for name in family_names(&candidates) {
            let Some(family) = fonts.find_family(name) else {
                continue;
            };
            log::trace!("Probing {:?} for {missing:?}", family.name());
            let charmap = family.best_face(query).and_then(|face| face.charmap());
            if missing.take_covered(charmap) {
                family.name().clone_into(&mut query.search_name);
                return true;
            }
        }
        false
    }

    fn eudc_fallback(
        &self,
        fonts: &dyn FontCollection,
        query: &mut FontQuery,
        missing: &mut MissingChars,
    ) -> bool {
        let Some(family) = self.eudc_relation(fonts, &query.target_name) else {
            return false;
        };
        let charmap = family.best_face(query).and_then(|face| face.charmap());
        if missing.take_covered(charmap) {
            family.name().clone_into(&mut query.search_name);
            return true;
        }
        false
    }
}

fn scan_fallback(
    fonts: &dyn FontCollection,
    query: &mut FontQuery,
    missing: &mut MissingChars,
) -> bool {
    let mut found = None;
    fonts.scan_faces(&mut |face: &dyn FontFace| {
        if face.is_symbol_encoded() || is_open_symbol(face.family_name()) {
            return QueryStatus::Continue;
        }
        if missing.take_covered(face.charmap()) {
            found = Some(String::from(face.family_name()));
            return QueryStatus::Stop;
        }
        QueryStatus::Continue
    });
    match found {
        Some(family) => {
            query.search_name = family;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::collection::{CodePages, MemoryCollection, MemoryFace};
    use crate::{FontQuery, FontSubstitution, MissingChars, NoDefaultFonts, SubstitutionOptions};

    fn engine() -> FontSubstitution {
        let options = SubstitutionOptions {
            builtin_features: false,
            builtin_compatible_fonts: false,
            final_cjk_fallback_fonts: String::new(),
            ..Default::default()
        };
        FontSubstitution::new(options, NoDefaultFonts)
    }

    #[test]
    fn symbol_chars_go_to_wingdings_for_cjk_faces() {
        let mut fonts = MemoryCollection::new();
        fonts.add_face(MemoryFace::new("Wingdings").with_range('\u{F020}'..='\u{F0FF}'));
        let face = MemoryFace::new("PMingLiU").with_code_pages(CodePages::CP950);
        let mut query = FontQuery::new("PMingLiU");
        let mut missing = MissingChars::from("\u{F041}x");
        assert!(engine().substitute_for_missing_glyphs(&fonts, &mut query, &face, &mut missing));
        assert_eq!(query.search_name, "Wingdings");
        assert_eq!(missing.to_string(), "x");
    }

    #[test]
    fn symbol_chars_need_an_installed_wingdings() {
        let mut fonts = MemoryCollection::new();
        fonts.add_face(MemoryFace::new("Symbols").with_range('\u{F000}'..='\u{F0FF}'));
        let face = MemoryFace::new("Arial");
        let mut query = FontQuery::new("Arial");
        let mut missing = MissingChars::from("\u{F041}");
        engine().substitute_for_missing_glyphs(&fonts, &mut query, &face, &mut missing);
        assert_eq!(query.search_name, "Symbols");
        assert!(missing.is_empty());
    }

    #[test]
    fn scan_skips_symbol_fonts() {
        let mut fonts = MemoryCollection::new();
        fonts
            .add_face(MemoryFace::new("OpenSymbol").with_chars("★"))
            .add_face(MemoryFace::new("Legacy").with_chars("★").with_symbol_encoding())
            .add_face(MemoryFace::new("DejaVu Sans").with_chars("★"));
        let face = MemoryFace::new("Arial");
        let mut query = FontQuery::new("Arial");
        let mut missing = MissingChars::from("★");
        engine().substitute_for_missing_glyphs(&fonts, &mut query, &face, &mut missing);
        assert_eq!(query.search_name, "DejaVu Sans");
    }

    #[test]
    fn final_list_follows_query_language() {
        let mut engine = engine();
        engine.set_final_fallback_fonts("Latin Fallback");
        engine.set_final_cjk_fallback_fonts("CJK Fallback");
        let mut fonts = MemoryCollection::new();
        fonts
            .add_face(MemoryFace::new("CJK Fallback").with_chars("中"))
            .add_face(MemoryFace::new("Latin Fallback").with_chars("中"));
        let face = MemoryFace::new("Arial");

        let mut query = FontQuery::new("Arial").with_language("zh-TW");
        let mut missing = MissingChars::from("中");
        engine.substitute_for_missing_glyphs(&fonts, &mut query, &face, &mut missing);
        assert_eq!(query.search_name, "CJK Fallback");

        let mut query = FontQuery::new("Arial").with_language("fr");
        let mut missing = MissingChars::from("中");
        engine.substitute_for_missing_glyphs(&fonts, &mut query, &face, &mut missing);
        assert_eq!(query.search_name, "Latin Fallback");
    }
}
