// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-language default fonts provided by the host.

use crate::language::{lookup_keys, TextLanguage};
use alloc::string::String;
use hashbrown::HashMap;
use icu_locale_core::{langid, LanguageIdentifier};

/// Kind of default font requested from [`DefaultFonts`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DefaultFontKind {
    /// Default font for CJK body text.
    CjkText,
    /// Default sans serif user interface font.
    UiSans,
}

/// Source of locale dependent default fonts.
///
/// Every font value is a `;` separated list of family names in order of
/// preference.
pub trait DefaultFonts {
    /// Returns the default font of the given kind for a language.
    fn default_font(&self, language: &TextLanguage, kind: DefaultFontKind) -> Option<String>;

    /// Returns the user interface font for a language.
    fn ui_font(&self, language: &TextLanguage) -> Option<String>;

    /// Returns the language of the user interface.
    fn ui_language(&self) -> TextLanguage;
}

/// Default fonts that never name any family.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoDefaultFonts;

impl DefaultFonts for NoDefaultFonts {
    fn default_font(&self, _language: &TextLanguage, _kind: DefaultFontKind) -> Option<String> {
        None
    }

    fn ui_font(&self, _language: &TextLanguage) -> Option<String> {
        None
    }

    fn ui_language(&self) -> TextLanguage {
        TextLanguage::Unknown
    }
}

#[derive(Clone, Default, Debug)]
struct LanguageDefaults {
    cjk_text: Option<String>,
    ui_sans: Option<String>,
    ui: Option<String>,
}

/// Table of default fonts keyed by language.
///
/// Lookups try the region specific entry first and then the bare language.
/// Ambient languages use the entry registered for the user interface
/// language.
#[derive(Clone, Debug)]
pub struct DefaultFontTable {
    entries: HashMap<LanguageIdentifier, LanguageDefaults>,
    ui_language: TextLanguage,
}

impl DefaultFontTable {
    /// Creates an empty table for the given user interface language.
    pub fn new(ui_language: TextLanguage) -> Self {
        Self {
            entries: HashMap::new(),
            ui_language,
        }
    }

    /// Creates a table with the default CJK fonts of common platforms.
    pub fn cjk(ui_language: TextLanguage) -> Self {
        let mut table = Self::new(ui_language);
        for (tag, cjk_text, ui_sans) in CJK_DEFAULTS {
            let id = match LanguageIdentifier::try_from_str(tag) {
                Ok(id) => id,
                Err(err) => {
                    log::warn!("Skipping defaults for invalid language tag {tag:?}: {err:?}");
                    continue;
                }
            };
            table.set(id.clone(), DefaultFontKind::CjkText, cjk_text);
            table.set(id.clone(), DefaultFontKind::UiSans, ui_sans);
            table.set_ui_font(id, ui_sans);
        }
        table.set_ui_font(langid!("en"), "Segoe UI;Helvetica Neue;Cantarell;DejaVu Sans");
        table
    }

    /// Sets the default font of the given kind for a language.
    pub fn set(&mut self, language: LanguageIdentifier, kind: DefaultFontKind, families: &str) {
        let entry = self.entries.entry(language).or_default();
        let slot = match kind {
            DefaultFontKind::CjkText => &mut entry.cjk_text,
            DefaultFontKind::UiSans => &mut entry.ui_sans,
        };
        *slot = Some(families.into());
    }

    /// Sets the user interface font for a language.
    pub fn set_ui_font(&mut self, language: LanguageIdentifier, families: &str) {
        self.entries.entry(language).or_default().ui = Some(families.into());
    }

    fn find<'a>(
        &'a self,
        language: &TextLanguage,
        select: impl Fn(&'a LanguageDefaults) -> Option<&'a String>,
    ) -> Option<String> {
        let id = match language.tag() {
            Some(id) => id,
            None => self.ui_language.tag()?,
        };
        if let Some(found) = self.entries.get(id).and_then(&select) {
            return Some(found.clone());
        }
        lookup_keys(id)
            .iter()
            .find_map(|key| self.entries.get(key).and_then(&select))
            .cloned()
    }
}

impl DefaultFonts for DefaultFontTable {
    fn default_font(&self, language: &TextLanguage, kind: DefaultFontKind) -> Option<String> {
        match kind {
            DefaultFontKind::CjkText => self.find(language, |entry| entry.cjk_text.as_ref()),
            DefaultFontKind::UiSans => self.find(language, |entry| entry.ui_sans.as_ref()),
        }
    }

    fn ui_font(&self, language: &TextLanguage) -> Option<String> {
        self.find(language, |entry| entry.ui.as_ref())
    }

    fn ui_language(&self) -> TextLanguage {
        self.ui_language.clone()
    }
}

const CJK_DEFAULTS: &[(&str, &str, &str)] = &[
    (
        "zh-TW",
        "新細明體;PMingLiU;Apple LiSung;Source Han Serif TC;Noto Serif CJK TC",
        "微軟正黑體;Microsoft JhengHei;PingFang TC;Source Han Sans TC;Noto Sans CJK TC",
    ),
    (
        "zh-HK",
        "細明體_HKSCS;MingLiU_HKSCS;Source Han Serif HC;Noto Serif CJK HK",
        "微軟正黑體;Microsoft JhengHei;PingFang HK;Source Han Sans HC;Noto Sans CJK HK",
    ),
    (
        "zh-MO",
        "細明體_HKSCS;MingLiU_HKSCS;Source Han Serif HC;Noto Serif CJK HK",
        "微軟正黑體;Microsoft JhengHei;PingFang HK;Source Han Sans HC;Noto Sans CJK HK",
    ),
    (
        "zh-CN",
        "宋体;SimSun;Source Han Serif SC;Noto Serif CJK SC",
        "微软雅黑;Microsoft YaHei;PingFang SC;Source Han Sans SC;Noto Sans CJK SC",
    ),
    (
        "zh-SG",
        "宋体;SimSun;Source Han Serif SC;Noto Serif CJK SC",
        "微软雅黑;Microsoft YaHei;PingFang SC;Source Han Sans SC;Noto Sans CJK SC",
    ),
    (
        "ja",
        "MS PMincho;YuMincho;Source Han Serif;Noto Serif CJK JP",
        "Meiryo;Hiragino Sans;Source Han Sans;Noto Sans CJK JP",
    ),
    (
        "ko",
        "Batang;AppleMyungjo;Source Han Serif K;Noto Serif CJK KR",
        "Malgun Gothic;Apple SD Gothic Neo;Source Han Sans K;Noto Sans CJK KR",
    ),
];
