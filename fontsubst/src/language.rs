// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Language tags attached to font requests.

use core::fmt;
use icu_locale_core::{langid, LanguageIdentifier};

/// Language of the text a font is requested for.
///
/// Besides concrete BCP 47 tags, requests may carry one of three ambient
/// values that defer the decision to the host environment.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TextLanguage {
    /// No language was specified.
    #[default]
    Unspecified,
    /// The language of the running system.
    System,
    /// The language could not be determined.
    Unknown,
    /// A concrete language.
    Tag(LanguageIdentifier),
}

impl TextLanguage {
    /// Parses a language tag.
    ///
    /// The empty string maps to [`TextLanguage::Unspecified`], `"system"` to
    /// [`TextLanguage::System`] and both `"und"` and tags that fail to parse
    /// to [`TextLanguage::Unknown`].
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() {
            return Self::Unspecified;
        }
        if tag.eq_ignore_ascii_case("system") {
            return Self::System;
        }
        match LanguageIdentifier::try_from_str(tag) {
            Ok(id) if id.language.as_str() != "und" => Self::Tag(id),
            _ => Self::Unknown,
        }
    }

    /// Returns the concrete language identifier, if any.
    pub fn tag(&self) -> Option<&LanguageIdentifier> {
        match self {
            Self::Tag(id) => Some(id),
            _ => None,
        }
    }

    /// Returns true for the ambient values that stand in for the system
    /// language.
    pub fn is_ambient(&self) -> bool {
        !matches!(self, Self::Tag(_))
    }

    /// Returns true if the language is Chinese, Japanese or Korean.
    pub fn is_cjk(&self) -> bool {
        self.tag()
            .is_some_and(|id| matches!(id.language.as_str(), "zh" | "ja" | "ko"))
    }

    /// Returns this language with ambient values replaced by `system`.
    pub fn or_system<'a>(&'a self, system: &'a LanguageIdentifier) -> &'a LanguageIdentifier {
        self.tag().unwrap_or(system)
    }
}

impl From<LanguageIdentifier> for TextLanguage {
    fn from(value: LanguageIdentifier) -> Self {
        Self::Tag(value)
    }
}

impl From<&str> for TextLanguage {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for TextLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("unspecified"),
            Self::System => f.write_str("system"),
            Self::Unknown => f.write_str("und"),
            Self::Tag(id) => write!(f, "{id}"),
        }
    }
}

/// Returns the keys used to look up per-language font lists, most specific
/// first.
///
/// Chinese is canonicalized to one of the five regional variants the font
/// tables distinguish. Other languages keep their language and region
/// subtags and fall back to the bare language.
pub(crate) fn lookup_keys(id: &LanguageIdentifier) -> LookupKeys {
    let lang = id.language.as_str();
    let region = id.region.as_ref().map(|r| r.as_str()).unwrap_or_default();
    if lang == "zh" {
        let canonical = match region {
            "HK" => langid!("zh-HK"),
            "TW" => langid!("zh-TW"),
            "MO" => langid!("zh-MO"),
            "SG" => langid!("zh-SG"),
            "CN" => langid!("zh-CN"),
            _ => {
                if id.script.as_ref().map(|s| s.as_str()) == Some("Hant") {
                    langid!("zh-TW")
                } else {
                    // Default to simplified Chinese
                    langid!("zh-CN")
                }
            }
        };
        return LookupKeys {
            specific: Some(canonical),
            language: langid!("zh"),
        };
    }
    let language = LanguageIdentifier::from(id.language);
    let specific = id.region.map(|region| {
        let mut specific = language.clone();
        specific.region = Some(region);
        specific
    });
    LookupKeys { specific, language }
}

/// Lookup keys for a language, see [`lookup_keys`].
#[derive(Clone, Debug)]
pub(crate) struct LookupKeys {
    specific: Option<LanguageIdentifier>,
    language: LanguageIdentifier,
}

impl LookupKeys {
    pub(crate) fn iter(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.specific.iter().chain(Some(&self.language))
    }
}

#[cfg(test)]
mod tests {
    use super::{lookup_keys, TextLanguage};
    use icu_locale_core::langid;

    fn keys(tag: &str) -> Vec<String> {
        let TextLanguage::Tag(id) = TextLanguage::parse(tag) else {
            panic!("{tag} should parse as a concrete language");
        };
        lookup_keys(&id).iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn parse_ambient_values() {
        assert_eq!(TextLanguage::parse(""), TextLanguage::Unspecified);
        assert_eq!(TextLanguage::parse("System"), TextLanguage::System);
        assert_eq!(TextLanguage::parse("und"), TextLanguage::Unknown);
        assert_eq!(TextLanguage::parse("not a tag!"), TextLanguage::Unknown);
        assert_eq!(
            TextLanguage::parse("zh-TW"),
            TextLanguage::Tag(langid!("zh-TW"))
        );
    }

    #[test]
    fn cjk_classification() {
        assert!(TextLanguage::parse("zh-Hant-HK").is_cjk());
        assert!(TextLanguage::parse("ja").is_cjk());
        assert!(TextLanguage::parse("ko-KR").is_cjk());
        assert!(!TextLanguage::parse("en-US").is_cjk());
        assert!(!TextLanguage::System.is_cjk());
        assert!(!TextLanguage::Unknown.is_cjk());
    }

    #[test]
    fn ambient_values_use_system_language() {
        let system = langid!("zh-TW");
        assert_eq!(TextLanguage::System.or_system(&system), &system);
        assert_eq!(TextLanguage::Unspecified.or_system(&system), &system);
        assert_eq!(
            TextLanguage::parse("ja").or_system(&system),
            &langid!("ja")
        );
    }

    #[test]
    fn chinese_lookup_keys() {
        assert_eq!(keys("zh"), ["zh-CN", "zh"]);
        assert_eq!(keys("zh-Hans"), ["zh-CN", "zh"]);
        assert_eq!(keys("zh-Hant"), ["zh-TW", "zh"]);
        assert_eq!(keys("zh-Hant-HK"), ["zh-HK", "zh"]);
        assert_eq!(keys("zh-MO"), ["zh-MO", "zh"]);
        assert_eq!(keys("zh-SG"), ["zh-SG", "zh"]);
    }

    #[test]
    fn other_lookup_keys() {
        assert_eq!(keys("ja"), ["ja"]);
        assert_eq!(keys("ja-JP"), ["ja-JP", "ja"]);
        assert_eq!(keys("sr-Latn-RS"), ["sr-RS", "sr"]);
    }
}
