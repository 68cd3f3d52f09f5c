// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Substitution rules loaded from TOML.
//!
//! ```toml
//! system_language = "zh-TW"
//! final_fallback_fonts = "Noto Sans;DejaVu Sans"
//!
//! [[feature]]
//! pattern = "*Ming;*Song"
//! default_fallback = "Noto Serif CJK TC"
//! private_use_area = "EUDC"
//! equal = { zh-TW = "PMingLiU;Apple LiSung", zh-CN = "SimSun" }
//!
//! [[compatible]]
//! family = "Noto Sans CJK TC"
//! aliases = ["Source Han Sans TC"]
//!
//! [eudc]
//! SystemDefaultEUDCFont = "EUDC"
//! ```

use crate::error::ConfigError;
use crate::{DefaultFonts, FontFeature, FontSubstitution, LanguageFontMap, SubstitutionOptions};
use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Substitution rules in addition to, or instead of, the builtin tables.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionConfig {
    /// Language used for requests without a concrete language.
    pub system_language: Option<String>,
    /// Whether the builtin CJK features are registered by
    /// [`FontSubstitution::from_config`].
    pub builtin_features: Option<bool>,
    /// Whether the builtin compatible families are registered by
    /// [`FontSubstitution::from_config`].
    pub builtin_compatible_fonts: Option<bool>,
    /// Families tried last by glyph fallback for non-CJK text.
    pub final_fallback_fonts: Option<String>,
    /// Families tried last by glyph fallback for CJK text.
    pub final_cjk_fallback_fonts: Option<String>,
    /// Font features in priority order.
    #[serde(rename = "feature")]
    pub features: Vec<FeatureConfig>,
    /// Compatible family groups.
    #[serde(rename = "compatible")]
    pub compatible_fonts: Vec<CompatibleConfig>,
    /// EUDC font per master family.
    pub eudc: BTreeMap<String, String>,
}

/// A font feature entry.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// `;` separated pattern list.
    pub pattern: String,
    /// Equal families keyed by language tag.
    pub equal: BTreeMap<String, String>,
    /// Families appended to every equal list.
    pub default_fallback: String,
    /// Union families keyed by language tag.
    pub union: BTreeMap<String, String>,
    /// Union families for languages without an entry.
    pub default_union: String,
    /// Family for private use area characters.
    pub private_use_area: String,
}

/// A family and the families compatible with it.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibleConfig {
    /// Family name.
    pub family: String,
    /// Compatible families in order of preference.
    pub aliases: Vec<String>,
}

impl SubstitutionConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the engine options described by this configuration.
    pub fn options(&self) -> Result<SubstitutionOptions, ConfigError> {
        let mut options = SubstitutionOptions::default();
        if let Some(tag) = &self.system_language {
            options.system_language = parse_language(tag)?;
        }
        if let Some(enabled) = self.builtin_features {
            options.builtin_features = enabled;
        }
        if let Some(enabled) = self.builtin_compatible_fonts {
            options.builtin_compatible_fonts = enabled;
        }
        if let Some(families) = &self.final_fallback_fonts {
            options.final_fallback_fonts.clone_from(families);
        }
        if let Some(families) = &self.final_cjk_fallback_fonts {
            options.final_cjk_fallback_fonts.clone_from(families);
        }
        Ok(options)
    }

    /// Registers the rules of this configuration with `engine`.
    ///
    /// Features and compatible families are registered in file order after
    /// any already present, EUDC relations in order of their master names.
    /// Nothing is registered if a language tag is invalid.
    pub fn apply(&self, engine: &mut FontSubstitution) -> Result<(), ConfigError> {
        let system_language = self
            .system_language
            .as_deref()
            .map(parse_language)
            .transpose()?;
        let features = self
            .features
            .iter()
            .map(FeatureConfig::to_feature)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(language) = system_language {
            engine.set_system_language(language);
        }
        if let Some(families) = &self.final_fallback_fonts {
            engine.set_final_fallback_fonts(families);
        }
        if let Some(families) = &self.final_cjk_fallback_fonts {
            engine.set_final_cjk_fallback_fonts(families);
        }
        for feature in features {
            engine.register_feature(feature);
        }
        for entry in &self.compatible_fonts {
            for alias in &entry.aliases {
                engine.register_compatible_font(&entry.family, alias);
            }
        }
        for (master, font) in &self.eudc {
            engine.set_eudc_relation(master, font);
        }
        log::info!(
            "Applied font substitution config: {} features, {} compatible families, {} EUDC relations",
            self.features.len(),
            self.compatible_fonts.len(),
            self.eudc.len()
        );
        Ok(())
    }
}

impl FeatureConfig {
    fn to_feature(&self) -> Result<FontFeature, ConfigError> {
        Ok(FontFeature::new(self.pattern.as_str())
            .with_equal_fonts(language_map(&self.equal)?)
            .with_default_fallback(self.default_fallback.as_str())
            .with_union_fonts(language_map(&self.union)?)
            .with_default_union(self.default_union.as_str())
            .with_private_use_area_font(self.private_use_area.as_str()))
    }
}

fn parse_language(tag: &str) -> Result<LanguageIdentifier, ConfigError> {
    LanguageIdentifier::try_from_str(tag).map_err(|_| ConfigError::InvalidLanguage {
        tag: tag.to_owned(),
    })
}

fn language_map(entries: &BTreeMap<String, String>) -> Result<LanguageFontMap, ConfigError> {
    entries
        .iter()
        .map(|(tag, families)| Ok((parse_language(tag)?, families.clone())))
        .collect()
}

impl FontSubstitution {
    /// Creates an engine from a configuration.
    pub fn from_config(
        config: &SubstitutionConfig,
        defaults: impl DefaultFonts + 'static,
    ) -> Result<Self, ConfigError> {
        let mut engine = Self::new(config.options()?, defaults);
        config.apply(&mut engine)?;
        Ok(engine)
    }
}
