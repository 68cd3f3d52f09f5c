// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family substitution and glyph fallback.
//!
//! A [`FontSubstitution`] engine maps requested family names to installed
//! families using compatible family aliases, pattern matched font features
//! with per-language equivalents, per-language default fonts and an optional
//! host hook. When a chosen face lacks characters it also selects the family
//! that should render them next.
//!
//! The installed fonts are provided by the host through
//! [`FontCollection`]; [`MemoryCollection`] is a simple in-memory
//! implementation.
//!
//! ```
//! use fontsubst::{
//!     FontQuery, FontSubstitution, MemoryCollection, MemoryFace, MissingChars,
//!     NoDefaultFonts, SubstitutionOptions,
//! };
//!
//! let mut fonts = MemoryCollection::new();
//! fonts
//!     .add_face(MemoryFace::new("Noto Serif CJK TC").with_range('\u{4E00}'..='\u{9FFF}'))
//!     .add_face(MemoryFace::new("DejaVu Sans").with_range(' '..='~'));
//!
//! let mut engine = FontSubstitution::new(SubstitutionOptions::default(), NoDefaultFonts);
//! let mut query = FontQuery::new("PMingLiU").with_language("zh-TW");
//! assert!(engine.substitute_family(&fonts, &mut query));
//! assert_eq!(query.search_name, "Noto Serif CJK TC");
//!
//! let face = MemoryFace::new("DejaVu Sans").with_range(' '..='~');
//! let mut query = FontQuery::new("DejaVu Sans").with_language("zh-TW");
//! let mut missing = MissingChars::from("中文");
//! engine.substitute_for_missing_glyphs(&fonts, &mut query, &face, &mut missing);
//! assert_eq!(query.search_name, "Noto Serif CJK TC");
//! assert!(missing.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `config` (enabled by default): Load rules from TOML with
//!   [`SubstitutionConfig`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod builtin;
pub mod collection;
pub mod pattern;

mod cache;
mod charset;
mod compat;
mod defaults;
mod engine;
mod eudc;
mod feature;
mod glyph_fallback;
mod hook;
mod language;
mod query;

#[cfg(feature = "config")]
mod config;
#[cfg(feature = "config")]
mod error;

#[cfg(test)]
mod tests;

pub use icu_locale_core::LanguageIdentifier;

pub use cache::SubstitutionCache;
pub use charset::MissingChars;
pub use collection::{
    CjkSupport, CodePages, Charmap, FontCollection, FontFace, FontFamily, MemoryCharmap,
    MemoryCollection, MemoryFace, QueryStatus,
};
pub use compat::CompatibilityMap;
pub use defaults::{DefaultFontKind, DefaultFontTable, DefaultFonts, NoDefaultFonts};
pub use engine::{FontSubstitution, SubstitutionOptions};
pub use eudc::{EudcRelations, SYSTEM_DEFAULT_EUDC_FONT};
pub use feature::{FeatureTable, FontFeature, LanguageFontMap};
pub use hook::PreMatchHook;
pub use language::TextLanguage;
pub use query::FontQuery;

#[cfg(feature = "config")]
pub use config::{CompatibleConfig, FeatureConfig, SubstitutionConfig};
#[cfg(feature = "config")]
pub use error::ConfigError;
