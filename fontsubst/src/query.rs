// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font requests.

use crate::TextLanguage;
use alloc::string::String;

/// Request state carried through substitution and glyph fallback.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct FontQuery {
    /// Family name as originally requested.
    pub target_name: String,
    /// Family name resolved so far.
    ///
    /// Substitution only ever replaces this with the name of an installed
    /// family.
    pub search_name: String,
    /// Language of the text the font is requested for.
    pub language: TextLanguage,
    /// True if the request uses the Microsoft symbol encoding.
    pub symbol_encoded: bool,
}

impl FontQuery {
    /// Creates a request for the given family with an unspecified language.
    pub fn new(family: impl Into<String>) -> Self {
        let target_name = family.into();
        Self {
            search_name: target_name.clone(),
            target_name,
            language: TextLanguage::Unspecified,
            symbol_encoded: false,
        }
    }

    /// Sets the language of the request.
    pub fn with_language(mut self, language: impl Into<TextLanguage>) -> Self {
        self.language = language.into();
        self
    }

    /// Marks the request as using the Microsoft symbol encoding.
    pub fn with_symbol_encoding(mut self, symbol_encoded: bool) -> Self {
        self.symbol_encoded = symbol_encoded;
        self
    }
}
