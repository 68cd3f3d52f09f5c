// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces to the collection of installed fonts.
//!
//! The substitution engine never enumerates or loads fonts itself. Hosts
//! describe the fonts they have through [`FontCollection`], [`FontFamily`]
//! and [`FontFace`], and the engine queries them by name or scans every
//! face for the last fallback stage.

mod memory;

pub use memory::{MemoryCharmap, MemoryCollection, MemoryFace};

use crate::{pattern::family_names, FontQuery};
use alloc::string::String;
use core::ops::BitOr;

/// Collection of installed font families.
///
/// The engine only borrows a collection for the duration of a call, so the
/// set of installed fonts may change between calls.
pub trait FontCollection {
    /// Returns the installed family with the given name.
    fn find_family(&self, name: &str) -> Option<&dyn FontFamily>;

    /// Returns the first installed family named in a `;` separated list.
    fn find_family_by_any_of(&self, names: &str) -> Option<&dyn FontFamily> {
        family_names(names).find_map(|name| self.find_family(name))
    }

    /// Invokes the given callback with every installed face.
    ///
    /// Return [`QueryStatus::Stop`] to end the scan or
    /// [`QueryStatus::Continue`] to move on to the next face.
    fn scan_faces(&self, f: &mut dyn FnMut(&dyn FontFace) -> QueryStatus);
}

/// Named set of installed faces.
pub trait FontFamily {
    /// Returns the name of the family as installed.
    fn name(&self) -> &str;

    /// Returns the face of this family that best matches the request.
    fn best_face(&self, query: &FontQuery) -> Option<&dyn FontFace>;
}

/// Single installed font face.
pub trait FontFace {
    /// Returns the name of the family this face belongs to.
    fn family_name(&self) -> &str;

    /// Returns the character map of the face, if it has a usable one.
    fn charmap(&self) -> Option<&dyn Charmap>;

    /// Returns the code pages the face declares support for.
    fn code_pages(&self) -> CodePages {
        CodePages::NONE
    }

    /// Returns true if the face uses the Microsoft symbol encoding.
    fn is_symbol_encoded(&self) -> bool {
        false
    }
}

/// Character coverage of a face.
pub trait Charmap {
    /// Returns true if the face maps the given character to a glyph.
    fn has_char(&self, ch: char) -> bool;

    /// Returns true if this is a generic placeholder map rather than real
    /// coverage data for the face.
    fn is_default(&self) -> bool {
        false
    }
}

/// Determines whether a face scan will continue.
///
/// See [`FontCollection::scan_faces`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QueryStatus {
    /// Scan should continue with the next face.
    Continue,
    /// Scan should stop.
    Stop,
}

/// Set of code pages supported by a face.
///
/// The bit layout follows the `ulCodePageRange1` and `ulCodePageRange2`
/// fields of the OpenType `OS/2` table, with range 2 in the upper half.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct CodePages(u64);

impl CodePages {
    /// No code pages.
    pub const NONE: Self = Self(0);
    /// Code page 932, Japanese Shift JIS.
    pub const CP932: Self = Self(1 << 17);
    /// Code page 936, simplified Chinese.
    pub const CP936: Self = Self(1 << 18);
    /// Code page 949, Korean Wansung.
    pub const CP949: Self = Self(1 << 19);
    /// Code page 950, traditional Chinese.
    pub const CP950: Self = Self(1 << 20);
    /// Code page 1361, Korean Johab.
    pub const CP1361: Self = Self(1 << 21);

    /// Creates a set from the two `OS/2` code page range fields.
    pub const fn from_os2_ranges(range1: u32, range2: u32) -> Self {
        Self(range1 as u64 | (range2 as u64) << 32)
    }

    /// Returns true if every code page in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the CJK writing systems covered by these code pages.
    pub fn cjk(self) -> CjkSupport {
        CjkSupport {
            japanese: self.contains(Self::CP932),
            simplified_chinese: self.contains(Self::CP936),
            // Johab is folded into Korean.
            korean: self.contains(Self::CP949) || self.contains(Self::CP1361),
            traditional_chinese: self.contains(Self::CP950),
        }
    }
}

impl BitOr for CodePages {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// CJK writing systems supported by a face.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct CjkSupport {
    /// Japanese.
    pub japanese: bool,
    /// Simplified Chinese.
    pub simplified_chinese: bool,
    /// Korean.
    pub korean: bool,
    /// Traditional Chinese.
    pub traditional_chinese: bool,
}

impl CjkSupport {
    /// Returns true if any CJK writing system is supported.
    pub fn any(self) -> bool {
        self.japanese || self.simplified_chinese || self.korean || self.traditional_chinese
    }
}

/// Returns true for the bundled symbol font, which never takes part in
/// substitution.
pub fn is_open_symbol(name: &str) -> bool {
    let mut key = String::with_capacity(name.len());
    key.extend(
        name.chars()
            .filter(|ch| ch.is_alphanumeric())
            .flat_map(char::to_lowercase),
    );
    key == "opensymbol" || key == "starsymbol"
}

#[cfg(test)]
mod tests {
    use super::{is_open_symbol, CodePages};

    #[test]
    fn cjk_code_pages() {
        assert!(!CodePages::NONE.cjk().any());
        assert!(CodePages::CP950.cjk().traditional_chinese);
        let johab = CodePages::CP1361.cjk();
        assert!(johab.korean && johab.any());
        let both = CodePages::CP932 | CodePages::CP936;
        assert!(both.cjk().japanese && both.cjk().simplified_chinese);
        assert!(!both.cjk().korean);
    }

    #[test]
    fn os2_ranges() {
        // Latin 1 and traditional Chinese.
        let pages = CodePages::from_os2_ranges(1 | 1 << 20, 0);
        assert!(pages.contains(CodePages::CP950));
        assert!(!pages.contains(CodePages::CP936));
        assert!(!CodePages::from_os2_ranges(0, u32::MAX).cjk().any());
    }

    #[test]
    fn open_symbol_names() {
        assert!(is_open_symbol("OpenSymbol"));
        assert!(is_open_symbol("opensymbol"));
        assert!(is_open_symbol("Open Symbol"));
        assert!(is_open_symbol("StarSymbol"));
        assert!(!is_open_symbol("Symbol"));
        assert!(!is_open_symbol("OpenSymbolic"));
    }
}
