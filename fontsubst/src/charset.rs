// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Working set of characters that still need a font.

use crate::collection::Charmap;
use alloc::{string::String, vec::Vec};
use core::fmt;

/// Ordered set of characters the current face cannot render.
///
/// Glyph fallback removes characters from this set as it finds faces that
/// cover them.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct MissingChars {
    chars: Vec<char>,
}

impl MissingChars {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of missing characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if no characters are missing.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns an iterator over the missing characters in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + Clone + '_ {
        self.chars.iter().copied()
    }

    /// Returns true if `ch` is missing.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Removes every character.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Removes the characters for which `covered` returns true.
    ///
    /// Returns the number of removed characters.
    pub fn remove_where(&mut self, mut covered: impl FnMut(char) -> bool) -> usize {
        let before = self.chars.len();
        self.chars.retain(|&ch| !covered(ch));
        before - self.chars.len()
    }

    /// Removes the characters covered by `charmap` and returns true if there
    /// were any.
    ///
    /// Faces without a character map, or with a placeholder map, are treated
    /// as covering nothing and leave the set untouched.
    pub fn take_covered(&mut self, charmap: Option<&dyn Charmap>) -> bool {
        let Some(charmap) = charmap else {
            return false;
        };
        if charmap.is_default() {
            return false;
        }
        self.remove_where(|ch| charmap.has_char(ch)) > 0
    }
}

impl From<&str> for MissingChars {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl FromIterator<char> for MissingChars {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for MissingChars {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        self.chars.extend(iter);
    }
}

impl fmt::Display for MissingChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars.iter().collect();
        f.write_str(&s)
    }
}

impl fmt::Debug for MissingChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MissingChars[")?;
        for (i, ch) in self.chars.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "U+{:04X}", *ch as u32)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::MissingChars;
    use crate::collection::MemoryCharmap;
    use crate::collection::{Charmap, FontFace, MemoryFace};

    #[test]
    fn covered_chars_are_removed_in_order() {
        let face = MemoryFace::new("CJK").with_range('\u{4E00}'..='\u{9FFF}');
        let mut missing = MissingChars::from("a中b文c");
        assert!(missing.take_covered(face.charmap()));
        assert_eq!(missing.to_string(), "abc");
        assert!(!missing.take_covered(face.charmap()));
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn faces_without_real_coverage_match_nothing() {
        let mut missing = MissingChars::from("中");
        let placeholder = MemoryFace::new("Placeholder").with_default_charmap();
        assert!(!missing.take_covered(placeholder.charmap()));
        let none = MemoryFace::new("Broken").without_charmap();
        assert!(!missing.take_covered(none.charmap()));
        assert_eq!(missing.to_string(), "中");
    }

    #[test]
    fn empty_charmap_covers_nothing() {
        let charmap = MemoryCharmap::default();
        assert!(!charmap.has_char('a'));
        let mut missing = MissingChars::from("a");
        assert!(!missing.take_covered(Some(&charmap)));
    }

    #[test]
    fn debug_lists_code_points() {
        let missing = MissingChars::from("\u{F041}中");
        assert_eq!(format!("{missing:?}"), "MissingChars[U+F041, U+4E2D]");
    }
}
