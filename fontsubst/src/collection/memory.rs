// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory font collection.

use super::{Charmap, CodePages, FontCollection, FontFace, FontFamily, QueryStatus};
use crate::FontQuery;
use alloc::{string::String, vec::Vec};
use core::ops::RangeInclusive;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// Font collection described entirely in memory.
///
/// Family names are looked up case-insensitively. Faces are kept in the
/// order they were added, which is also the order of
/// [`FontCollection::scan_faces`].
#[derive(Clone, Default, Debug)]
pub struct MemoryCollection {
    families: Vec<MemoryFamily>,
    name_map: HashMap<NameKey, usize>,
}

impl MemoryCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a face, creating its family if needed.
    pub fn add_face(&mut self, face: MemoryFace) -> &mut Self {
        let key = NameKey::from_str(&face.family);
        if let Some(&index) = self.name_map.get(&key) {
            self.families[index].faces.push(face);
        } else {
            self.name_map.insert(key, self.families.len());
            self.families.push(MemoryFamily {
                name: face.family.clone(),
                faces: SmallVec::from_elem(face, 1),
            });
        }
        self
    }

    /// Removes a family and all of its faces.
    ///
    /// Returns false if no such family was installed.
    pub fn remove_family(&mut self, name: &str) -> bool {
        let Some(index) = self.name_map.remove(&NameKey::from_str(name)) else {
            return false;
        };
        self.families.remove(index);
        for slot in self.name_map.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        true
    }

    /// Returns an iterator over the installed family names.
    pub fn family_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.families.iter().map(|family| family.name.as_str())
    }
}

impl FontCollection for MemoryCollection {
    fn find_family(&self, name: &str) -> Option<&dyn FontFamily> {
        let index = *self.name_map.get(&NameKey::from_str(name))?;
        Some(&self.families[index])
    }

    fn scan_faces(&self, f: &mut dyn FnMut(&dyn FontFace) -> QueryStatus) {
        for face in self.families.iter().flat_map(|family| &family.faces) {
            if f(face) == QueryStatus::Stop {
                return;
            }
        }
    }
}

#[derive(Clone, Debug)]
struct MemoryFamily {
    name: String,
    faces: SmallVec<[MemoryFace; 4]>,
}

impl FontFamily for MemoryFamily {
    fn name(&self) -> &str {
        &self.name
    }

    fn best_face(&self, _query: &FontQuery) -> Option<&dyn FontFace> {
        self.faces.first().map(|face| face as &dyn FontFace)
    }
}

/// Face description for a [`MemoryCollection`].
#[derive(Clone, Debug)]
pub struct MemoryFace {
    family: String,
    charmap: Option<MemoryCharmap>,
    code_pages: CodePages,
    symbol_encoded: bool,
}

impl MemoryFace {
    /// Creates a face of the given family that covers no characters.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            charmap: Some(MemoryCharmap::default()),
            code_pages: CodePages::NONE,
            symbol_encoded: false,
        }
    }

    /// Adds every character of `chars` to the coverage of the face.
    pub fn with_chars(mut self, chars: &str) -> Self {
        let charmap = self.charmap.get_or_insert_with(Default::default);
        charmap.ranges.extend(chars.chars().map(|ch| ch..=ch));
        self
    }

    /// Adds a range of characters to the coverage of the face.
    pub fn with_range(mut self, range: RangeInclusive<char>) -> Self {
        self.charmap
            .get_or_insert_with(Default::default)
            .ranges
            .push(range);
        self
    }

    /// Sets the code pages of the face.
    pub fn with_code_pages(mut self, code_pages: CodePages) -> Self {
        self.code_pages = code_pages;
        self
    }

    /// Marks the face as using the Microsoft symbol encoding.
    pub fn with_symbol_encoding(mut self) -> Self {
        self.symbol_encoded = true;
        self
    }

    /// Replaces the coverage data of the face with a placeholder map.
    pub fn with_default_charmap(mut self) -> Self {
        self.charmap = Some(MemoryCharmap {
            ranges: Vec::new(),
            is_default: true,
        });
        self
    }

    /// Removes the character map of the face.
    pub fn without_charmap(mut self) -> Self {
        self.charmap = None;
        self
    }
}

impl FontFace for MemoryFace {
    fn family_name(&self) -> &str {
        &self.family
    }

    fn charmap(&self) -> Option<&dyn Charmap> {
        self.charmap.as_ref().map(|charmap| charmap as &dyn Charmap)
    }

    fn code_pages(&self) -> CodePages {
        self.code_pages
    }

    fn is_symbol_encoded(&self) -> bool {
        self.symbol_encoded
    }
}

/// Character map made of inclusive character ranges.
#[derive(Clone, Default, Debug)]
pub struct MemoryCharmap {
    ranges: Vec<RangeInclusive<char>>,
    is_default: bool,
}

impl Charmap for MemoryCharmap {
    fn has_char(&self, ch: char) -> bool {
        self.ranges.iter().any(|range| range.contains(&ch))
    }

    fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Key for case-insensitive lookup of family names.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
struct NameKey {
    data: SmallVec<[u8; 64]>,
}

impl NameKey {
    fn from_str(s: &str) -> Self {
        let mut res = Self::default();
        let mut buf = [0_u8; 4];
        for ch in s.chars() {
            for ch in ch.to_lowercase() {
                res.data
                    .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
        res
    }
}
