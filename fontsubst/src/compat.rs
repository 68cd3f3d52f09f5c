// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aliases between compatible font families.

use crate::collection::FontCollection;
use alloc::{collections::BTreeMap, string::String};
use smallvec::SmallVec;

type AliasList = SmallVec<[String; 2]>;

/// Maps family names to ordered lists of compatible families.
///
/// Resolution first looks for installed aliases of the requested name and
/// then for installed families that list the requested name as an alias.
#[derive(Clone, Default, Debug)]
pub struct CompatibilityMap {
    aliases: BTreeMap<String, AliasList>,
}

impl CompatibilityMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` as compatible with `family`.
    ///
    /// Aliases keep their registration order and duplicates are ignored.
    pub fn register(&mut self, family: &str, alias: &str) {
        let aliases = self.aliases.entry(family.into()).or_default();
        if !aliases.iter().any(|existing| existing == alias) {
            aliases.push(alias.into());
        }
    }

    /// Returns the aliases registered for `family`.
    pub fn aliases(&self, family: &str) -> &[String] {
        self.aliases.get(family).map(|a| a.as_slice()).unwrap_or(&[])
    }

    /// Returns the name of an installed family compatible with `name`.
    pub fn resolve(&self, fonts: &dyn FontCollection, name: &str) -> Option<String> {
        if let Some(aliases) = self.aliases.get(name) {
            for alias in aliases {
                if let Some(family) = fonts.find_family(alias) {
                    return Some(family.name().into());
                }
            }
        }
        for (family, aliases) in &self.aliases {
            if aliases.iter().any(|alias| alias == name) {
                if let Some(family) = fonts.find_family(family) {
                    return Some(family.name().into());
                }
            }
        }
        None
    }

    /// Returns the number of families with registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CompatibilityMap;
    use crate::collection::{MemoryCollection, MemoryFace};

    fn fonts(names: &[&str]) -> MemoryCollection {
        let mut fonts = MemoryCollection::new();
        for name in names {
            fonts.add_face(MemoryFace::new(*name));
        }
        fonts
    }

    #[test]
    fn forward_and_reverse_lookup() {
        let mut map = CompatibilityMap::new();
        map.register("A", "B");

        let only_a = fonts(&["A"]);
        assert_eq!(map.resolve(&only_a, "B").as_deref(), Some("A"));

        let only_b = fonts(&["B"]);
        assert_eq!(map.resolve(&only_b, "A").as_deref(), Some("B"));

        let neither = fonts(&["C"]);
        assert_eq!(map.resolve(&neither, "A"), None);
        assert_eq!(map.resolve(&neither, "B"), None);
    }

    #[test]
    fn forward_aliases_keep_order() {
        let mut map = CompatibilityMap::new();
        map.register("Noto Sans CJK TC", "思源黑體");
        map.register("Noto Sans CJK TC", "Source Han Sans TC");
        map.register("Noto Sans CJK TC", "思源黑體");
        assert_eq!(map.aliases("Noto Sans CJK TC").len(), 2);

        let both = fonts(&["Source Han Sans TC", "思源黑體"]);
        assert_eq!(
            map.resolve(&both, "Noto Sans CJK TC").as_deref(),
            Some("思源黑體")
        );
    }

    #[test]
    fn resolved_name_is_the_installed_spelling() {
        let mut map = CompatibilityMap::new();
        map.register("Noto Serif CJK JP", "Source Han Serif");
        let installed = fonts(&["source han serif"]);
        assert_eq!(
            map.resolve(&installed, "Noto Serif CJK JP").as_deref(),
            Some("source han serif")
        );
    }

    #[test]
    fn empty_names_are_tolerated() {
        let mut map = CompatibilityMap::new();
        map.register("", "");
        assert_eq!(map.resolve(&fonts(&["Arial"]), ""), None);
    }
}
