// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts for end user defined characters in the private use area.

use crate::collection::{FontCollection, FontFamily};
use crate::feature::FeatureTable;
use alloc::string::String;
use hashbrown::HashMap;

/// Master family name that registers the system wide EUDC font.
///
/// Compared ignoring ASCII case.
pub const SYSTEM_DEFAULT_EUDC_FONT: &str = "SystemDefaultEUDCFont";

/// Relations between master families and their EUDC families.
#[derive(Clone, Default, Debug)]
pub struct EudcRelations {
    relations: HashMap<String, String>,
    system_default: String,
}

impl EudcRelations {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `eudc_family` as the EUDC font of `master`.
    ///
    /// Returns false if `master` is the system default sentinel, in which
    /// case the system wide font was replaced instead.
    pub fn set(&mut self, master: &str, eudc_family: &str) -> bool {
        if master.eq_ignore_ascii_case(SYSTEM_DEFAULT_EUDC_FONT) {
            self.system_default = eudc_family.into();
            false
        } else {
            self.relations.insert(master.into(), eudc_family.into());
            true
        }
    }

    /// Returns the EUDC family explicitly registered for `master`.
    pub fn get(&self, master: &str) -> Option<&str> {
        self.relations.get(master).map(String::as_str)
    }

    /// Returns the system wide EUDC family, empty if none was registered.
    pub fn system_default(&self) -> &str {
        &self.system_default
    }

    /// Resolves the installed EUDC family for `master`.
    ///
    /// Uses the explicit relation of `master` if one is registered, and
    /// otherwise the private use area font of the first feature matching
    /// `master`. If that family is not installed, or `master` is empty, the
    /// system wide font is used when installed.
    pub fn resolve<'a>(
        &self,
        features: &FeatureTable,
        fonts: &'a dyn FontCollection,
        master: &str,
    ) -> Option<&'a dyn FontFamily> {
        if !master.is_empty() {
            let family = match self.get(master) {
                Some(name) => fonts.find_family(name),
                None => features
                    .find(master)
                    .map(|feature| feature.private_use_area_font())
                    .filter(|name| !name.is_empty())
                    .and_then(|name| fonts.find_family(name)),
            };
            if family.is_some() {
                return family;
            }
        }
        if self.system_default.is_empty() {
            return None;
        }
        fonts.find_family(&self.system_default)
    }
}

#[cfg(test)]
mod tests {
    use super::EudcRelations;
    use crate::collection::{MemoryCollection, MemoryFace};
    use crate::feature::{FeatureTable, FontFeature};

    fn installed(names: &[&str]) -> MemoryCollection {
        let mut fonts = MemoryCollection::new();
        for name in names {
            fonts.add_face(MemoryFace::new(*name));
        }
        fonts
    }

    fn ming_table() -> FeatureTable {
        let mut features = FeatureTable::new();
        features.register(FontFeature::new("*Ming").with_private_use_area_font("MingEUDC"));
        features
    }

    #[test]
    fn explicit_relation_beats_feature() {
        let features = ming_table();
        let mut eudc = EudcRelations::new();
        eudc.set("PMingLiU", "PUAFont");
        let fonts = installed(&["PUAFont", "MingEUDC"]);
        let found = eudc.resolve(&features, &fonts, "PMingLiU").unwrap();
        assert_eq!(found.name(), "PUAFont");
    }

    #[test]
    fn tiers_fall_through_to_system_default() {
        let features = ming_table();
        let mut eudc = EudcRelations::new();
        eudc.set("systemdefaulteudcfont", "EUDC");

        let feature_only = installed(&["MingEUDC", "EUDC"]);
        let found = eudc.resolve(&features, &feature_only, "PMingLiU").unwrap();
        assert_eq!(found.name(), "MingEUDC");

        let system_only = installed(&["EUDC"]);
        let found = eudc.resolve(&features, &system_only, "PMingLiU").unwrap();
        assert_eq!(found.name(), "EUDC");
        let found = eudc.resolve(&features, &system_only, "").unwrap();
        assert_eq!(found.name(), "EUDC");

        assert!(eudc.resolve(&features, &installed(&[]), "PMingLiU").is_none());
    }

    #[test]
    fn explicit_relation_hides_feature_font() {
        let features = ming_table();
        let mut eudc = EudcRelations::new();
        eudc.set("PMingLiU", "Missing EUDC");
        let fonts = installed(&["MingEUDC"]);
        assert!(eudc.resolve(&features, &fonts, "PMingLiU").is_none());
        let found = eudc.resolve(&features, &fonts, "MingLiU").unwrap();
        assert_eq!(found.name(), "MingEUDC");

        eudc.set("SystemDefaultEUDCFont", "EUDC");
        let fonts = installed(&["MingEUDC", "EUDC"]);
        let found = eudc.resolve(&features, &fonts, "PMingLiU").unwrap();
        assert_eq!(found.name(), "EUDC");
    }

    #[test]
    fn sentinel_sets_system_default() {
        let mut eudc = EudcRelations::new();
        assert!(!eudc.set("SYSTEMDEFAULTEUDCFONT", "EUDC"));
        assert_eq!(eudc.system_default(), "EUDC");
        assert_eq!(eudc.get("SYSTEMDEFAULTEUDCFONT"), None);
        assert!(eudc.set("Kai", "KaiEUDC"));
        assert_eq!(eudc.get("Kai"), Some("KaiEUDC"));
    }
}
