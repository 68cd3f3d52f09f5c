// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod recording;

pub(crate) use recording::{Call, RecordingCollection};

use crate::{FontSubstitution, NoDefaultFonts, SubstitutionOptions};

/// Engine without builtin rules or final fallback fonts.
pub(crate) fn bare_engine() -> FontSubstitution {
    let options = SubstitutionOptions {
        builtin_features: false,
        builtin_compatible_fonts: false,
        final_cjk_fallback_fonts: String::new(),
        ..Default::default()
    };
    FontSubstitution::new(options, NoDefaultFonts)
}
