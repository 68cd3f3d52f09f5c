// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while loading substitution configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Error loading or applying a [`SubstitutionConfig`](crate::SubstitutionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read font substitution config '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or does not have the expected
    /// shape.
    #[error("invalid font substitution config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A language key is not a valid BCP 47 tag.
    #[error("invalid language tag '{tag}' in font substitution config")]
    InvalidLanguage {
        /// The offending tag.
        tag: String,
    },
}
