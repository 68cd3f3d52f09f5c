// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matching family names against pattern lists.
//!
//! A pattern list is a `;` separated sequence of tokens. Each token may start
//! with a sigil selecting the kind of comparison:
//!
//! | Sigil | Matches when the name...       |
//! |-------|--------------------------------|
//! | `^`   | starts with the remainder      |
//! | `$`   | ends with the remainder        |
//! | `*`   | contains the remainder         |
//! | none  | is exactly equal to the token  |
//!
//! Comparisons are case sensitive.

use alloc::string::String;

/// Separator between tokens of pattern and family lists.
pub const SEPARATOR: char = ';';

/// Returns true if `name` is matched by any token in `patterns`.
///
/// An empty pattern list matches nothing.
///
/// ```
/// use fontsubst::pattern::matches;
///
/// assert!(matches("*Ming;*Song", "SimSong"));
/// assert!(matches("^Noto", "NotoSans"));
/// assert!(!matches("^Noto", "XNoto"));
/// assert!(matches("Kai", "Kai"));
/// assert!(!matches("Kai", "BigKai"));
/// ```
pub fn matches(patterns: &str, name: &str) -> bool {
    patterns
        .split(SEPARATOR)
        .filter(|token| !token.is_empty())
        .any(|token| token_matches(token, name))
}

fn token_matches(token: &str, name: &str) -> bool {
    if let Some(prefix) = token.strip_prefix('^') {
        name.starts_with(prefix)
    } else if let Some(suffix) = token.strip_prefix('$') {
        // The expected offset is computed from the full token length,
        // sigil included, and compared against the first occurrence.
        match (name.find(suffix), (name.len() + 1).checked_sub(token.len())) {
            (Some(found), Some(expected)) => found == expected,
            _ => false,
        }
    } else if let Some(needle) = token.strip_prefix('*') {
        name.contains(needle)
    } else {
        name == token
    }
}

/// Returns an iterator over the family names in a `;` separated list.
///
/// Surrounding whitespace is trimmed and empty entries are skipped.
pub fn family_names(list: &str) -> impl Iterator<Item = &str> + Clone {
    list.split(SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Appends `names` to a `;` separated family list.
pub(crate) fn append_list(list: &mut String, names: &str) {
    if names.is_empty() {
        return;
    }
    if !list.is_empty() {
        list.push(SEPARATOR);
    }
    list.push_str(names);
}

#[cfg(test)]
mod tests {
    use super::{append_list, family_names, matches};

    #[test]
    fn contains_tokens() {
        assert!(matches("*Ming;*Song", "SimSong"));
        assert!(matches("*Ming;*Song", "PMingLiU"));
        assert!(!matches("*Ming;*Song", "Arial"));
    }

    #[test]
    fn prefix_tokens() {
        assert!(matches("^Noto", "NotoSans"));
        assert!(matches("^Noto", "Noto"));
        assert!(!matches("^Noto", "XNoto"));
    }

    #[test]
    fn exact_tokens() {
        assert!(matches("Kai", "Kai"));
        assert!(!matches("Kai", "BigKai"));
        assert!(matches("Sans;sans;Sans-Serif", "sans"));
        assert!(!matches("Sans;sans;Sans-Serif", "DejaVu Sans"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("*Hei", "SimHEI"));
        assert!(!matches("serif", "Serif Pro"));
    }

    #[test]
    fn empty_lists_match_nothing() {
        assert!(!matches("", "Arial"));
        assert!(!matches("", ""));
        assert!(!matches(";;", ""));
    }

    #[test]
    fn suffix_tokens_use_first_occurrence() {
        assert!(matches("$Gothic", "MS Gothic"));
        assert!(matches("$Gothic", "Gothic"));
        assert!(!matches("$Gothic", "Gothic UI"));
        // The remainder occurs at the end, but its first occurrence is
        // earlier, so the offset check fails.
        assert!(!matches("$Song", "SongSong"));
        assert!(!matches("$Song", "Song Ti Song"));
        // Tokens longer than the name never match and never underflow.
        assert!(!matches("$LongerThanName", "Name"));
    }

    #[test]
    fn bare_sigils() {
        // A lone prefix or contains sigil matches any name.
        assert!(matches("^", "Arial"));
        assert!(matches("*", "Arial"));
        // A lone suffix sigil only matches the empty name.
        assert!(!matches("$", "Arial"));
        assert!(matches("$", ""));
    }

    #[test]
    fn family_list_tokens() {
        let names: Vec<_> = family_names("新細明體; PMingLiU;;Noto Serif CJK TC;").collect();
        assert_eq!(names, ["新細明體", "PMingLiU", "Noto Serif CJK TC"]);
        assert_eq!(family_names("").count(), 0);
    }

    #[test]
    fn appending_lists() {
        let mut list = String::new();
        append_list(&mut list, "");
        assert_eq!(list, "");
        append_list(&mut list, "A;B");
        append_list(&mut list, "C");
        assert_eq!(list, "A;B;C");
    }
}
