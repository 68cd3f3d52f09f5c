// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device specific substitution hooks.

use crate::FontQuery;

/// Platform or device specific substitution consulted after the builtin
/// heuristics fail.
///
/// Implementations rewrite [`FontQuery::search_name`] and return true if
/// they did. The engine only keeps the rewrite if it names an installed
/// family.
///
/// Closures taking a `&mut FontQuery` implement this trait.
pub trait PreMatchHook {
    /// Attempts to rewrite the search name of the query.
    fn substitute(&self, query: &mut FontQuery) -> bool;
}

impl<F> PreMatchHook for F
where
    F: Fn(&mut FontQuery) -> bool,
{
    fn substitute(&self, query: &mut FontQuery) -> bool {
        self(query)
    }
}
