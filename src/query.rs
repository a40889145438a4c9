//! Derived, read-only views over the stored countries.
//!
//! The pipeline is fixed: copy, sort by name, filter on `visited`, then
//! truncate. Limiting last means the surviving records are the head of the
//! sorted and filtered sequence.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::country::Country;

/// Number of records the listing keeps when limiting is enabled.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Order by name, ascending.
    pub sort: bool,
    /// Keep only records whose `visited` flag equals this value.
    pub visited: Option<bool>,
    /// Keep at most this many records.
    pub limit: Option<usize>,
}

impl QueryOptions {
    /// Interpret the listing's query-string flags.
    ///
    /// `sort` is on only for the literal `"true"`. `visited` filters only
    /// for `"true"` or `"false"`; anything else means no filter. Limiting
    /// is on unless `limit` is the literal `"false"`.
    pub fn from_flags(
        sort: Option<&str>,
        visited: Option<&str>,
        limit: Option<&str>,
        max_results: usize,
    ) -> Self {
        Self {
            sort: sort == Some("true"),
            visited: match visited {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
            limit: match limit {
                Some("false") => None,
                _ => Some(max_results),
            },
        }
    }
}

/// Build the derived view of `records`. The input is never modified.
pub fn query(records: &[Country], options: &QueryOptions) -> Vec<Country> {
    let mut view = records.to_vec();

    if options.sort {
        view.sort_by(|a, b| compare_names(&a.name, &b.name));
    }

    if let Some(visited) = options.visited {
        view.retain(|country| country.visited == visited);
    }

    if let Some(limit) = options.limit {
        view.truncate(limit);
    }

    view
}

/// Locale-style name comparison: accents and case are ignored first, and
/// only break ties between otherwise equal names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
