//! Pure catalog filtering.
//!
//! Given the full country list and the current criteria, produces the
//! matching subset. Synchronous, side-effect free, order preserving.

use std::collections::BTreeSet;

use crate::catalog::model::CountryRecord;

/// Region options offered by filter UIs. The provider uses these exact
/// strings in the `region` field.
pub const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Current combination of search text, region, and language constraints.
///
/// An empty string means "no constraint". Criteria have no persistence;
/// hosts start from `Default` and replace fields as inputs change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the common name.
    pub query: String,
    /// Exact, case-sensitive match on the region field.
    pub region: String,
    /// Exact match against the values of the language map.
    pub language: String,
}

impl FilterCriteria {
    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.region.is_empty() && self.language.is_empty()
    }
}

/// Records satisfying all active criteria, in their original order.
///
/// A record with no language map is excluded by any active language
/// filter, since it has no language to match.
pub fn filter<'a>(
    countries: &'a [CountryRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CountryRecord> {
    let query = criteria.query.to_lowercase();
    countries
        .iter()
        .filter(|country| {
            let matches_query =
                query.is_empty() || country.name.common.to_lowercase().contains(&query);
            let matches_region = criteria.region.is_empty() || country.region == criteria.region;
            let matches_language = criteria.language.is_empty()
                || country.languages.values().any(|l| l == &criteria.language);
            matches_query && matches_region && matches_language
        })
        .collect()
}

/// Distinct language names across every record, sorted lexicographically.
///
/// Recomputed when the country list changes, not when criteria change;
/// used to populate language filter options.
pub fn available_languages(countries: &[CountryRecord]) -> Vec<String> {
    let mut languages = BTreeSet::new();
    for country in countries {
        for language in country.languages.values() {
            languages.insert(language.clone());
        }
    }
    languages.into_iter().collect()
}
