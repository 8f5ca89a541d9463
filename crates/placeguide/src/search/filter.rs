use ahash::AHashSet as HashSet;
use itertools::Itertools;
use placeguide_data::{Category, Coordinates, Place};
use tracing::{debug, instrument};

use super::PlaceQuery;
use crate::geo::distance_to;

/// A query with its needle lower-cased and its categories hashed, built once per pass.
struct CompiledQuery<'q> {
    needle: Option<String>,
    categories: HashSet<&'q Category>,
    town: Option<&'q str>,
}

impl<'q> CompiledQuery<'q> {
    fn new(query: &'q PlaceQuery) -> Self {
        Self {
            needle: query.search_text().map(str::to_lowercase),
            categories: query.categories.iter().collect(),
            town: query.town.as_town(),
        }
    }

    fn matches(&self, place: &Place) -> bool {
        self.matches_text(place) && self.matches_category(place) && self.matches_town(place)
    }

    fn matches_text(&self, place: &Place) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(&place.name)
            || place.towns.iter().any(|town| contains(town.as_str()))
            || place.notes.as_deref().is_some_and(contains)
            || place.tags().iter().any(|tag| contains(tag.as_str()))
    }

    fn matches_category(&self, place: &Place) -> bool {
        self.categories.is_empty() || place.categories.iter().any(|c| self.categories.contains(c))
    }

    fn matches_town(&self, place: &Place) -> bool {
        self.town
            .is_none_or(|town| place.towns.iter().any(|t| t == town))
    }
}

impl PlaceQuery {
    /// Whether `place` passes every active predicate of this query.
    #[must_use]
    pub fn matches(&self, place: &Place) -> bool {
        CompiledQuery::new(self).matches(place)
    }
}

/// Places passing every active predicate, in their original order.
///
/// Text search is a case-insensitive substring match over name, towns, notes
/// and tags. Categories match when the place has at least one selected
/// category. A town matches by exact, case-sensitive equality.
#[instrument(name = "Filter places", skip_all, level = "debug")]
pub fn filter<'a>(places: &'a [Place], query: &PlaceQuery) -> Vec<&'a Place> {
    let compiled = CompiledQuery::new(query);
    let results: Vec<&Place> = places.iter().filter(|p| compiled.matches(p)).collect();
    debug!(
        total = places.len(),
        matched = results.len(),
        "Filter pass complete"
    );
    results
}

/// Every town named by any place, deduplicated and sorted ascending.
#[must_use]
pub fn distinct_towns(places: &[Place]) -> Vec<String> {
    places
        .iter()
        .flat_map(|p| p.towns.iter())
        .sorted_unstable()
        .dedup()
        .cloned()
        .collect()
}

/// A matching place with its distance from the user, when both positions are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceMatch<'a> {
    pub place: &'a Place,
    pub distance_miles: Option<f64>,
}

/// Pair each result with its distance from `user`. Order is unchanged.
#[must_use]
pub fn annotate_distances<'a>(
    results: &[&'a Place],
    user: Option<Coordinates>,
) -> Vec<PlaceMatch<'a>> {
    results
        .iter()
        .map(|&place| PlaceMatch {
            place,
            distance_miles: user.and_then(|u| distance_to(u, place)),
        })
        .collect()
}
