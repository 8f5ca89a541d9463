//! The loaded, read-only place collection.
//!
//! A [`PlaceRepository`] is built once from a feed and never changes. The
//! distinct town list is computed at load time for the same reason.

use ahash::AHashMap as HashMap;
use itertools::Itertools;
use placeguide_data::{DataError, FeedMetadata, Place, load_feed, validate_places};
use tracing::{info, instrument, warn};

use crate::{
    config::DirectoryConfig,
    error::Result,
    search::{PlaceQuery, distinct_towns, filter},
};

/// An immutable, ordered set of places with a town facet and an id index.
///
/// # Examples
///
/// ```rust
/// use placeguide::{DirectoryConfig, PlaceQuery, PlaceRepository};
///
/// let repo = PlaceRepository::load(&DirectoryConfig::default())?;
/// let query = PlaceQuery::builder().category("wine").build();
/// for place in repo.filter(&query) {
///     println!("{}", place.name);
/// }
/// # Ok::<(), placeguide::error::PlaceGuideError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlaceRepository {
    places: Vec<Place>,
    towns: Vec<String>,
    index: HashMap<String, usize>,
    metadata: Option<FeedMetadata>,
}

impl PlaceRepository {
    /// Build a repository from places already in memory.
    ///
    /// Fails on a repeated id. Categories are not checked; use
    /// [`PlaceRepository::with_config`] for that.
    pub fn new(places: Vec<Place>) -> Result<Self> {
        if let Some(id) = places.iter().map(Place::id).duplicates().next() {
            return Err(DataError::DuplicatePlaceId(id.to_string()).into());
        }
        Ok(Self::from_validated(places, None))
    }

    /// Build a repository, checking categories against `config`.
    pub fn with_config(places: Vec<Place>, config: &DirectoryConfig) -> Result<Self> {
        validate_places(&places, &config.categories, config.strict_categories)?;
        Ok(Self::from_validated(places, None))
    }

    /// Load the feed named by `config.data_source`.
    #[instrument(name = "Load PlaceRepository", skip_all, fields(source = %config.data_source.label()), level = "info")]
    pub fn load(config: &DirectoryConfig) -> Result<Self> {
        let t_load = std::time::Instant::now();
        let feed = load_feed(&config.data_source)?;
        validate_places(&feed.places, &config.categories, config.strict_categories)?;

        let repo = Self::from_validated(feed.places, Some(feed.metadata));
        info!(
            places = repo.len(),
            towns = repo.towns.len(),
            elapsed = ?t_load.elapsed(),
            "PlaceRepository ready"
        );
        Ok(repo)
    }

    /// Load the feed, or fall back to an empty repository on any failure.
    ///
    /// The directory then shows its empty state rather than an error.
    pub fn load_or_empty(config: &DirectoryConfig) -> Self {
        Self::load(config).unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load place feed; continuing with no places");
            Self::empty()
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_validated(places: Vec<Place>, metadata: Option<FeedMetadata>) -> Self {
        let towns = distinct_towns(&places);
        let index = places
            .iter()
            .enumerate()
            .map(|(i, place)| (place.id.clone(), i))
            .collect();
        Self {
            places,
            towns,
            index,
            metadata,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Place] {
        &self.places
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.index.get(id).map(|&i| &self.places[i])
    }

    /// Every town in the feed, deduplicated and sorted ascending.
    #[must_use]
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// Where and when the feed was read; `None` for in-memory repositories.
    #[must_use]
    pub const fn metadata(&self) -> Option<&FeedMetadata> {
        self.metadata.as_ref()
    }

    /// Places matching `query`, in feed order.
    #[must_use]
    pub fn filter(&self, query: &PlaceQuery) -> Vec<&Place> {
        filter(&self.places, query)
    }
}

impl<'a> IntoIterator for &'a PlaceRepository {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
