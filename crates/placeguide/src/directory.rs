//! Per-session view-model for the directory screen.
//!
//! [`DirectoryState`] owns the query inputs and view state that the
//! presentation layer binds to. Results are recomputed from the repository on
//! every call; nothing here caches a filtered list.

use placeguide_data::{Category, Coordinates, Place};
use tracing::debug;

use crate::{
    config::MapConfig,
    location::{GeolocationProvider, LocationRequest, LocationStatus, PositionOptions},
    map::MapView,
    repository::PlaceRepository,
    search::{PlaceMatch, PlaceQuery, TownSelection, annotate_distances},
};

/// Shown in place of the list when nothing matches.
pub const NO_MATCHES_MESSAGE: &str = "No places match your search criteria.";

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

/// The filtered list for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryResults<'a> {
    pub matches: Vec<PlaceMatch<'a>>,
}

impl<'a> DirectoryResults<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Result count line, e.g. `"1 place found"` or `"12 places found"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.len() {
            1 => "1 place found".to_string(),
            n => format!("{n} places found"),
        }
    }

    pub fn places(&self) -> impl Iterator<Item = &'a Place> + '_ {
        self.matches.iter().map(|m| m.place)
    }
}

/// Query and view state for one directory session.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    view: ViewMode,
    query: PlaceQuery,
    selected_place: Option<String>,
    location: LocationRequest,
}

impl DirectoryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn query(&self) -> &PlaceQuery {
        &self.query
    }

    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    /// Select `category`, or deselect it if already selected. Selection order is kept.
    pub fn toggle_category(&mut self, category: impl Into<Category>) {
        let category = category.into();
        if let Some(pos) = self.query.categories.iter().position(|c| *c == category) {
            self.query.categories.remove(pos);
        } else {
            self.query.categories.push(category);
        }
    }

    #[must_use]
    pub fn is_category_selected(&self, category: &Category) -> bool {
        self.query.categories.contains(category)
    }

    pub fn clear_categories(&mut self) {
        self.query.categories.clear();
    }

    pub fn select_town(&mut self, town: TownSelection) {
        self.query.town = town;
    }

    /// Reset search, categories and town. Selection and view are kept.
    pub fn clear_filters(&mut self) {
        self.query = PlaceQuery::default();
    }

    /// Number shown on the category filter badge.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.query.categories.len()
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_unfiltered()
    }

    #[must_use]
    pub fn selected_place_id(&self) -> Option<&str> {
        self.selected_place.as_deref()
    }

    /// The selected place, if it still exists in `repo`.
    #[must_use]
    pub fn selected_place<'a>(&self, repo: &'a PlaceRepository) -> Option<&'a Place> {
        self.selected_place.as_deref().and_then(|id| repo.get(id))
    }

    /// Select `place_id` and switch to the map.
    pub fn view_on_map(&mut self, place_id: impl Into<String>) {
        self.selected_place = Some(place_id.into());
        self.view = ViewMode::Map;
    }

    /// Handle a marker click: select the place, or clear the selection when
    /// the selected marker is clicked again.
    pub fn on_marker_click(&mut self, place_id: &str) {
        if self.selected_place.as_deref() == Some(place_id) {
            debug!(place_id, "Marker deselected");
            self.selected_place = None;
        } else {
            debug!(place_id, "Marker selected");
            self.selected_place = Some(place_id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_place = None;
    }

    /// Ask for the user's position. Only the first call reaches the provider.
    pub fn request_location<P>(&self, provider: &P, options: &PositionOptions) -> LocationStatus
    where
        P: GeolocationProvider + ?Sized,
    {
        self.location.request(provider, options)
    }

    #[must_use]
    pub fn location_status(&self) -> LocationStatus {
        self.location.status()
    }

    #[must_use]
    pub fn user_location(&self) -> Option<Coordinates> {
        self.location.coordinates()
    }

    /// The filtered list, with distances when the user's position is known.
    #[must_use]
    pub fn results<'a>(&self, repo: &'a PlaceRepository) -> DirectoryResults<'a> {
        let filtered = repo.filter(&self.query);
        DirectoryResults {
            matches: annotate_distances(&filtered, self.user_location()),
        }
    }

    /// The map payload for the current results, or `None` when none can be drawn.
    #[must_use]
    pub fn map_view(&self, repo: &PlaceRepository, config: &MapConfig) -> Option<MapView> {
        MapView::from_places(
            repo.filter(&self.query),
            self.selected_place_id(),
            self.user_location(),
            config,
        )
    }
}
