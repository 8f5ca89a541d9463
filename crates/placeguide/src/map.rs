//! Payload for the external map renderer.
//!
//! Only map-eligible places (both coordinates present) become markers. The
//! renderer reports clicks back as marker ids.

use placeguide_data::{Coordinates, Place};
use tracing::debug;

use crate::{
    config::MapConfig,
    geo::{MapBounds, PinPosition},
};

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
}

impl MapMarker {
    /// Marker for `place`, or `None` when it is not map-eligible.
    #[must_use]
    pub fn from_place(place: &Place) -> Option<Self> {
        place.coordinates().map(|c| Self {
            id: place.id.clone(),
            lat: c.lat,
            lng: c.lng,
            title: place.name.clone(),
        })
    }

    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Everything the renderer needs to draw one frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    /// The selected place's marker, when it is among `markers`
    pub highlighted: Option<MapMarker>,
    pub user_location: Option<Coordinates>,
    pub bounds: MapBounds,
}

impl MapView {
    /// Build the view for `places`, or `None` when none of them can be drawn.
    ///
    /// The center is the mean of the marker coordinates.
    pub fn from_places<'a, I>(
        places: I,
        selected: Option<&str>,
        user_location: Option<Coordinates>,
        config: &MapConfig,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Place>,
    {
        let markers: Vec<MapMarker> = places.into_iter().filter_map(MapMarker::from_place).collect();
        let bounds = MapBounds::from_coordinates(markers.iter().map(MapMarker::coordinates))?;

        let count = markers.len() as f64;
        let (lat_sum, lng_sum) = markers
            .iter()
            .fold((0.0, 0.0), |(lat, lng), m| (lat + m.lat, lng + m.lng));
        let center = Coordinates::new(lat_sum / count, lng_sum / count);

        let highlighted = selected.and_then(|id| markers.iter().find(|m| m.id == id).cloned());
        debug!(
            markers = markers.len(),
            highlighted = highlighted.is_some(),
            "Map view built"
        );

        Some(Self {
            center,
            zoom: config.default_zoom,
            markers,
            highlighted,
            user_location,
            bounds,
        })
    }

    #[must_use]
    pub fn marker(&self, id: &str) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.as_ref().is_some_and(|m| m.id == id)
    }

    /// Viewport placement of every marker, in marker order.
    pub fn pin_positions(&self, padding_pct: f64) -> impl Iterator<Item = (&MapMarker, PinPosition)> {
        self.markers
            .iter()
            .map(move |m| (m, self.bounds.pin_position(m.coordinates(), padding_pct)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places() -> Vec<Place> {
        vec![
            Place::new("north", "North").with_coordinates(35.0, -120.0),
            Place::new("south", "South").with_coordinates(34.0, -119.0),
            Place::new("nowhere", "Nowhere"),
            {
                let mut half = Place::new("half", "Half");
                half.lat = Some(34.5);
                half
            },
        ]
    }

    #[test]
    fn test_only_eligible_places_become_markers() {
        let places = places();
        let view = MapView::from_places(&places, None, None, &MapConfig::default()).unwrap();
        let ids: Vec<_> = view.markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["north", "south"]);
        assert_eq!(view.markers[0].title, "North");
    }

    #[test]
    fn test_center_is_mean_of_markers() {
        let places = places();
        let view = MapView::from_places(&places, None, None, &MapConfig::default()).unwrap();
        assert!((view.center.lat - 34.5).abs() < 1e-9);
        assert!((view.center.lng - -119.5).abs() < 1e-9);
        assert_eq!(view.zoom, 6);
    }

    #[test]
    fn test_no_eligible_places_is_none() {
        let places = vec![Place::new("nowhere", "Nowhere")];
        assert!(MapView::from_places(&places, None, None, &MapConfig::default()).is_none());
        assert!(MapView::from_places(std::iter::empty(), None, None, &MapConfig::default()).is_none());
    }

    #[test]
    fn test_highlighted_marker() {
        let places = places();
        let config = MapConfig::default();

        let view = MapView::from_places(&places, Some("south"), None, &config).unwrap();
        assert!(view.is_highlighted("south"));
        assert!(!view.is_highlighted("north"));

        // A selected place without coordinates has nothing to highlight
        let view = MapView::from_places(&places, Some("nowhere"), None, &config).unwrap();
        assert!(view.highlighted.is_none());
    }

    #[test]
    fn test_user_location_is_carried() {
        let places = places();
        let user = Coordinates::new(34.6, -120.1);
        let view = MapView::from_places(&places, None, Some(user), &MapConfig::default()).unwrap();
        assert_eq!(view.user_location, Some(user));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_for_renderer() {
        let places = places();
        let view = MapView::from_places(&places, Some("north"), None, &MapConfig::default()).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["markers"][0]["id"], "north");
        assert_eq!(json["highlighted"]["title"], "North");
        assert_eq!(json["zoom"], 6);
        assert!(json["user_location"].is_null());
    }

    #[test]
    fn test_pin_positions() {
        let places = places();
        let view = MapView::from_places(&places, None, None, &MapConfig::default()).unwrap();
        let pins: Vec<_> = view.pin_positions(10.0).collect();
        assert_eq!(pins.len(), 2);

        let (north, north_pin) = pins[0];
        assert_eq!(north.id, "north");
        assert!((north_pin.left_pct - 10.0).abs() < 1e-9);
        assert!((north_pin.top_pct - 10.0).abs() < 1e-9);

        let (_, south_pin) = pins[1];
        assert!((south_pin.left_pct - 90.0).abs() < 1e-9);
        assert!((south_pin.top_pct - 90.0).abs() < 1e-9);
    }
}
