//! Record types carried by the place feed.
//!
//! The JSON shape follows the feed as published: `primaryCategory` and `mapUrl`
//! are camelCase, every optional field may be absent, and unknown fields are
//! ignored so both observed feed variants deserialize into the same [`Place`].

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Coordinates {
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// A category tag such as `food` or `wine`.
///
/// Which tags are legal is decided by a [`crate::CategorySet`], not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One directory entry.
///
/// Equality and hashing use `id` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique slug, e.g. `matteis-tavern-los-olivos`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub towns: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Icon hint; never consulted when filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Place {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Both `lat` and `lng`, when both are present and finite.
    ///
    /// A place carrying only one of the two is treated as coordinate-less.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coordinates::new(lat, lng))
            }
            _ => None,
        }
    }

    /// Whether the place can be drawn as a map pin.
    #[must_use]
    pub fn is_map_eligible(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Whether a distance to the user can be computed for this place.
    #[must_use]
    pub fn is_distance_eligible(&self) -> bool {
        self.coordinates().is_some()
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Outbound map link: the feed's `mapUrl`, else one built from the coordinates.
    #[must_use]
    pub fn map_link(&self) -> Option<String> {
        self.map_url.clone().or_else(|| {
            self.coordinates()
                .map(|c| format!("https://www.google.com/maps/@{},{},25z", c.lat, c.lng))
        })
    }

    // Builder-style setters, mostly used by fixtures.

    pub fn with_towns<I, S>(mut self, towns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.towns = towns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_primary_category(mut self, category: impl Into<Category>) -> Self {
        self.primary_category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "matteis-tavern-los-olivos",
            "name": "Mattei's Tavern",
            "towns": ["Los Olivos"],
            "categories": ["food", "bar"],
            "primaryCategory": "food",
            "tags": ["historic", "cocktails"],
            "notes": "Stagecoach stop turned restaurant",
            "mapUrl": "https://maps.example.com/matteis",
            "lat": 34.6677,
            "lng": -120.1149,
            "unexpected": true
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id(), "matteis-tavern-los-olivos");
        assert_eq!(place.primary_category, Some(Category::from("food")));
        assert_eq!(place.tags(), ["historic", "cocktails"]);
        assert_eq!(place.map_url.as_deref(), Some("https://maps.example.com/matteis"));
        assert!(place.is_map_eligible());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let place: Place = serde_json::from_str(r#"{"id": "x", "name": "X"}"#).unwrap();
        assert!(place.towns.is_empty());
        assert!(place.categories.is_empty());
        assert!(place.tags.is_none());
        assert!(place.tags().is_empty());
        assert!(place.coordinates().is_none());
    }

    #[test]
    fn test_half_coordinates_are_not_eligible() {
        let mut only_lat = Place::new("a", "A");
        only_lat.lat = Some(34.6);
        assert!(!only_lat.is_map_eligible());
        assert!(!only_lat.is_distance_eligible());

        let mut only_lng = Place::new("b", "B");
        only_lng.lng = Some(-120.1);
        assert!(!only_lng.is_map_eligible());
        assert!(!only_lng.is_distance_eligible());

        let nan = Place::new("c", "C").with_coordinates(f64::NAN, -120.1);
        assert!(nan.coordinates().is_none());
    }

    #[test]
    fn test_zero_coordinates_are_eligible() {
        let place = Place::new("null-island", "Null Island").with_coordinates(0.0, 0.0);
        assert_eq!(place.coordinates(), Some(Coordinates::new(0.0, 0.0)));
    }

    #[test]
    fn test_equality_uses_id_only() {
        let a = Place::new("same", "First");
        let b = Place::new("same", "Second").with_towns(["Ojai"]);
        assert_eq!(a, b);
        assert_ne!(a, Place::new("other", "First"));
    }

    #[test]
    fn test_map_link_prefers_feed_url() {
        let mut place = Place::new("p", "P").with_coordinates(34.5, -120.0);
        assert_eq!(
            place.map_link().as_deref(),
            Some("https://www.google.com/maps/@34.5,-120,25z")
        );
        place.map_url = Some("https://maps.example.com/p".to_string());
        assert_eq!(place.map_link().as_deref(), Some("https://maps.example.com/p"));
        assert!(Place::new("q", "Q").map_link().is_none());
    }
}
