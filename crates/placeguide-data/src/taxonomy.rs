//! Configurable category taxonomy.
//!
//! Two feed variants exist in the wild with different category sets, so the
//! set of legal categories is data. Each entry also names the icon the
//! presentation layer draws for it.

use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Category, DataError, Result};

/// Presentation icon for a category, named after the lucide icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    UtensilsCrossed,
    Wine,
    Coffee,
    TreePine,
    Palette,
    Music,
    Landmark,
    Leaf,
    Dumbbell,
    Bed,
    ShoppingBag,
    Waves,
    #[default]
    MapPin,
}

impl Icon {
    /// The icon's resource name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UtensilsCrossed => "utensils-crossed",
            Self::Wine => "wine",
            Self::Coffee => "coffee",
            Self::TreePine => "tree-pine",
            Self::Palette => "palette",
            Self::Music => "music",
            Self::Landmark => "landmark",
            Self::Leaf => "leaf",
            Self::Dumbbell => "dumbbell",
            Self::Bed => "bed",
            Self::ShoppingBag => "shopping-bag",
            Self::Waves => "waves",
            Self::MapPin => "map-pin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: Category,
    #[serde(default)]
    pub icon: Icon,
}

impl CategoryDef {
    pub fn new(name: impl Into<Category>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }
}

/// An ordered, closed set of categories.
///
/// Order is the display order of the category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySet {
    entries: Vec<CategoryDef>,
}

impl CategorySet {
    /// Build a set, rejecting repeated names.
    pub fn from_entries(entries: Vec<CategoryDef>) -> Result<Self> {
        if let Some(dup) = entries.iter().map(|e| &e.name).duplicates().next() {
            return Err(DataError::DuplicateCategory(dup.to_string()));
        }
        Ok(Self { entries })
    }

    /// food, wine, bar, coffee, activity, outdoor, stay, hiking, shopping,
    /// art, music, history, nature, sports, other
    #[must_use]
    pub fn canonical() -> Self {
        Self::from_static(&[
            ("food", Icon::UtensilsCrossed),
            ("wine", Icon::Wine),
            ("bar", Icon::Wine),
            ("coffee", Icon::Coffee),
            ("activity", Icon::MapPin),
            ("outdoor", Icon::TreePine),
            ("stay", Icon::Bed),
            ("hiking", Icon::TreePine),
            ("shopping", Icon::ShoppingBag),
            ("art", Icon::Palette),
            ("music", Icon::Music),
            ("history", Icon::Landmark),
            ("nature", Icon::Leaf),
            ("sports", Icon::Dumbbell),
            ("other", Icon::MapPin),
        ])
    }

    /// The coastal feed variant: adds `beaches`, drops the arts and nature tags.
    #[must_use]
    pub fn coastal() -> Self {
        Self::from_static(&[
            ("food", Icon::UtensilsCrossed),
            ("wine", Icon::Wine),
            ("bar", Icon::Wine),
            ("coffee", Icon::Coffee),
            ("activity", Icon::MapPin),
            ("outdoor", Icon::TreePine),
            ("stay", Icon::Bed),
            ("hiking", Icon::TreePine),
            ("beaches", Icon::Waves),
            ("shopping", Icon::ShoppingBag),
            ("other", Icon::MapPin),
        ])
    }

    fn from_static(entries: &[(&str, Icon)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(name, icon)| CategoryDef::new(name, icon))
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CategoryDef> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.entries.iter().any(|e| &e.name == category)
    }

    #[must_use]
    pub fn icon_for(&self, category: &Category) -> Option<Icon> {
        self.entries
            .iter()
            .find(|e| &e.name == category)
            .map(|e| e.icon)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDef> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().map(|e| &e.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<CategoryDef>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_set() {
        let set = CategorySet::canonical();
        assert_eq!(set.len(), 15);
        assert!(set.contains(&"history".into()));
        assert!(!set.contains(&"beaches".into()));
        assert_eq!(set.names().next().map(Category::as_str), Some("food"));
        assert_eq!(set.icon_for(&"stay".into()), Some(Icon::Bed));
    }

    #[test]
    fn test_coastal_set() {
        let set = CategorySet::coastal();
        assert_eq!(set.len(), 11);
        assert!(set.contains(&"beaches".into()));
        assert!(!set.contains(&"art".into()));
        assert_eq!(set.icon_for(&"beaches".into()), Some(Icon::Waves));
    }

    #[test]
    fn test_from_json() {
        let set = CategorySet::from_json_str(
            r#"[{"name": "food", "icon": "utensils-crossed"}, {"name": "surf"}]"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.icon_for(&"surf".into()), Some(Icon::MapPin));
        assert!(set.icon_for(&"wine".into()).is_none());
    }

    #[test]
    fn test_duplicate_categories_rejected() {
        let err = CategorySet::from_json_str(r#"[{"name": "food"}, {"name": "food"}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("food"));

        let err = CategorySet::from_entries(vec![
            CategoryDef::new("wine", Icon::Wine),
            CategoryDef::new("wine", Icon::Wine),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateCategory(name) if name == "wine"));
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(Icon::UtensilsCrossed.name(), "utensils-crossed");
        assert_eq!(Icon::default(), Icon::MapPin);
        assert_eq!(
            serde_json::to_string(&Icon::ShoppingBag).unwrap(),
            "\"shopping-bag\""
        );
    }
}
