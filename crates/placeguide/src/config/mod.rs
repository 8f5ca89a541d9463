use std::path::{Path, PathBuf};

use placeguide_data::{CategorySet, DataSource};

use crate::{error::PlaceGuideError, location::PositionOptions};

/// Map renderer settings.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Zoom level handed to the renderer
    pub default_zoom: u8,
    /// Edge margin, in percent of the viewport, kept clear of pins
    pub pin_padding_pct: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_zoom: 6,
            pin_padding_pct: 10.0,
        }
    }
}

/// Everything a directory session is configured with.
#[derive(Debug, Clone, Default)]
pub struct DirectoryConfig {
    /// The closed set of legal categories and their icons
    pub categories: CategorySet,
    /// Reject feeds using categories outside `categories` instead of warning
    pub strict_categories: bool,
    pub geolocation: PositionOptions,
    pub map: MapConfig,
    pub data_source: DataSource,
}

impl DirectoryConfig {
    #[must_use]
    pub fn builder() -> DirectoryConfigBuilder {
        DirectoryConfigBuilder::new()
    }
}

/// Builder for creating directory configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct DirectoryConfigBuilder {
    config: DirectoryConfig,
}

impl DirectoryConfigBuilder {
    /// Create a new builder with the canonical category set and the embedded feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for feeds using the canonical category set
    pub fn canonical() -> Self {
        Self::new().categories(CategorySet::canonical())
    }

    /// Preset for the coastal feed variant, which adds `beaches`
    pub fn coastal() -> Self {
        Self::new().categories(CategorySet::coastal())
    }

    pub fn categories(mut self, categories: CategorySet) -> Self {
        self.config.categories = categories;
        self
    }

    /// Load the category set from a JSON file of `{name, icon}` entries
    pub fn categories_from_path(self, path: impl AsRef<Path>) -> Result<Self, PlaceGuideError> {
        let categories = CategorySet::from_path(path)?;
        Ok(self.categories(categories))
    }

    pub fn strict_categories(mut self, strict: bool) -> Self {
        self.config.strict_categories = strict;
        self
    }

    pub fn data_source(mut self, source: DataSource) -> Self {
        self.config.data_source = source;
        self
    }

    pub fn feed_file(self, path: impl Into<PathBuf>) -> Self {
        self.data_source(DataSource::File(path.into()))
    }

    pub fn feed_url(self, url: impl Into<String>) -> Self {
        self.data_source(DataSource::Url(url.into()))
    }

    pub fn high_accuracy(mut self, enabled: bool) -> Self {
        self.config.geolocation.high_accuracy = enabled;
        self
    }

    pub fn geolocation_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.geolocation.timeout_ms = timeout_ms;
        self
    }

    pub fn max_cached_position_age_ms(mut self, age_ms: u64) -> Self {
        self.config.geolocation.max_cached_age_ms = age_ms;
        self
    }

    /// Set the map zoom level (0 = whole world, 22 = building level)
    pub fn map_zoom(mut self, zoom: u8) -> Self {
        self.config.map.default_zoom = zoom.min(22);
        self
    }

    /// Set the pin edge padding; must leave part of the viewport usable
    pub fn pin_padding_pct(mut self, padding: f64) -> Result<Self, PlaceGuideError> {
        if !(0.0..50.0).contains(&padding) {
            return Err(PlaceGuideError::ConfigError(format!(
                "Pin padding must be in [0, 50) percent, got {padding}"
            )));
        }
        self.config.map.pin_padding_pct = padding;
        Ok(self)
    }

    /// Build the final configuration
    pub fn build(self) -> DirectoryConfig {
        self.config
    }
}
