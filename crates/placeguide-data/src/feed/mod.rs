use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use itertools::Itertools;
use tracing::{info, instrument, warn};

use crate::{CategorySet, DataError, Place, Result};

#[cfg(feature = "download_data")]
pub mod fetch;

const FEED_FILE_DEFAULT: &str = "places.json";

/// Where the place feed comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The sample feed compiled into the crate
    #[default]
    Embedded,
    /// A JSON file on disk
    File(PathBuf),
    /// A JSON document over HTTP, cached under `<data dir>/raw/<host>/<path>` after the first fetch
    Url(String),
}

impl DataSource {
    /// Short label used in logs and metadata.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Embedded => "embedded".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedMetadata {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub place_count: usize,
}

/// A parsed feed together with where and when it was read.
#[derive(Debug, Clone)]
pub struct LoadedFeed {
    pub places: Vec<Place>,
    pub metadata: FeedMetadata,
}

/// Read and parse the feed from `source`.
///
/// For [`DataSource::Url`] an existing cached copy is preferred; otherwise the
/// document is downloaded when the `download_data` feature is enabled.
#[instrument(name = "Load place feed", skip_all, fields(source = %source.label()), level = "info")]
pub fn load_feed(source: &DataSource) -> Result<LoadedFeed> {
    let places = match source {
        DataSource::Embedded => crate::embedded::load_embedded_places()?,
        DataSource::File(path) => read_places_file(path)?,
        DataSource::Url(url) => load_from_url(url)?,
    };
    info!(count = places.len(), "Place feed loaded");

    Ok(LoadedFeed {
        metadata: FeedMetadata {
            source: source.label(),
            loaded_at: Utc::now(),
            place_count: places.len(),
        },
        places,
    })
}

pub fn parse_places(json: &str) -> Result<Vec<Place>> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_places_file(path: &Path) -> Result<Vec<Place>> {
    info!(path = ?path, "Reading place feed from disk");
    let json = std::fs::read_to_string(path)?;
    parse_places(&json)
}

/// Cache location for a feed URL: `<data dir>/raw/<host>/<path segments>`.
///
/// Scheme, query and fragment are dropped. A URL naming a directory (or only
/// a host) is stored as `places.json` inside it.
#[must_use]
pub fn feed_cache_path(url: &str) -> PathBuf {
    crate::get_data_dir().join("raw").join(cache_key(url))
}

fn cache_key(url: &str) -> PathBuf {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let location = without_scheme.split(['?', '#']).next().unwrap_or_default();

    let mut key: PathBuf = location
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .map(sanitize_segment)
        .collect();
    if location.ends_with('/') || key.components().count() <= 1 {
        key.push(FEED_FILE_DEFAULT);
    }
    key
}

/// Keep a URL segment usable as a file name on every platform.
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect()
}

fn load_from_url(url: &str) -> Result<Vec<Place>> {
    let cache_path = feed_cache_path(url);
    if cache_path.exists() {
        info!(path = ?cache_path, "Found cached feed");
        return read_places_file(&cache_path);
    }

    warn!(url, "No cached copy of feed");

    #[cfg(feature = "download_data")]
    {
        info!("Attempting to download feed as download_data feature is enabled.");
        fetch::download_feed(url, &cache_path)?;
        read_places_file(&cache_path)
    }
    #[cfg(not(feature = "download_data"))]
    {
        warn!("Download_data feature is disabled. Cannot fetch the feed.");
        Err(DataError::DownloadDisabled)
    }
}

/// Check a feed against a category set.
///
/// Repeated ids are always an error. A category outside `categories` is an
/// error when `strict`, otherwise it is logged and the record kept.
pub fn validate_places(places: &[Place], categories: &CategorySet, strict: bool) -> Result<()> {
    if let Some(id) = places.iter().map(Place::id).duplicates().next() {
        return Err(DataError::DuplicatePlaceId(id.to_string()));
    }

    for place in places {
        let unknown = place
            .categories
            .iter()
            .chain(place.primary_category.as_ref())
            .find(|c| !categories.contains(c));

        if let Some(category) = unknown {
            if strict {
                return Err(DataError::UnknownCategory {
                    place_id: place.id.clone(),
                    category: category.to_string(),
                });
            }
            warn!(
                place_id = %place.id,
                %category,
                "Category not in configured set; keeping record"
            );
        }
    }
    Ok(())
}
