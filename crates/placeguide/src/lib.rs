//! Placeguide - Local Place Directory Library
//!
//! Placeguide is the functional core of a small local directory: a fixed feed
//! of places (restaurants, wineries, trails, inns) that users narrow down by
//! free text, category and town, and view either as a list or on a map with
//! distances from where they are.
//!
//! # Quick Start
//!
//! ```rust
//! use placeguide::{DirectoryConfig, DirectoryState, PlaceRepository, TownSelection};
//!
//! // Load the bundled sample feed
//! let repo = PlaceRepository::load(&DirectoryConfig::default())?;
//!
//! // Narrow it down the way a user would
//! let mut state = DirectoryState::new();
//! state.toggle_category("wine");
//! state.select_town(TownSelection::Town("Los Olivos".to_string()));
//!
//! let results = state.results(&repo);
//! println!("{}", results.label());
//! for place in results.places() {
//!     println!("  {}", place.name);
//! }
//! # Ok::<(), placeguide::error::PlaceGuideError>(())
//! ```
//!
//! # Features
//!
//! - **Filtering**: case-insensitive text search over names, towns, notes and
//!   tags, OR-ed category selection and an exact town facet
//! - **Distances**: great-circle miles from the user to each place
//! - **Maps**: marker payloads and Web Mercator pin placement
//! - **Geolocation**: a fire-once request against a pluggable provider
//! - **Configurable taxonomy**: category sets and icons are data, not code
//!
//! # Data
//!
//! A sample feed is compiled in. Feeds can also be read from a file or fetched
//! from a URL (with the `download_data` feature), in which case the download
//! is cached under the data directory.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod directory;
pub mod error;
pub mod geo;
mod icons;
mod location;
mod map;
mod repository;
mod search;

pub use config::{DirectoryConfig, DirectoryConfigBuilder, MapConfig};
pub use directory::{DirectoryResults, DirectoryState, NO_MATCHES_MESSAGE, ViewMode};
pub use geo::{MapBounds, PinPosition, distance, distance_between, distance_to};
pub use icons::{icon_for_category, icon_for_place, legend};
pub use location::{
    FailingProvider, FixedPositionProvider, GeolocationProvider, LocationRequest, LocationStatus,
    PositionCallback, PositionError, PositionErrorKind, PositionOptions, PositionResult,
    UNSUPPORTED_MESSAGE, UnsupportedProvider,
};
pub use map::{MapMarker, MapView};
pub use placeguide_data as data;
pub use placeguide_data::{Category, CategorySet, Coordinates, DataSource, Icon, Place};
pub use repository::PlaceRepository;
pub use search::{
    PlaceMatch, PlaceQuery, PlaceQueryBuilder, TownSelection, annotate_distances, distinct_towns,
    filter,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Placeguide library.
///
/// Installs a formatted `tracing` subscriber once per process. `RUST_LOG`
/// takes precedence over `level` when set.
///
/// # Examples
///
/// ```rust
/// use placeguide::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), placeguide::error::PlaceGuideError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::PlaceGuideError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("reqwest=warn".parse()?)
            .add_directive("hyper_util=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
        Ok(())
    })
}
