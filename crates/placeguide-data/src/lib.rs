//! Feed model and loading for the placeguide directory library.
//!
//! This crate owns everything about the place feed: the [`Place`] record, the
//! configurable [`CategorySet`] taxonomy, where a feed comes from
//! ([`DataSource`]) and how it is read, downloaded and cached.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod embedded;
mod error;
pub mod feed;
mod model;
mod taxonomy;
pub mod test_data;

pub use error::{DataError, Result};
pub use feed::{DataSource, FeedMetadata, LoadedFeed, load_feed, validate_places};
pub use model::{Category, Coordinates, Place};
pub use taxonomy::{CategoryDef, CategorySet, Icon};
pub use test_data::{TestDataConfig, create_test_data};

static TEST_DATA_DIR: Lazy<tempfile::TempDir> = Lazy::new(|| {
    tempfile::TempDir::new().expect("Failed to create global temporary test data directory")
});

pub const DATA_DIR_DEFAULT: &str = "./placeguide_data";
pub const DATA_DIR_ENV: &str = "PLACEGUIDE_DATA_DIR";

/// Centralized function to determine if we should use test data.
pub fn should_use_test_data() -> bool {
    cfg!(test) || cfg!(doctest)
}

/// Global data directory path that automatically determines the appropriate location.
///
/// Resolution order: a temporary directory under test, then `PLACEGUIDE_DATA_DIR`,
/// then the platform data directory (with the `system-dirs` feature), then
/// `./placeguide_data`.
pub static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if should_use_test_data() {
        let temp_dir = TEST_DATA_DIR.path().to_path_buf();
        warn!(temp_dir = ?temp_dir, "Using temporary data directory for tests");
        return temp_dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    system_data_dir().unwrap_or_else(|| PathBuf::from(DATA_DIR_DEFAULT))
});

pub fn get_data_dir() -> &'static Path {
    DATA_DIR.as_path()
}

#[cfg(feature = "system-dirs")]
fn system_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "SamBroomy", "placeguide")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(not(feature = "system-dirs"))]
fn system_data_dir() -> Option<PathBuf> {
    None
}
