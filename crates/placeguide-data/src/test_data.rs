use std::io::Write;

use tempfile::NamedTempFile;
use tracing::info;

use super::{Place, error::Result};

/// Configuration for test feed generation
#[derive(Debug, Clone)]
pub struct TestDataConfig {
    /// Number of places to write
    pub rows: usize,
    /// Whether to use realistic records or the three-place scenario
    pub realistic_data: bool,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            rows: 24,
            realistic_data: true,
        }
    }
}

impl TestDataConfig {
    /// The three-place scenario: A and B in Ojai, C in Solvang
    pub fn minimal() -> Self {
        Self {
            rows: 3,
            realistic_data: false,
        }
    }

    /// Sample data for integration tests
    pub fn sample() -> Self {
        Self::default()
    }
}

/// Create a test feed in a temporary file.
pub fn create_test_data(config: &TestDataConfig) -> Result<NamedTempFile> {
    info!("Creating test data with config: {:?}", config);

    let places = generate_places(config);
    let mut file = NamedTempFile::with_suffix(".json")?;
    serde_json::to_writer_pretty(&mut file, &places)?;
    file.flush()?;
    Ok(file)
}

/// Generate the places a config describes without touching the filesystem.
pub fn generate_places(config: &TestDataConfig) -> Vec<Place> {
    if config.realistic_data && config.rows > 3 {
        realistic_places(config.rows)
    } else {
        minimal_places().into_iter().take(config.rows).collect()
    }
}

/// A(Ojai, food), B(Ojai, wine, tagged "views"), C(Solvang, food).
pub fn minimal_places() -> Vec<Place> {
    vec![
        Place::new("a", "Ojai Pie Shop")
            .with_towns(["Ojai"])
            .with_categories(["food"]),
        Place::new("b", "Topa Mountain Winery")
            .with_towns(["Ojai"])
            .with_categories(["wine"])
            .with_tags(["views"]),
        Place::new("c", "Solvang Bakery")
            .with_towns(["Solvang"])
            .with_categories(["food"]),
    ]
}

fn realistic_places(rows: usize) -> Vec<Place> {
    let base_data = [
        Place::new("", "Mattei's Tavern")
            .with_towns(["Los Olivos"])
            .with_categories(["food", "bar"])
            .with_tags(["historic", "cocktails"])
            .with_notes("Old stagecoach stop")
            .with_coordinates(34.6677, -120.1149),
        Place::new("", "Los Olivos Wine Merchant")
            .with_towns(["Los Olivos"])
            .with_categories(["wine"])
            .with_tags(["wine region"])
            .with_coordinates(34.6669, -120.1157),
        Place::new("", "Corner House Coffee")
            .with_towns(["Solvang"])
            .with_categories(["coffee"])
            .with_tags(["kid-friendly"])
            .with_coordinates(34.5958, -120.1376),
        Place::new("", "Nojoqui Falls")
            .with_towns(["Solvang", "Buellton"])
            .with_categories(["hiking", "outdoor"])
            .with_tags(["waterfall", "views"])
            .with_notes("Short walk to the falls")
            .with_coordinates(34.5353, -120.1746),
        Place::new("", "The Ballard Inn")
            .with_towns(["Ballard", "Santa Ynez"])
            .with_categories(["stay"])
            .with_notes("Quiet rooms"),
        Place::new("", "Libbey Bowl")
            .with_towns(["Ojai"])
            .with_categories(["music", "activity"])
            .with_tags(["live-music"])
            .with_coordinates(34.4478, -119.2446),
        Place::new("", "Kolding Park Courts")
            .with_towns(["Solvang"])
            .with_categories(["sports"]),
        Place::new("", "Meditation Mount")
            .with_towns(["Ojai"])
            .with_categories(["nature"])
            .with_tags(["sunset", "views"])
            .with_notes("The pink moment")
            .with_coordinates(34.4468, -119.2045),
    ];

    base_data
        .iter()
        .cycle()
        .take(rows)
        .enumerate()
        .map(|(i, template)| Place {
            id: format!("place-{i:03}"),
            ..template.clone()
        })
        .collect()
}
