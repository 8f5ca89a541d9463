use tracing::info;

use crate::{Place, Result};

// Sample feed shipped with the crate
const EMBEDDED_PLACES: &str = include_str!("places.json");

/// Load the sample feed that ships with the library.
///
/// Twelve Santa Ynez Valley and Ojai places covering every field of the feed,
/// including records with no coordinates and one with a latitude only.
pub fn load_embedded_places() -> Result<Vec<Place>> {
    info!("Loading embedded place feed");
    let places: Vec<Place> = serde_json::from_str(EMBEDDED_PLACES)?;
    Ok(places)
}
