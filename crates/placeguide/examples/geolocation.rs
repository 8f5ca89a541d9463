//! Distances from the user
//!
//! This example demonstrates the fire-once location request and how
//! distances are attached to results without changing their order.

use placeguide::{
    Coordinates, DirectoryConfig, DirectoryState, FailingProvider, FixedPositionProvider,
    LocationStatus, PlaceRepository,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    placeguide::init_logging(tracing::Level::INFO)?;

    let config = DirectoryConfig::default();
    let repo = PlaceRepository::load(&config)?;

    // A provider that knows where we are: downtown Solvang
    let state = DirectoryState::new();
    let solvang = FixedPositionProvider::new(Coordinates::new(34.5958, -120.1376));
    let status = state.request_location(&solvang, &config.geolocation);
    println!("Location: {status:?}\n");

    let results = state.results(&repo);
    println!("{}:", results.label());
    for m in &results.matches {
        match m.distance_miles {
            Some(miles) => println!("  {:<40} {miles:>6.1} mi", m.place.name),
            None => println!("  {:<40} {:>9}", m.place.name, "-"),
        }
    }

    // A provider that refuses: the list still works, just without distances
    println!();
    let denied = DirectoryState::new();
    let status = denied.request_location(
        &FailingProvider::permission_denied("User denied Geolocation"),
        &config.geolocation,
    );
    if let LocationStatus::Failed(message) = &status {
        println!("Location unavailable: {message}");
    }
    println!("{} without distances", denied.results(&repo).label());

    Ok(())
}
