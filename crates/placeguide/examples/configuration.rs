//! Directory configuration
//!
//! This example demonstrates the configuration builder: category set presets,
//! strict validation, geolocation options and map settings.

use placeguide::{
    CategorySet, DirectoryConfig, DirectoryConfigBuilder, DirectoryState, PlaceRepository, legend,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Preset category sets
    print_legend("Canonical", &CategorySet::canonical());
    print_legend("Coastal", &CategorySet::coastal());

    // Strict validation against the canonical set
    let config = DirectoryConfigBuilder::canonical()
        .strict_categories(true)
        .geolocation_timeout_ms(10_000)
        .high_accuracy(false)
        .map_zoom(11)
        .pin_padding_pct(5.0)?
        .build();

    let repo = PlaceRepository::load(&config)?;
    println!("\nStrictly validated {} places", repo.len());

    let state = DirectoryState::new();
    if let Some(view) = state.map_view(&repo, &config.map) {
        println!(
            "Map centered on ({:.4}, {:.4}) at zoom {} with {} markers",
            view.center.lat,
            view.center.lng,
            view.zoom,
            view.markers.len()
        );
        for (marker, pin) in view.pin_positions(config.map.pin_padding_pct).take(3) {
            println!(
                "  {:<32} left {:>5.1}%  top {:>5.1}%",
                marker.title, pin.left_pct, pin.top_pct
            );
        }
    }

    // The same feed under the coastal set loads with warnings unless strict
    let lenient = DirectoryConfig::builder()
        .categories(CategorySet::coastal())
        .build();
    let repo = PlaceRepository::load(&lenient)?;
    println!("\nLeniently loaded {} places under the coastal set", repo.len());

    Ok(())
}

fn print_legend(label: &str, categories: &CategorySet) {
    println!("{label} categories:");
    for (category, icon) in legend(categories) {
        println!("  {:<10} {}", category.as_str(), icon.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = placeguide::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_configuration_example() {
        setup_test_env();
        assert!(main().is_ok(), "Configuration example should run successfully");
    }
}
