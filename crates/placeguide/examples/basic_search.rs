//! Basic directory filtering
//!
//! This example demonstrates the fundamental operations:
//! - Loading the bundled place feed
//! - Free-text, category and town filters
//! - Reading the distinct town list

use placeguide::{DirectoryConfig, Place, PlaceQuery, PlaceRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repo = PlaceRepository::load(&DirectoryConfig::default())?;
    println!("Loaded {} places across {} towns\n", repo.len(), repo.towns().len());

    println!("Towns: {}\n", repo.towns().join(", "));

    // Free text matches names, towns, notes and tags
    println!("Searching for 'breakfast':");
    let query = PlaceQuery::builder().search("breakfast").build();
    print_places(&repo.filter(&query));

    // Categories are OR-ed together
    println!("\nCategories 'wine' or 'bar':");
    let query = PlaceQuery::builder().categories(["wine", "bar"]).build();
    print_places(&repo.filter(&query));

    // A town must match exactly
    println!("\nHistory in Solvang:");
    let query = PlaceQuery::builder()
        .category("history")
        .town("Solvang")
        .build();
    print_places(&repo.filter(&query));

    Ok(())
}

fn print_places(places: &[&Place]) {
    if places.is_empty() {
        println!("  (no matches)");
    }
    for (i, place) in places.iter().enumerate() {
        println!(
            "  {}. {} [{}] - {}",
            i + 1,
            place.name,
            place.towns.join(", "),
            place
                .categories
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = placeguide::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_basic_search_example() {
        setup_test_env();
        assert!(main().is_ok(), "Basic search example should run successfully");
    }
}
