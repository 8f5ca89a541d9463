use placeguide_data::{Category, CategorySet, Icon, Place};

/// Icon for a category; categories outside the set get [`Icon::MapPin`].
#[must_use]
pub fn icon_for_category(categories: &CategorySet, category: &Category) -> Icon {
    categories.icon_for(category).unwrap_or_default()
}

/// Icon for a place card or pin: the primary category's, else the first category's.
#[must_use]
pub fn icon_for_place(categories: &CategorySet, place: &Place) -> Icon {
    place
        .primary_category
        .as_ref()
        .or_else(|| place.categories.first())
        .map_or(Icon::MapPin, |category| icon_for_category(categories, category))
}

/// The category picker's entries, in display order.
pub fn legend(categories: &CategorySet) -> impl Iterator<Item = (&Category, Icon)> {
    categories.iter().map(|def| (&def.name, def.icon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_category() {
        let set = CategorySet::canonical();
        assert_eq!(icon_for_category(&set, &"food".into()), Icon::UtensilsCrossed);
        assert_eq!(icon_for_category(&set, &"bar".into()), Icon::Wine);
        assert_eq!(icon_for_category(&set, &"beaches".into()), Icon::MapPin);
        assert_eq!(
            icon_for_category(&CategorySet::coastal(), &"beaches".into()),
            Icon::Waves
        );
    }

    #[test]
    fn test_icon_for_place_prefers_primary_category() {
        let set = CategorySet::canonical();
        let place = Place::new("p", "P")
            .with_categories(["food", "wine"])
            .with_primary_category("stay");
        assert_eq!(icon_for_place(&set, &place), Icon::Bed);

        let no_primary = Place::new("q", "Q").with_categories(["coffee", "food"]);
        assert_eq!(icon_for_place(&set, &no_primary), Icon::Coffee);

        assert_eq!(icon_for_place(&set, &Place::new("r", "R")), Icon::MapPin);
    }

    #[test]
    fn test_legend_order() {
        let set = CategorySet::coastal();
        let names: Vec<_> = legend(&set).map(|(c, _)| c.as_str()).collect();
        assert_eq!(names.first(), Some(&"food"));
        assert_eq!(names.last(), Some(&"other"));
        assert_eq!(names.len(), set.len());
    }
}
