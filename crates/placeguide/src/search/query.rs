use placeguide_data::Category;

/// Town facet selection: every town, or one exact town name.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TownSelection {
    #[default]
    All,
    Town(String),
}

impl TownSelection {
    #[must_use]
    pub fn as_town(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Town(town) => Some(town),
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<S: Into<String>> From<Option<S>> for TownSelection {
    fn from(town: Option<S>) -> Self {
        town.map_or(Self::All, |t| Self::Town(t.into()))
    }
}

/// The filter inputs of one query.
///
/// A default query filters nothing out.
///
/// # Examples
///
/// ```rust
/// use placeguide::PlaceQuery;
///
/// let query = PlaceQuery::builder()
///     .search("views")
///     .category("wine")
///     .category("food")
///     .town("Ojai")
///     .build();
///
/// assert_eq!(query.categories.len(), 2);
/// assert_eq!(query.town.as_town(), Some("Ojai"));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Free text; only applied when non-blank after trimming
    pub search: String,
    /// OR-ed together; only applied when non-empty
    pub categories: Vec<Category>,
    pub town: TownSelection,
}

impl PlaceQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> PlaceQueryBuilder {
        PlaceQueryBuilder::default()
    }

    /// The search text as typed, or `None` when it is blank.
    ///
    /// Surrounding whitespace only decides whether text search is active; it
    /// stays part of the needle.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        (!self.search.trim().is_empty()).then_some(self.search.as_str())
    }

    /// True when no predicate is active and every place matches.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_text().is_none() && self.categories.is_empty() && self.town.is_all()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaceQueryBuilder {
    query: PlaceQuery,
}

impl PlaceQueryBuilder {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = text.into();
        self
    }

    /// Add a category to the selection. Repeats are ignored.
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        let category = category.into();
        if !self.query.categories.contains(&category) {
            self.query.categories.push(category);
        }
        self
    }

    pub fn categories<I, C>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        categories.into_iter().fold(self, Self::category)
    }

    pub fn town(mut self, town: impl Into<String>) -> Self {
        self.query.town = TownSelection::Town(town.into());
        self
    }

    pub fn all_towns(mut self) -> Self {
        self.query.town = TownSelection::All;
        self
    }

    pub fn build(self) -> PlaceQuery {
        self.query
    }
}
