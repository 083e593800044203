/// Fixed category shortcuts offered in the search view. Each maps
/// one-to-one to a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Technology,
    Sports,
    Business,
    Entertainment,
    Health,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Sports,
        Category::Business,
        Category::Entertainment,
        Category::Health,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
        }
    }
}
