use serde::{Deserialize, Serialize};

/// Lowest rating that passes [`filter_by_rating`].
pub const MIN_RATING: f64 = 4.0;

/// A rated entry. Fields are read-only once built:
///
/// ```compile_fail
/// let mut item = snippets::Item::new("Book", 5.0);
/// item.rating = 1.0;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    title: String,
    rating: f64,
}

impl Item {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Item {
            title: title.into(),
            rating,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// Returns the items rated at least [`MIN_RATING`], in their original order.
pub fn filter_by_rating(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.rating() >= MIN_RATING)
        .cloned()
        .collect()
}
