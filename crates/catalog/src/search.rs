//! In-memory search over catalog lists (case-insensitive substring match)

use contracts::domain::product::Product;

/// Types that can be matched against a search box value
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

impl Searchable for Product {
    /// The product list searches by name or brand
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.brand.to_lowercase().contains(&filter)
    }
}

/// Filter a list against a search term; an empty term keeps everything
pub fn filter_list<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.trim().is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|i| i.matches_filter(filter)).collect()
}
