use crate::errors::{MgwError, Result};
use crate::model::{Item, Money};

/// The ordered menu
///
/// Items are addressed by position. Removing an item shifts every later
/// item down by one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: Vec<Item>,
}

/// Lowercase the query and drop any double quotes
fn normalize_query(query: &str) -> String {
    query.to_lowercase().replace('"', "")
}

impl Menu {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn out_of_range(&self, index: usize) -> MgwError {
        MgwError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len: self.items.len(),
        }
    }

    /// Get the item at `index`
    ///
    /// # Errors
    /// * `IndexOutOfRange` - if `index >= len()`
    pub fn get(&self, index: usize) -> Result<&Item> {
        self.items.get(index).ok_or_else(|| self.out_of_range(index))
    }

    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove and return the item at `index`
    ///
    /// # Errors
    /// * `IndexOutOfRange` - if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> Result<Item> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    /// Replace the name and/or price of the item at `index`
    ///
    /// # Errors
    /// * `IndexOutOfRange` - if `index >= len()`
    pub fn update_at(
        &mut self,
        index: usize,
        name: Option<String>,
        price: Option<Money>,
    ) -> Result<&Item> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(MgwError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            })?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(price) = price {
            item.price = price;
        }
        Ok(item)
    }

    /// Position of the first item whose name contains `name`, ignoring case
    pub fn find_item_index(&self, name: &str) -> Option<usize> {
        let query = normalize_query(name);
        self.items
            .iter()
            .position(|item| item.name.to_lowercase().contains(&query))
    }

    /// Positions of every item whose name contains `name`, ignoring case
    ///
    /// An item whose name equals the query exactly replaces all matches
    /// collected so far and ends the scan, so `"tea"` over
    /// `["Bubble Tea", "Milk Tea", "Tea"]` yields `[2]`.
    pub fn find_matching_indices(&self, name: &str) -> Vec<usize> {
        let query = normalize_query(name);
        let mut matches = Vec::new();

        for (index, item) in self.items.iter().enumerate() {
            let candidate = item.name.to_lowercase();
            if !candidate.contains(&query) {
                continue;
            }
            if candidate == query {
                matches.clear();
                matches.push(index);
                break;
            }
            matches.push(index);
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(names: &[&str]) -> Menu {
        Menu::from_items(
            names
                .iter()
                .map(|n| Item::new(*n, Money::from_cents(100)))
                .collect(),
        )
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let m = menu(&["Bubble Tea", "Milk Tea", "Tea"]);
        assert_eq!(m.find_matching_indices("tea"), vec![2]);
    }

    #[test]
    fn test_exact_match_stops_scan() {
        let m = menu(&["Tea", "Milk Tea"]);
        assert_eq!(m.find_matching_indices("TEA"), vec![0]);
    }

    #[test]
    fn test_partial_matches_in_menu_order() {
        let m = menu(&["Bubble Tea", "Coffee", "Milk Tea"]);
        assert_eq!(m.find_matching_indices("tea"), vec![0, 2]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let m = menu(&["Bubble Tea", "Coffee"]);
        assert!(m.find_matching_indices("xyz").is_empty());
    }

    #[test]
    fn test_quotes_are_stripped_from_query() {
        let m = menu(&["Milk Tea", "Coffee"]);
        assert_eq!(m.find_matching_indices("\"milk tea\""), vec![0]);
        assert_eq!(m.find_item_index("\"coff\""), Some(1));
    }

    #[test]
    fn test_find_item_index_returns_first_substring_match() {
        let m = menu(&["Bubble Tea", "Milk Tea", "Tea"]);
        assert_eq!(m.find_item_index("tea"), Some(0));
        assert_eq!(m.find_item_index("xyz"), None);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut m = menu(&["A"]);
        let err = m.remove_at(1).unwrap_err();
        assert_eq!(err, MgwError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_update_at_changes_only_given_fields() {
        let mut m = menu(&["A", "B"]);
        m.update_at(1, None, Some(Money::from_cents(250))).unwrap();
        assert_eq!(m.get(1).unwrap().name, "B");
        assert_eq!(m.get(1).unwrap().price, Money::from_cents(250));

        m.update_at(0, Some("Z".to_string()), None).unwrap();
        assert_eq!(m.get(0).unwrap().name, "Z");
        assert_eq!(m.get(0).unwrap().price, Money::from_cents(100));
    }
}
