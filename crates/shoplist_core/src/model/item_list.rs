//! Ordered in-memory item list.
//!
//! # Responsibility
//! - Hold the items currently shown by the list view, in insertion order.
//! - Offer append, remove-by-value and clear mutations.
//!
//! # Invariants
//! - Order is insertion order; `push` always appends.
//! - `remove_first` deletes only the first exact match.

use crate::model::item::Item;

/// Explicit list model kept separate from its rendered representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from persisted strings.
    ///
    /// Entries that fail item validation are dropped and surrounding
    /// whitespace is trimmed. The second tuple field reports whether any
    /// entry was normalized, so callers can rewrite storage.
    pub fn from_persisted<I, S>(values: I) -> (Self, bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = false;
        let mut items = Vec::new();
        for value in values {
            let raw = value.as_ref();
            match Item::parse(raw) {
                Ok(item) => {
                    normalized |= item.as_str() != raw;
                    items.push(item);
                }
                Err(_) => normalized = true,
            }
        }
        (Self { items }, normalized)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|item| item == text)
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item whose text equals `text`.
    ///
    /// Returns the removed item, or `None` when nothing matched.
    pub fn remove_first(&mut self, text: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item == text)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Snapshot of item texts in list order, as written to storage.
    pub fn to_strings(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ItemList;
    use crate::model::item::Item;

    fn item(text: &str) -> Item {
        Item::parse(text).unwrap()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = ItemList::new();
        list.push(item("eggs"));
        list.push(item("milk"));
        list.push(item("bread"));
        assert_eq!(list.to_strings(), vec!["eggs", "milk", "bread"]);
    }

    #[test]
    fn remove_first_only_removes_one_exact_match() {
        let mut list = ItemList::new();
        list.push(item("milk"));
        list.push(item("Milk"));
        list.push(item("milk"));

        let removed = list.remove_first("milk").expect("milk should be removed");
        assert_eq!(removed.as_str(), "milk");
        assert_eq!(list.to_strings(), vec!["Milk", "milk"]);
        assert!(list.remove_first("cheese").is_none());
    }

    #[test]
    fn contains_is_case_sensitive() {
        let mut list = ItemList::new();
        list.push(item("Milk"));
        assert!(list.contains("Milk"));
        assert!(!list.contains("milk"));
    }

    #[test]
    fn from_persisted_reports_normalization() {
        let (clean, changed) = ItemList::from_persisted(["milk", "eggs"]);
        assert!(!changed);
        assert_eq!(clean.len(), 2);

        let (dirty, changed) = ItemList::from_persisted([" milk ", "", "eggs"]);
        assert!(changed);
        assert_eq!(dirty.to_strings(), vec!["milk", "eggs"]);
    }
}
