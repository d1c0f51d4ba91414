//! Derived Views
//!
//! Pure helpers computing the visible subset and the purchase total.
//! Recomputed on every relevant state change via memos in the app root.

use crate::models::Item;

/// Keep an item iff its name contains the search term case-insensitively
/// and the category filter is empty or equals its category.
pub fn visible_items(items: &[Item], search_term: &str, category_filter: &str) -> Vec<Item> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                && (category_filter.is_empty() || item.category == category_filter)
        })
        .cloned()
        .collect()
}

/// An item counts toward the total once it is purchased and both details
/// are set and nonzero. A stored 0 is treated the same as absent.
fn counts_toward_total(item: &Item) -> bool {
    item.completed
        && item.price.is_some_and(|price| price != 0.0)
        && item.quantity.is_some_and(|quantity| quantity != 0.0)
}

/// Sum of `price * quantity` over the purchased items with details set
pub fn purchase_total(items: &[Item]) -> f64 {
    items
        .iter()
        .filter(|item| counts_toward_total(item))
        .map(|item| item.price.unwrap_or(0.0) * item.quantity.unwrap_or(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_item(
        name: &str,
        category: &str,
        completed: bool,
        price: Option<f64>,
        quantity: Option<f64>,
    ) -> Item {
        Item {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            completed,
            price,
            quantity,
        }
    }

    fn scenario() -> Vec<Item> {
        vec![
            make_item("Milk", "laticinios", true, Some(5.0), Some(2.0)),
            make_item("Bread", "padaria", false, None, None),
        ]
    }

    #[test]
    fn test_filter_matches_name_case_insensitively() {
        let items = scenario();
        let visible = visible_items(&items, "mi", "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Milk");

        let visible = visible_items(&items, "MILK", "");
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_filter_by_category() {
        let items = scenario();
        let visible = visible_items(&items, "", "padaria");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bread");
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let items = scenario();
        assert_eq!(visible_items(&items, "", "").len(), 2);
    }

    #[test]
    fn test_filter_combines_term_and_category() {
        let items = scenario();
        assert!(visible_items(&items, "mi", "padaria").is_empty());
        assert_eq!(visible_items(&items, "br", "padaria").len(), 1);
    }

    #[test]
    fn test_total_for_scenario() {
        let total = purchase_total(&scenario());
        assert_eq!(format!("{:.2}", total), "10.00");
    }

    #[test]
    fn test_total_is_invariant_under_reordering() {
        let mut items = vec![
            make_item("Milk", "laticinios", true, Some(5.0), Some(2.0)),
            make_item("Cheese", "laticinios", true, Some(3.5), Some(1.0)),
            make_item("Bread", "padaria", false, Some(9.9), Some(9.0)),
        ];
        let forward = purchase_total(&items);
        items.reverse();
        assert_eq!(purchase_total(&items), forward);
        assert_eq!(format!("{:.2}", forward), "13.50");
    }

    #[test]
    fn test_pending_items_do_not_count() {
        let items = vec![make_item("Bread", "padaria", false, Some(9.9), Some(9.0))];
        assert_eq!(purchase_total(&items), 0.0);
    }

    #[test]
    fn test_zero_details_are_treated_as_unset() {
        let items = vec![
            make_item("Milk", "laticinios", true, Some(0.0), Some(2.0)),
            make_item("Cheese", "laticinios", true, Some(3.0), Some(0.0)),
            make_item("Butter", "laticinios", true, Some(3.0), None),
        ];
        assert_eq!(purchase_total(&items), 0.0);
    }
}
