//! Frontend Models
//!
//! Data structures matching the backend, plus the static category catalog.

use serde::{Deserialize, Serialize};

/// Shopping-list item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub completed: bool,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
}

/// A fixed category with icon used to group items
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Static category catalog, in display order
pub const CATEGORIES: [Category; 14] = [
    Category { id: "hortifruti", name: "Hortifruti", icon: "🥬" },
    Category { id: "laticinios", name: "Laticínios", icon: "🥛" },
    Category { id: "proteinas", name: "Proteínas", icon: "🥩" },
    Category { id: "graos", name: "Grãos e Cereais", icon: "🌾" },
    Category { id: "padaria", name: "Padaria", icon: "🥖" },
    Category { id: "enlatados", name: "Enlatados e Conservas", icon: "🥫" },
    Category { id: "condimentos", name: "Condimentos e Temperos", icon: "🧂" },
    Category { id: "bebidas", name: "Bebidas", icon: "🥤" },
    Category { id: "limpeza", name: "Produtos de Limpeza", icon: "🧹" },
    Category { id: "higiene", name: "Higiene Pessoal", icon: "🧴" },
    Category { id: "congelados", name: "Congelados", icon: "🧊" },
    Category { id: "petiscos", name: "Petiscos e Lanches", icon: "🍿" },
    Category { id: "mercearia", name: "Mercearia", icon: "🏪" },
    Category { id: "outros", name: "Outros", icon: "📦" },
];

/// Look up a category by id. Unknown ids are rendered blank, not an error.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_by_id() {
        let category = category_by_id("padaria").expect("known category");
        assert_eq!(category.name, "Padaria");
        assert_eq!(category.icon, "🥖");
    }

    #[test]
    fn test_unknown_category_is_none() {
        assert!(category_by_id("acougue").is_none());
        assert!(category_by_id("").is_none());
    }

    #[test]
    fn test_item_deserializes_without_details() {
        let item: Item = serde_json::from_str(
            r#"{"id":"1","name":"Leite","category":"laticinios","completed":false}"#,
        )
        .expect("deserialize");

        assert_eq!(item.name, "Leite");
        assert_eq!(item.price, None);
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn test_item_tolerates_extra_fields() {
        // Snapshots carry the store-assigned creation timestamp as well
        let item: Item = serde_json::from_str(
            r#"{"id":"1","name":"Pão","category":"padaria","completed":true,"price":2.0,"quantity":3.0,"created_at":1754500000000}"#,
        )
        .expect("deserialize");

        assert_eq!(item.price, Some(2.0));
    }
}
