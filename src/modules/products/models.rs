use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Menu category, stored as an upper-case string code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Lanche,
    Bebida,
    Acompanhamento,
}

/// Menu product persisted in the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name shown on the menu
    pub name: String,
    /// Free-text description, searchable together with the name
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Menu category the product belongs to
    pub category: Category,
    #[serde(rename = "createdDate")]
    pub created_date: DateTime,
    #[serde(rename = "updatedDate")]
    pub updated_date: DateTime,
}

/// The literal menu the collection starts with.
///
/// Timestamps are stamped at call time, matching insert-time semantics.
pub fn seed_products() -> Vec<Product> {
    let now = DateTime::now();

    vec![
        Product {
            id: "PROD-001".to_string(),
            name: "Hamburger Clássico".to_string(),
            description: "Hamburger com carne, alface, tomate e queijo".to_string(),
            price: 25.00,
            category: Category::Lanche,
            created_date: now,
            updated_date: now,
        },
        Product {
            id: "PROD-002".to_string(),
            name: "Coca-Cola 350ml".to_string(),
            description: "Refrigerante Coca-Cola lata 350ml".to_string(),
            price: 5.50,
            category: Category::Bebida,
            created_date: now,
            updated_date: now,
        },
        Product {
            id: "PROD-003".to_string(),
            name: "Batata Frita".to_string(),
            description: "Porção de batata frita crocante".to_string(),
            price: 12.00,
            category: Category::Acompanhamento,
            created_date: now,
            updated_date: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn seed_holds_three_distinct_products() {
        let products = seed_products();
        assert_eq!(products.len(), 3);

        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids, vec!["PROD-001", "PROD-002", "PROD-003"]);
    }

    #[test]
    fn products_serialize_with_store_field_names() {
        let product = &seed_products()[0];
        let document = bson::to_document(product).unwrap();

        assert_eq!(document.get_str("_id").unwrap(), "PROD-001");
        assert_eq!(document.get_str("name").unwrap(), "Hamburger Clássico");
        assert_eq!(document.get_f64("price").unwrap(), 25.00);
        assert_eq!(document.get_str("category").unwrap(), "LANCHE");
        assert!(document.get_datetime("createdDate").is_ok());
        assert!(document.get_datetime("updatedDate").is_ok());
    }

    #[test]
    fn category_codes_match_the_store_enumeration() {
        let products = seed_products();
        let codes: Vec<_> = products
            .iter()
            .map(|p| {
                bson::to_document(p)
                    .unwrap()
                    .get_str("category")
                    .unwrap()
                    .to_string()
            })
            .collect();

        assert_eq!(codes, vec!["LANCHE", "BEBIDA", "ACOMPANHAMENTO"]);
    }

    #[test]
    fn exactly_one_product_is_a_drink() {
        let products = seed_products();
        let drinks: Vec<_> = products
            .iter()
            .filter(|p| p.category == Category::Bebida)
            .collect();

        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id, "PROD-002");
    }

    #[test]
    fn batata_appears_only_in_the_side_dish() {
        let products = seed_products();
        let matches: Vec<_> = products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains("batata")
                    || p.description.to_lowercase().contains("batata")
            })
            .collect();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "PROD-003");
    }
}
