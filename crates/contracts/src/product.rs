use serde::{Deserialize, Serialize};

/// Catalog product as returned by the backend. The id is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

/// Body for creating a product: everything but the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if self.price < 0.0 {
            return Err("Price must not be negative".into());
        }
        if self.stock < 0 {
            return Err("Stock must not be negative".into());
        }
        Ok(())
    }
}

/// Response of `GET /products/{id}/can-delete`. A product referenced by at
/// least one cart reports `can_delete: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCheck {
    pub can_delete: bool,
    pub cart_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_product() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Widget", "price": 9.99, "description": "A widget", "stock": 5}"#,
        )
        .unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn parses_product_without_description() {
        let product: Product =
            serde_json::from_str(r#"{"id": 2, "name": "Gadget", "price": 1.0}"#).unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = ProductDraft {
            name: "Widget".into(),
            description: Some("A widget".into()),
            price: 9.99,
            stock: 5,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Widget");
    }

    #[test]
    fn draft_validation() {
        let mut draft = ProductDraft {
            name: "Widget".into(),
            description: None,
            price: 9.99,
            stock: 5,
        };
        assert!(draft.validate().is_ok());

        draft.name = "   ".into();
        assert!(draft.validate().is_err());

        draft.name = "Widget".into();
        draft.price = -0.01;
        assert!(draft.validate().is_err());

        draft.price = 0.0;
        draft.stock = -1;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn parses_delete_check() {
        let check: DeleteCheck =
            serde_json::from_str(r#"{"can_delete": false, "cart_count": 2}"#).unwrap();
        assert!(!check.can_delete);
        assert_eq!(check.cart_count, 2);
    }
}
