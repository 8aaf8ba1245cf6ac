use serde::{Deserialize, Serialize};

/// Tolerance for comparing server-computed money totals against a local sum.
pub const PRICE_EPSILON: f64 = 0.005;

/// Product snapshot embedded in a cart item for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemProduct {
    pub name: String,
    pub price: f64,
}

/// One cart line. Quantity is always >= 1; a line reaching zero is removed
/// by the backend, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub product: CartItemProduct,
    pub quantity: i64,
}

/// Server-computed cart snapshot. The aggregates are authoritative: after a
/// mutation the client re-fetches the whole snapshot instead of deriving
/// totals from stale items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_items: i64,
    pub total_price: f64,
}

impl Cart {
    /// Fallback snapshot used when no cart exists yet for the session.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: 0.0,
        }
    }

    pub fn computed_total_items(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn computed_total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.quantity as f64 * item.product.price)
            .sum()
    }

    /// True when the server aggregates match what the items imply.
    pub fn totals_consistent(&self) -> bool {
        self.total_items == self.computed_total_items()
            && (self.total_price - self.computed_total_price()).abs() < PRICE_EPSILON
    }
}

/// Body for `POST /cart/add` and `PUT /cart/update`. Every cart mutation is
/// scoped by the caller's session identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartMutation {
    pub product_id: i64,
    pub quantity: i64,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_cart() -> Cart {
        Cart {
            items: vec![CartItem {
                product_id: 1,
                product: CartItemProduct {
                    name: "Widget".into(),
                    price: 9.99,
                },
                quantity: 1,
            }],
            total_items: 1,
            total_price: 9.99,
        }
    }

    #[test]
    fn empty_cart_has_zero_aggregates() {
        let cart = Cart::empty();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_price, 0.0);
        assert!(cart.totals_consistent());
    }

    #[test]
    fn single_widget_totals() {
        let cart = widget_cart();
        assert_eq!(cart.computed_total_items(), 1);
        assert!((cart.computed_total_price() - 9.99).abs() < PRICE_EPSILON);
        assert!(cart.totals_consistent());
    }

    #[test]
    fn mixed_quantities_sum_up() {
        let mut cart = widget_cart();
        cart.items.push(CartItem {
            product_id: 2,
            product: CartItemProduct {
                name: "Gadget".into(),
                price: 2.50,
            },
            quantity: 3,
        });
        cart.total_items = 4;
        cart.total_price = 9.99 + 3.0 * 2.50;
        assert!(cart.totals_consistent());
    }

    #[test]
    fn stale_aggregates_are_detected() {
        let mut cart = widget_cart();
        cart.total_items = 2;
        assert!(!cart.totals_consistent());

        let mut cart = widget_cart();
        cart.total_price = 19.98;
        assert!(!cart.totals_consistent());
    }

    #[test]
    fn parses_backend_cart() {
        let cart: Cart = serde_json::from_str(
            r#"{
                "items": [
                    {"product_id": 1, "product": {"name": "Widget", "price": 9.99}, "quantity": 2}
                ],
                "total_items": 2,
                "total_price": 19.98
            }"#,
        )
        .unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert!(cart.totals_consistent());
    }

    #[test]
    fn mutation_carries_session_scope() {
        let mutation = CartMutation {
            product_id: 1,
            quantity: 1,
            session_id: "session_1700000000000_abc123xyz".into(),
        };
        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json["product_id"], 1);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["session_id"], "session_1700000000000_abc123xyz");
    }
}
