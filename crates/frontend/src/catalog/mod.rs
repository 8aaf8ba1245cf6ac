pub mod api;
pub mod deletability;
pub mod ui;

use contracts::product::Product;

/// Case-insensitive substring filter over name and description. Pure and
/// synchronous; never touches the network.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&query)
                || product
                    .description
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
        })
        .cloned()
        .collect()
}

/// User-facing message for a delete blocked by cart references.
pub fn blocked_delete_message(name: &str, cart_count: i64) -> String {
    format!(
        "Cannot delete \"{}\" because it is currently in {} shopping cart(s). Please remove it from all carts first.",
        name, cart_count
    )
}
