use contracts::product::{DeleteCheck, Product, ProductDraft};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::{error_message, read_json};

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/products/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to fetch products").await
}

/// Create a new product; the backend assigns the id.
pub async fn add_product(draft: &ProductDraft) -> Result<Product, String> {
    let response = Request::post(&api_url("/products/"))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to add product").await
}

/// Update a product with the full modified record.
pub async fn update_product(product: &Product) -> Result<Product, String> {
    let response = Request::put(&api_url(&format!("/products/{}", product.id)))
        .json(product)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to update product").await
}

/// Delete a product. The backend rejects with a cart-conflict `detail` when
/// the product is still referenced by a cart.
pub async fn delete_product(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/products/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response, "Failed to delete product").await);
    }
    Ok(())
}

/// Ask the backend whether the product may currently be deleted.
pub async fn can_delete(id: i64) -> Result<DeleteCheck, String> {
    let response = Request::get(&api_url(&format!("/products/{}/can-delete", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to check delete permission").await
}
