use contracts::cart::{Cart, CartMutation};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::read_json;
use crate::shared::session::session_id;

/// Add a product to the session's cart.
pub async fn add_to_cart(product_id: i64, quantity: i64) -> Result<Cart, String> {
    let body = CartMutation {
        product_id,
        quantity,
        session_id: session_id(),
    };
    let response = Request::post(&api_url("/cart/add"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to add to cart").await
}

/// Fetch the session's cart snapshot.
pub async fn get_cart() -> Result<Cart, String> {
    let response = Request::get(&api_url(&format!("/cart/{}", session_id())))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to fetch cart").await
}

/// Remove a product from the session's cart.
pub async fn remove_from_cart(product_id: i64) -> Result<Cart, String> {
    let response = Request::delete(&api_url(&format!("/cart/{}/{}", session_id(), product_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to remove from cart").await
}

/// Set the quantity of a cart line. Callers resolve quantity <= 0 to a
/// removal before reaching this endpoint.
pub async fn update_cart_item(product_id: i64, quantity: i64) -> Result<Cart, String> {
    let body = CartMutation {
        product_id,
        quantity,
        session_id: session_id(),
    };
    let response = Request::put(&api_url("/cart/update"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Failed to update cart item").await
}
