//! Shared response handling for the api modules.
//!
//! Every backend failure is normalized into a plain message string: non-2xx
//! responses may carry a JSON body with a `detail` field; when they do, that
//! detail becomes the error, otherwise a fixed per-operation fallback is used.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Decode a successful response body, or normalize the failure.
pub async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Extract the error message from a non-success response.
pub async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<serde_json::Value>().await {
        Ok(body) => detail_message(&body, fallback),
        Err(_) => fallback.to_string(),
    }
}

fn detail_message(body: &serde_json::Value, fallback: &str) -> String {
    body.get("detail")
        .and_then(|detail| detail.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins_over_fallback() {
        let body = serde_json::json!({"detail": "Product NOT registered"});
        assert_eq!(
            detail_message(&body, "Failed to fetch products"),
            "Product NOT registered"
        );
    }

    #[test]
    fn missing_detail_uses_fallback() {
        let body = serde_json::json!({"message": "nope"});
        assert_eq!(
            detail_message(&body, "Failed to fetch products"),
            "Failed to fetch products"
        );
    }

    #[test]
    fn non_string_detail_uses_fallback() {
        let body = serde_json::json!({"detail": {"code": 42}});
        assert_eq!(detail_message(&body, "Failed to add to cart"), "Failed to add to cart");
    }
}
