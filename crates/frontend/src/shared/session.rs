//! Per-browser-session identity used to scope the shopping cart.
//!
//! The identifier lives in `sessionStorage`, so it is stable for one tab and
//! discarded when the tab closes. No two concurrent sessions share an id by
//! construction (timestamp plus random suffix).

use web_sys::window;

const SESSION_KEY: &str = "cart_session_id";
const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Return the persisted session identifier, generating and persisting a new
/// one on first use. If storage is unavailable a fresh id is returned without
/// persistence.
pub fn session_id() -> String {
    if let Some(storage) = session_storage() {
        if let Ok(Some(existing)) = storage.get_item(SESSION_KEY) {
            return existing;
        }
        let fresh = generate_session_id(js_sys::Date::now(), js_sys::Math::random);
        let _ = storage.set_item(SESSION_KEY, &fresh);
        return fresh;
    }
    generate_session_id(js_sys::Date::now(), js_sys::Math::random)
}

/// Build `session_{millis}_{suffix}` from an injected clock value and RNG
/// returning values in `[0, 1)`.
pub fn generate_session_id(now_millis: f64, mut rand: impl FnMut() -> f64) -> String {
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let index = ((rand() * SUFFIX_CHARSET.len() as f64) as usize).min(SUFFIX_CHARSET.len() - 1);
        suffix.push(SUFFIX_CHARSET[index] as char);
    }
    format!("session_{}_{}", now_millis as u64, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_expected_shape() {
        let id = generate_session_id(1700000000000.0, || 0.5);
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts[0], "session");
        assert_eq!(parts[1], "1700000000000");
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .bytes()
            .all(|b| SUFFIX_CHARSET.contains(&b)));
    }

    #[test]
    fn rng_extremes_stay_in_charset() {
        let low = generate_session_id(0.0, || 0.0);
        assert!(low.ends_with(&"0".repeat(SUFFIX_LEN)));

        // An RNG at the upper bound must not index past the charset.
        let high = generate_session_id(0.0, || 0.999_999_9);
        assert!(high.ends_with(&"z".repeat(SUFFIX_LEN)));
    }

    #[test]
    fn distinct_rng_sequences_give_distinct_suffixes() {
        let mut counter = 0u32;
        let a = generate_session_id(1.0, move || {
            counter += 1;
            (counter % 7) as f64 / 7.0
        });
        let b = generate_session_id(1.0, || 0.2);
        assert_ne!(a, b);
    }
}
