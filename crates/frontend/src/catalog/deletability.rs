//! Per-product delete permissions, derived from the backend's view of which
//! products sit in somebody's cart.
//!
//! The whole map is recomputed after every product or cart mutation and then
//! swapped in wholesale; nothing mutates it incrementally. Queries run
//! strictly one after another with a short pause in between so a large
//! catalog does not hammer the backend. Both the query source and the pause
//! are injected, which keeps the loop testable without a network or timers.

use std::collections::HashMap;
use std::future::Future;

use contracts::product::{DeleteCheck, Product};

use crate::catalog::api;

/// Pause between consecutive can-delete queries, in milliseconds.
pub const CHECK_DELAY_MS: u32 = 50;

pub type DeletabilityMap = HashMap<i64, bool>;

/// What to record for a product whose permission check failed.
/// `AllowByDefault` never blocks the UI on a check outage; the backend still
/// enforces the rule at delete time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFailurePolicy {
    AllowByDefault,
    Block,
}

impl CheckFailurePolicy {
    fn entry_on_failure(self) -> bool {
        matches!(self, Self::AllowByDefault)
    }
}

pub trait DeleteCheckSource {
    async fn check(&self, product_id: i64) -> Result<DeleteCheck, String>;
}

/// Live source backed by `GET /products/{id}/can-delete`.
pub struct BackendChecks;

impl DeleteCheckSource for BackendChecks {
    async fn check(&self, product_id: i64) -> Result<DeleteCheck, String> {
        api::can_delete(product_id).await
    }
}

/// Compute deletability for every given product, sequentially, pausing
/// `CHECK_DELAY_MS` between queries (not after the last). A failed query is
/// logged and resolved by `policy` instead of failing the batch.
pub async fn refresh_all<S, D, F>(
    source: &S,
    products: &[Product],
    delay: D,
    policy: CheckFailurePolicy,
) -> DeletabilityMap
where
    S: DeleteCheckSource,
    D: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    let mut map = DeletabilityMap::with_capacity(products.len());
    for (index, product) in products.iter().enumerate() {
        match source.check(product.id).await {
            Ok(check) => {
                map.insert(product.id, check.can_delete);
            }
            Err(e) => {
                log::warn!(
                    "delete check failed for product {}: {}",
                    product.id,
                    e
                );
                map.insert(product.id, policy.entry_on_failure());
            }
        }
        if index + 1 < products.len() {
            delay(CHECK_DELAY_MS).await;
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FixedChecks {
        cart_counts: HashMap<i64, i64>,
        failing: Vec<i64>,
    }

    impl DeleteCheckSource for FixedChecks {
        async fn check(&self, product_id: i64) -> Result<DeleteCheck, String> {
            if self.failing.contains(&product_id) {
                return Err("connection refused".into());
            }
            let cart_count = self.cart_counts.get(&product_id).copied().unwrap_or(0);
            Ok(DeleteCheck {
                can_delete: cart_count == 0,
                cart_count,
            })
        }
    }

    fn products(ids: &[i64]) -> Vec<Product> {
        ids.iter()
            .map(|id| Product {
                id: *id,
                name: format!("Product {}", id),
                description: None,
                price: 1.0,
                stock: 1,
            })
            .collect()
    }

    fn no_delay(_ms: u32) -> std::future::Ready<()> {
        std::future::ready(())
    }

    #[test]
    fn deletable_iff_cart_count_is_zero() {
        let source = FixedChecks {
            cart_counts: HashMap::from([(1, 0), (2, 2), (3, 1)]),
            failing: Vec::new(),
        };
        let map = block_on(refresh_all(
            &source,
            &products(&[1, 2, 3]),
            no_delay,
            CheckFailurePolicy::AllowByDefault,
        ));
        assert_eq!(map.get(&1), Some(&true));
        assert_eq!(map.get(&2), Some(&false));
        assert_eq!(map.get(&3), Some(&false));
    }

    #[test]
    fn failed_check_allows_by_default() {
        let source = FixedChecks {
            cart_counts: HashMap::from([(2, 5)]),
            failing: vec![1],
        };
        let map = block_on(refresh_all(
            &source,
            &products(&[1, 2]),
            no_delay,
            CheckFailurePolicy::AllowByDefault,
        ));
        assert_eq!(map.get(&1), Some(&true));
        assert_eq!(map.get(&2), Some(&false));
    }

    #[test]
    fn failed_check_blocks_under_strict_policy() {
        let source = FixedChecks {
            cart_counts: HashMap::new(),
            failing: vec![1],
        };
        let map = block_on(refresh_all(
            &source,
            &products(&[1, 2]),
            no_delay,
            CheckFailurePolicy::Block,
        ));
        assert_eq!(map.get(&1), Some(&false));
        assert_eq!(map.get(&2), Some(&true));
    }

    #[test]
    fn pauses_between_queries_but_not_after_last() {
        let source = FixedChecks {
            cart_counts: HashMap::new(),
            failing: Vec::new(),
        };
        let calls = Rc::new(Cell::new(0u32));
        let calls_in_delay = calls.clone();
        let map = block_on(refresh_all(
            &source,
            &products(&[1, 2, 3]),
            move |ms| {
                assert_eq!(ms, CHECK_DELAY_MS);
                calls_in_delay.set(calls_in_delay.get() + 1);
                std::future::ready(())
            },
            CheckFailurePolicy::AllowByDefault,
        ));
        assert_eq!(map.len(), 3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn empty_product_list_yields_empty_map_without_delays() {
        let source = FixedChecks {
            cart_counts: HashMap::new(),
            failing: Vec::new(),
        };
        let calls = Rc::new(Cell::new(0u32));
        let calls_in_delay = calls.clone();
        let map = block_on(refresh_all(
            &source,
            &[],
            move |_| {
                calls_in_delay.set(calls_in_delay.get() + 1);
                std::future::ready(())
            },
            CheckFailurePolicy::AllowByDefault,
        ));
        assert!(map.is_empty());
        assert_eq!(calls.get(), 0);
    }
}
