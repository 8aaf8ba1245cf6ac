//! Central application state, provided to the whole app via context.
//!
//! The store owns every state slice — product list, cart snapshot,
//! deletability map, transient error, dialog state — and is the only writer.
//! Views read the signals and call the methods; api modules only return
//! values. After any mutation the cart and the deletability map are
//! re-fetched from the backend rather than derived locally.

use contracts::cart::Cart;
use contracts::product::{Product, ProductDraft};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::cart::api as cart_api;
use crate::cart::CartQuantityOp;
use crate::catalog::api as product_api;
use crate::catalog::blocked_delete_message;
use crate::catalog::deletability::{
    self, BackendChecks, CheckFailurePolicy, DeletabilityMap,
};
use crate::catalog::filter_products;

#[derive(Clone, Copy)]
pub struct AppStore {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    /// Single error slot: later failures overwrite earlier ones; only an
    /// explicit dismissal clears it.
    pub error: RwSignal<Option<String>>,
    pub search: RwSignal<String>,

    /// None until the first cart load settles.
    pub cart: RwSignal<Option<Cart>>,
    pub cart_open: RwSignal<bool>,
    pub deletability: RwSignal<DeletabilityMap>,

    pub selected: RwSignal<Option<Product>>,
    pub show_add: RwSignal<bool>,
    pub show_view: RwSignal<bool>,
    pub show_edit: RwSignal<bool>,
    pub show_delete: RwSignal<bool>,

    /// Bumped at the start of every deletability refresh; a refresh whose
    /// generation is no longer current discards its result instead of
    /// overwriting a newer map.
    refresh_generation: RwSignal<u64>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            cart: RwSignal::new(None),
            cart_open: RwSignal::new(false),
            deletability: RwSignal::new(DeletabilityMap::new()),
            selected: RwSignal::new(None),
            show_add: RwSignal::new(false),
            show_view: RwSignal::new(false),
            show_edit: RwSignal::new(false),
            show_delete: RwSignal::new(false),
            refresh_generation: RwSignal::new(0),
        }
    }

    /// Initial mount: fetch products and load the cart in parallel.
    pub fn init(&self) {
        let store = *self;
        spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(list) => store.products.set(list),
                Err(e) => store.error.set(Some(e)),
            }
            store.loading.set(false);
        });
        self.load_cart();
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    /// Products matching the current search text.
    pub fn filtered_products(&self) -> Vec<Product> {
        let query = self.search.get();
        self.products.with(|list| filter_products(list, &query))
    }

    pub fn is_deletable(&self, product_id: i64) -> bool {
        // Unknown products default to deletable until the resolver reports.
        self.deletability
            .with(|map| map.get(&product_id).copied().unwrap_or(true))
    }

    /// Reload the authoritative cart snapshot, then re-derive deletability.
    /// A missing cart is not an error: fall back to an empty snapshot.
    pub fn load_cart(&self) {
        let store = *self;
        spawn_local(async move {
            match cart_api::get_cart().await {
                Ok(cart) => {
                    store.cart.set(Some(cart));
                    store.refresh_deletability();
                }
                Err(_) => store.cart.set(Some(Cart::empty())),
            }
        });
    }

    /// Recompute the deletability map for the current product list. The map
    /// is replaced wholesale; a refresh overtaken by a newer one drops its
    /// result.
    pub fn refresh_deletability(&self) {
        let products = self.products.get_untracked();
        if products.is_empty() {
            return;
        }
        let generation = self.refresh_generation.get_untracked() + 1;
        self.refresh_generation.set(generation);
        let store = *self;
        spawn_local(async move {
            let map = deletability::refresh_all(
                &BackendChecks,
                &products,
                |ms| TimeoutFuture::new(ms),
                CheckFailurePolicy::AllowByDefault,
            )
            .await;
            if store.refresh_generation.get_untracked() == generation {
                store.deletability.set(map);
            } else {
                log::warn!(
                    "discarding stale deletability refresh (generation {})",
                    generation
                );
            }
        });
    }

    pub fn open_add(&self) {
        self.show_add.set(true);
    }

    pub fn open_view(&self, product: Product) {
        self.selected.set(Some(product));
        self.show_view.set(true);
    }

    pub fn open_edit(&self, product: Product) {
        self.selected.set(Some(product));
        self.show_edit.set(true);
    }

    pub fn add_product(&self, draft: ProductDraft) {
        let store = *self;
        spawn_local(async move {
            match product_api::add_product(&draft).await {
                Ok(created) => {
                    store.products.update(|list| list.push(created));
                    store.show_add.set(false);
                }
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn save_product(&self, product: Product) {
        let store = *self;
        spawn_local(async move {
            match product_api::update_product(&product).await {
                Ok(updated) => {
                    store.products.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    store.show_edit.set(false);
                }
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    /// Pre-check before opening the delete confirmation. A denial surfaces
    /// the blocking cart count and the dialog stays closed; a failed check
    /// fails open and defers enforcement to the backend's delete handler.
    pub fn request_delete(&self, product: Product) {
        let store = *self;
        spawn_local(async move {
            match product_api::can_delete(product.id).await {
                Ok(check) if !check.can_delete => {
                    store
                        .error
                        .set(Some(blocked_delete_message(&product.name, check.cart_count)));
                }
                Ok(_) => {
                    store.selected.set(Some(product));
                    store.show_delete.set(true);
                }
                Err(e) => {
                    log::warn!("delete permission check failed: {}", e);
                    store.selected.set(Some(product));
                    store.show_delete.set(true);
                }
            }
        });
    }

    pub fn confirm_delete(&self, product: Product) {
        let store = *self;
        spawn_local(async move {
            match product_api::delete_product(product.id).await {
                Ok(()) => {
                    store.products.update(|list| list.retain(|p| p.id != product.id));
                    store.show_delete.set(false);
                    store.refresh_deletability();
                }
                Err(e) => {
                    let message = if e.contains("shopping cart") {
                        e
                    } else {
                        format!("Failed to delete product: {}", e)
                    };
                    store.error.set(Some(message));
                }
            }
        });
    }

    pub fn add_to_cart(&self, product_id: i64) {
        let store = *self;
        spawn_local(async move {
            match cart_api::add_to_cart(product_id, 1).await {
                Ok(_) => store.load_cart(),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn remove_from_cart(&self, product_id: i64) {
        let store = *self;
        spawn_local(async move {
            match cart_api::remove_from_cart(product_id).await {
                Ok(_) => store.load_cart(),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn update_cart_quantity(&self, product_id: i64, quantity: i64) {
        match CartQuantityOp::for_quantity(quantity) {
            CartQuantityOp::Remove => self.remove_from_cart(product_id),
            CartQuantityOp::Update(quantity) => {
                let store = *self;
                spawn_local(async move {
                    match cart_api::update_cart_item(product_id, quantity).await {
                        Ok(_) => store.load_cart(),
                        Err(e) => store.error.set(Some(e)),
                    }
                });
            }
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
