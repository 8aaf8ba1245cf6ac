use leptos::prelude::*;

use crate::cart::ui::CartWidget;
use crate::catalog::ui::ProductListPage;
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppStore to the whole app via context.
    let store = AppStore::new();
    provide_context(store);

    store.init();

    // Every product-list change re-derives the deletability map.
    Effect::new(move |_| {
        let has_products = store.products.with(|list| !list.is_empty());
        if has_products {
            store.refresh_deletability();
        }
    });

    view! {
        <ProductListPage />
        <CartWidget />
    }
}
