use contracts::product::Product;
use leptos::prelude::*;
use thaw::*;

use crate::store::AppStore;

/// Delete confirmation. It only opens after the pre-check in
/// `AppStore::request_delete` allowed it (or failed open); the backend still
/// validates again on the actual delete call.
#[component]
pub fn DeleteProductDialog(product: Product) -> impl IntoView {
    let store = expect_context::<AppStore>();

    let prompt = format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        product.name
    );
    let product_delete = product.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| store.show_delete.set(false)>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Delete Product"</h2>
                </div>

                <div class="modal-body">
                    <p>{prompt}</p>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| store.show_delete.set(false)
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| store.confirm_delete(product_delete.clone())
                    >
                        "Delete Product"
                    </Button>
                </div>
            </div>
        </div>
    }
}
