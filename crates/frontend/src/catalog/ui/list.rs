use contracts::product::Product;
use leptos::prelude::*;
use thaw::*;

use super::delete_dialog::DeleteProductDialog;
use super::details::{AddProductDialog, EditProductDialog, ProductDetailsDialog};
use crate::store::AppStore;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let store = expect_context::<AppStore>();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Product Management"</h1>
                    <Badge>
                        {move || store.products.with(|list| list.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Input
                        value=store.search
                        placeholder="Search products..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| store.open_add()
                    >
                        "Add Product"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || store.error.get().map(|e| view! {
                    <div class="alert alert--error">
                        <span>{e}</span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| store.dismiss_error()
                        >
                            "\u{00d7}"
                        </Button>
                    </div>
                })}

                {move || if store.loading.get() {
                    view! { <div class="page__loading">"Loading..."</div> }.into_any()
                } else {
                    view! { <ProductGrid /> }.into_any()
                }}

                {move || if store.show_add.get() {
                    view! { <AddProductDialog /> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || match (store.show_view.get(), store.selected.get()) {
                    (true, Some(product)) => view! {
                        <ProductDetailsDialog product=product />
                    }.into_any(),
                    _ => view! { <></> }.into_any(),
                }}

                {move || match (store.show_edit.get(), store.selected.get()) {
                    (true, Some(product)) => view! {
                        <EditProductDialog product=product />
                    }.into_any(),
                    _ => view! { <></> }.into_any(),
                }}

                {move || match (store.show_delete.get(), store.selected.get()) {
                    (true, Some(product)) => view! {
                        <DeleteProductDialog product=product />
                    }.into_any(),
                    _ => view! { <></> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let store = expect_context::<AppStore>();

    view! {
        <div class="product-grid">
            <For
                each=move || store.filtered_products()
                key=|product| product.id
                children=move |product: Product| {
                    view! { <ProductCard product=product /> }
                }
            />
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = expect_context::<AppStore>();

    let product_id = product.id;
    let stock = product.stock;
    let product_view = product.clone();
    let product_edit = product.clone();
    let product_delete = product.clone();

    let deletable = Signal::derive(move || store.is_deletable(product_id));
    let in_stock = stock > 0;

    view! {
        <div class="product-card">
            <h4 class="product-card__name">{product.name.clone()}</h4>
            <div class="product-card__description">
                {product.description.clone().unwrap_or_default()}
            </div>
            <div class="product-card__meta">
                <span class="product-card__stock">{format!("Stock: {}", stock)}</span>
                <span class="product-card__price">{format!("${:.2}", product.price)}</span>
            </div>
            <div class="product-card__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| store.open_view(product_view.clone())
                >
                    "View"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| store.open_edit(product_edit.clone())
                >
                    "Edit"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !deletable.get())
                    attr:title=move || if deletable.get() {
                        "Delete product".to_string()
                    } else {
                        "Cannot delete - product is in shopping cart".to_string()
                    }
                    on_click=move |_| {
                        if deletable.get_untracked() {
                            store.request_delete(product_delete.clone());
                        }
                    }
                >
                    "Delete"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !in_stock)
                    attr:title=move || if in_stock {
                        "Add to cart".to_string()
                    } else {
                        "Out of stock".to_string()
                    }
                    on_click=move |_| {
                        if in_stock {
                            store.add_to_cart(product_id);
                        }
                    }
                >
                    "Add to Cart"
                </Button>
            </div>
        </div>
    }
}
