use contracts::product::{Product, ProductDraft};
use leptos::prelude::*;
use thaw::*;

use crate::store::AppStore;

/// Modal form for creating a product. Submission with a missing required
/// field or an unparsable number is silently ignored; domain validation
/// failures are shown inside the dialog.
#[component]
pub fn AddProductDialog() -> impl IntoView {
    let store = expect_context::<AppStore>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let on_submit = move |_| {
        let name_value = name.get_untracked();
        let description_value = description.get_untracked();
        let price_value = price.get_untracked();
        let stock_value = stock.get_untracked();

        if name_value.trim().is_empty()
            || description_value.trim().is_empty()
            || price_value.trim().is_empty()
            || stock_value.trim().is_empty()
        {
            return;
        }
        let (price_parsed, stock_parsed) =
            match (price_value.trim().parse::<f64>(), stock_value.trim().parse::<i64>()) {
                (Ok(p), Ok(s)) => (p, s),
                _ => return,
            };

        let draft = ProductDraft {
            name: name_value,
            description: Some(description_value),
            price: price_parsed,
            stock: stock_parsed,
        };
        if let Err(e) = draft.validate() {
            set_form_error.set(Some(e));
            return;
        }
        store.add_product(draft);
    };

    view! {
        <div class="modal-overlay" on:click=move |_| store.show_add.set(false)>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Add New Product"</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| store.show_add.set(false)
                    >
                        "\u{00d7}"
                    </Button>
                </div>

                <div class="modal-body">
                    {move || form_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Product Name"</Label>
                        <Input value=name placeholder="Enter product name" />
                    </div>
                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Input value=description placeholder="Enter product description" />
                    </div>
                    <div class="form__group">
                        <Label>"Price ($)"</Label>
                        <Input value=price placeholder="0.00" />
                    </div>
                    <div class="form__group">
                        <Label>"Stock"</Label>
                        <Input value=stock placeholder="0" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                    >
                        "Add Product"
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Read-only product details.
#[component]
pub fn ProductDetailsDialog(product: Product) -> impl IntoView {
    let store = expect_context::<AppStore>();

    view! {
        <div class="modal-overlay" on:click=move |_| store.show_view.set(false)>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{product.name.clone()}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| store.show_view.set(false)
                    >
                        "\u{00d7}"
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Description"</Label>
                        <p>{product.description.clone().unwrap_or_default()}</p>
                    </div>
                    <div class="form__group">
                        <Label>"Price"</Label>
                        <p>{format!("${:.2}", product.price)}</p>
                    </div>
                    <div class="form__group">
                        <Label>"Stock"</Label>
                        <p>{product.stock.to_string()}</p>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| store.show_view.set(false)
                    >
                        "Close"
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Modal form for editing a product; submits the full modified record.
#[component]
pub fn EditProductDialog(product: Product) -> impl IntoView {
    let store = expect_context::<AppStore>();

    let product_id = product.id;
    let name = RwSignal::new(product.name.clone());
    let description = RwSignal::new(product.description.clone().unwrap_or_default());
    let price = RwSignal::new(format!("{}", product.price));
    let stock = RwSignal::new(product.stock.to_string());

    let title = format!("Edit: {}", product.name);

    let on_save = move |_| {
        let name_value = name.get_untracked();
        let price_value = price.get_untracked();
        let stock_value = stock.get_untracked();

        if name_value.trim().is_empty() || price_value.trim().is_empty() || stock_value.trim().is_empty() {
            return;
        }
        let (price_parsed, stock_parsed) =
            match (price_value.trim().parse::<f64>(), stock_value.trim().parse::<i64>()) {
                (Ok(p), Ok(s)) => (p, s),
                _ => return,
            };

        let description_value = description.get_untracked();
        store.save_product(Product {
            id: product_id,
            name: name_value,
            description: if description_value.trim().is_empty() {
                None
            } else {
                Some(description_value)
            },
            price: price_parsed,
            stock: stock_parsed,
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| store.show_edit.set(false)>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| store.show_edit.set(false)
                    >
                        "\u{00d7}"
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Product Name"</Label>
                        <Input value=name />
                    </div>
                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Input value=description />
                    </div>
                    <div class="form__group">
                        <Label>"Price ($)"</Label>
                        <Input value=price />
                    </div>
                    <div class="form__group">
                        <Label>"Stock"</Label>
                        <Input value=stock />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| store.show_edit.set(false)
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                    >
                        "Save"
                    </Button>
                </div>
            </div>
        </div>
    }
}
