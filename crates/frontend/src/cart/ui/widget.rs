use contracts::cart::CartItem;
use leptos::prelude::*;
use thaw::*;

use crate::store::AppStore;

/// Floating cart panel. Hidden until the first cart load settles; the badge
/// and totals always come from the server snapshot, never a local sum.
#[component]
pub fn CartWidget() -> impl IntoView {
    let store = expect_context::<AppStore>();

    view! {
        {move || store.cart.get().map(|cart| {
            let total_items = cart.total_items;
            view! {
                <div class=move || if store.cart_open.get() {
                    "cart-widget cart-widget--open"
                } else {
                    "cart-widget"
                }>
                    <button
                        class="cart-widget__toggle"
                        on:click=move |_| store.cart_open.update(|open| *open = !*open)
                    >
                        "Cart"
                        {(total_items > 0).then(|| view! {
                            <span class="cart-widget__badge">{total_items}</span>
                        })}
                    </button>

                    {move || store.cart_open.get().then(|| view! { <CartPanel /> })}
                </div>
            }
        })}
    }
}

#[component]
fn CartPanel() -> impl IntoView {
    let store = expect_context::<AppStore>();

    view! {
        <div class="cart-widget__panel">
            <h3 class="cart-widget__title">"Shopping Cart"</h3>

            {move || {
                let cart = store.cart.get().unwrap_or_else(contracts::cart::Cart::empty);
                if cart.items.is_empty() {
                    view! {
                        <div class="cart-widget__empty">"Your cart is empty"</div>
                    }.into_any()
                } else {
                    view! {
                        <>
                        <div class="cart-widget__items">
                            <For
                                each=move || store.cart.get().map(|c| c.items).unwrap_or_default()
                                key=|item| item.product_id
                                children=move |item: CartItem| {
                                    view! { <CartLine item=item /> }
                                }
                            />
                        </div>
                        <div class="cart-widget__summary">
                            <div class="cart-widget__summary-row">
                                <span>"Total Items:"</span>
                                <span>{cart.total_items}</span>
                            </div>
                            <div class="cart-widget__summary-row cart-widget__summary-row--total">
                                <span>"Total:"</span>
                                <span>{format!("${:.2}", cart.total_price)}</span>
                            </div>
                        </div>
                        </>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let store = expect_context::<AppStore>();

    let product_id = item.product_id;
    let quantity = item.quantity;

    view! {
        <div class="cart-widget__item">
            <div class="cart-widget__item-info">
                <p class="cart-widget__item-name">{item.product.name.clone()}</p>
                <p class="cart-widget__item-price">
                    {format!("${:.2} each", item.product.price)}
                </p>
            </div>
            <div class="cart-widget__item-controls">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        // The minus control floors at one; removal is explicit.
                        store.update_cart_quantity(product_id, (quantity - 1).max(1))
                    }
                >
                    "-"
                </Button>
                <span class="cart-widget__item-quantity">{quantity}</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| store.update_cart_quantity(product_id, quantity + 1)
                >
                    "+"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| store.remove_from_cart(product_id)
                >
                    "\u{00d7}"
                </Button>
            </div>
        </div>
    }
}
