//! Store Page
//!
//! Product grid, cart summary, and the mock checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app, ToastKind};
use crate::data;
use crate::models::format_price;
use crate::store::{self, use_session};

#[component]
pub fn StorePage() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let (placing, set_placing) = signal(false);

    let on_checkout = move |_| {
        if !store::session_is_logged_in(&session) {
            ctx.show_toast(ToastKind::Error, "Sign in to check out");
            return;
        }
        if placing.get() {
            return;
        }
        let order = store::cart_order(&session, data::products());
        set_placing.set(true);
        spawn_local(async move {
            match api::place_order(&order).await {
                Ok(()) => {
                    store::cart_clear(&session);
                    ctx.show_toast(ToastKind::Success, "Order placed. Thanks for training with us!");
                }
                Err(err) => ctx.show_toast(ToastKind::Error, err.to_string()),
            }
            set_placing.try_set(false);
        });
    };

    view! {
        <div class="store-page">
            <header class="page-header">
                <h1>"The PulseFit Store"</h1>
                <p>"Gear that survives the gym bag."</p>
            </header>

            <div class="product-grid">
                {data::products().iter().map(|product| {
                    let id = product.id;
                    let name = product.name.clone();
                    view! {
                        <article class="product-card">
                            <span class="product-category">{product.category.clone()}</span>
                            <h2>{product.name.clone()}</h2>
                            <p>{product.description.clone()}</p>
                            <div class="product-footer">
                                <span class="price">{format_price(product.price_cents)}</span>
                                <button
                                    class="btn-primary"
                                    on:click=move |_| {
                                        store::cart_add(&session, id);
                                        ctx.show_toast(ToastKind::Success, format!("{name} added to cart"));
                                    }
                                >
                                    "Add to cart"
                                </button>
                            </div>
                        </article>
                    }
                }).collect_view()}
            </div>

            <Show when=move || (store::cart_count(&session) > 0)>
                <section class="cart-summary">
                    <h2>"Your cart"</h2>
                    {move || {
                        let order = store::cart_order(&session, data::products());
                        view! {
                            <ul class="cart-lines">
                                {order.lines.iter().map(|line| view! {
                                    <li>
                                        <span>{format!("{} × {}", line.quantity, line.name)}</span>
                                        <span>{format_price(line.price_cents * line.quantity)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                            <p class="cart-total">{format!("Total: {}", format_price(order.total_cents))}</p>
                        }
                    }}
                    <button class="btn-primary" on:click=on_checkout disabled=move || placing.get()>
                        {move || if placing.get() { "Placing order..." } else { "Checkout" }}
                    </button>
                </section>
            </Show>
        </div>
    }
}
