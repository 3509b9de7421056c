//! Top Navigation Bar
//!
//! Brand, page links, global search trigger, language toggle, cart
//! badge, and the mock sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app, Route, ToastKind};
use crate::store::{self, use_session};

const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("Blog", Route::Blog),
    ("Workouts", Route::Workouts),
    ("Store", Route::Store),
    ("Contact", Route::Contact),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let (signing_in, set_signing_in) = signal(false);

    let on_account = move |_| {
        if store::session_is_logged_in(&session) {
            store::session_logout(&session);
            ctx.show_toast(ToastKind::Success, "Signed out");
            return;
        }
        if signing_in.get() {
            return;
        }
        set_signing_in.set(true);
        spawn_local(async move {
            match api::sign_in().await {
                Ok(name) => {
                    store::session_login(&session, name.clone());
                    ctx.show_toast(ToastKind::Success, format!("Welcome back, {name}"));
                }
                Err(err) => ctx.show_toast(ToastKind::Error, err.to_string()),
            }
            set_signing_in.try_set(false);
        });
    };

    view! {
        <header class="nav-bar">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Home)>
                "PulseFit"
            </button>

            <nav class="nav-links">
                {NAV_LINKS.iter().map(|(label, route)| {
                    let route = *route;
                    view! {
                        <button
                            class=move || {
                                if ctx.route.get().section() == route { "nav-link active" } else { "nav-link" }
                            }
                            on:click=move |_| ctx.navigate(route)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="nav-actions">
                <button class="nav-icon" title="Search" on:click=move |_| ctx.open_search()>
                    "Search"
                </button>
                <button class="nav-icon" title="Language" on:click=move |_| store::session_toggle_language(&session)>
                    {move || store::session_language(&session).code()}
                </button>
                <button class="nav-icon cart" title="Cart" on:click=move |_| ctx.navigate(Route::Store)>
                    "Cart"
                    {move || {
                        let count = store::cart_count(&session);
                        (count > 0).then(|| view! { <span class="cart-badge">{count}</span> })
                    }}
                </button>
                <button class="nav-account" on:click=on_account disabled=move || signing_in.get()>
                    {move || {
                        if signing_in.get() {
                            "Signing in...".to_string()
                        } else if store::session_is_logged_in(&session) {
                            format!("Sign out ({})", store::session_member_name(&session))
                        } else {
                            "Sign in".to_string()
                        }
                    }}
                </button>
            </div>
        </header>
    }
}
