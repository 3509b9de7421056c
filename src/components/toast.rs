//! Toast Banner Host

use leptos::prelude::*;

use crate::context::{use_app, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app();

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span>{toast.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.dismiss_toast()>
                        "Dismiss"
                    </button>
                </div>
            }
        })}
    }
}
