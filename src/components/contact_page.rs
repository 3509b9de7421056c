//! Contact Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app, ToastKind};
use crate::models::ContactMessage;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_app();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() {
            ctx.show_toast(ToastKind::Error, "Please enter your name");
            return;
        }
        if email.get().trim().is_empty() {
            ctx.show_toast(ToastKind::Error, "Please enter your email");
            return;
        }
        if message.get().trim().is_empty() {
            ctx.show_toast(ToastKind::Error, "Please write a message");
            return;
        }
        if sending.get() {
            return;
        }
        let payload = ContactMessage {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            message: message.get().trim().to_string(),
        };
        set_sending.set(true);
        spawn_local(async move {
            match api::send_contact(&payload).await {
                Ok(()) => {
                    set_name.try_set(String::new());
                    set_email.try_set(String::new());
                    set_message.try_set(String::new());
                    ctx.show_toast(ToastKind::Success, "Message sent. We'll get back to you soon.");
                }
                Err(err) => ctx.show_toast(ToastKind::Error, err.to_string()),
            }
            set_sending.try_set(false);
        });
    };

    view! {
        <div class="contact-page">
            <header class="page-header">
                <h1>"Get in touch"</h1>
                <p>"Questions about memberships, programs, or the store? We answer everything."</p>
            </header>

            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Your message..."
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}
