//! Comment Forms
//!
//! Top-level comment form and the inline reply form. Validation lives
//! in the thread state; these components only collect input and show
//! the outcome.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_app, ToastKind};
use crate::thread::{CommentDraft, ThreadState};

#[component]
pub fn CommentForm(thread: RwSignal<ThreadState>) -> impl IntoView {
    let ctx = use_app();
    let (author, set_author) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (body, set_body) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CommentDraft {
            author: author.get(),
            email: email.get(),
            body: body.get(),
        };
        match thread.try_update(|t| t.submit_comment(&draft)) {
            Some(Ok(_)) => {
                set_author.set(String::new());
                set_email.set(String::new());
                set_body.set(String::new());
                ctx.show_toast(ToastKind::Success, "Comment posted");
            }
            Some(Err(message)) => ctx.show_toast(ToastKind::Error, message),
            None => {}
        }
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            <h3>"Join the conversation"</h3>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || author.get()
                    on:input=move |ev| set_author.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email (never shown)"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <textarea
                placeholder="Share your thoughts..."
                prop:value=move || body.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_body.set(area.value());
                }
            ></textarea>
            <button type="submit" class="btn-primary">"Post comment"</button>
        </form>
    }
}

/// Inline form for replying to a comment (or to a named reply under it)
#[component]
pub fn ReplyForm(
    thread: RwSignal<ThreadState>,
    comment_id: u32,
    reply_to: Option<String>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let (author, set_author) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (body, set_body) = signal(String::new());

    let heading = match &reply_to {
        Some(name) => format!("Replying to {name}"),
        None => "Write a reply".to_string(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CommentDraft {
            author: author.get(),
            email: email.get(),
            body: body.get(),
        };
        let target = reply_to.clone();
        match thread.try_update(|t| t.submit_reply(comment_id, &draft, target)) {
            Some(Ok(_)) => {
                ctx.show_toast(ToastKind::Success, "Reply posted");
                on_done.run(());
            }
            Some(Err(message)) => ctx.show_toast(ToastKind::Error, message),
            None => {}
        }
    };

    view! {
        <form class="reply-form" on:submit=on_submit>
            <div class="reply-form-head">
                <span>{heading}</span>
                <button type="button" class="cancel-btn" on:click=move |_| on_done.run(())>
                    "Cancel"
                </button>
            </div>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || author.get()
                    on:input=move |ev| set_author.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <textarea
                placeholder="Your reply..."
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn-primary">"Post reply"</button>
        </form>
    }
}
