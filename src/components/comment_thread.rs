//! Comment Thread
//!
//! Infinite-scrolling comment section for a blog post. Batches of the
//! feed are paged in when the sentinel under the list becomes visible;
//! new comments and replies are inserted locally.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_lazylist::{use_infinite_scroll, SentinelControl};

use crate::api;
use crate::components::{CommentForm, ReplyForm};
use crate::models::Comment;
use crate::thread::{ThreadState, COLLAPSED_REPLIES, COMMENT_BATCH};

/// Which comment a reply form is open under, and whom it answers
#[derive(Clone, Debug, PartialEq)]
struct ReplyTarget {
    comment_id: u32,
    reply_to: Option<String>,
}

#[component]
pub fn CommentThread(post_id: u32) -> impl IntoView {
    let thread = RwSignal::new(ThreadState::new());
    let sentinel = NodeRef::<Div>::new();
    let (reply_target, set_reply_target) = signal(None::<ReplyTarget>);

    use_infinite_scroll(sentinel, move || {
        let Some(offset) = thread.try_update(|t| t.begin_load()).flatten() else {
            // Nothing to start: either a load is in flight or the feed
            // is exhausted, in which case we can stop watching.
            let exhausted = thread.try_with(|t| !t.has_more()).unwrap_or(true);
            return if exhausted {
                SentinelControl::Disconnect
            } else {
                SentinelControl::Continue
            };
        };
        spawn_local(async move {
            match api::fetch_comment_page(post_id, offset, COMMENT_BATCH).await {
                Ok(page) => {
                    thread.try_update(|t| t.complete_load(page));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[THREAD] load failed: {err}").into());
                    thread.try_update(|t| t.fail_load());
                }
            }
        });
        SentinelControl::Continue
    });

    view! {
        <section class="comment-section">
            <h2>{move || format!("Comments ({})", thread.with(|t| t.displayed_len()))}</h2>

            <CommentForm thread=thread />

            <div class="comment-list">
                <For
                    each=move || thread.with(|t| t.displayed())
                    key=|comment| (comment.id, comment.replies.len())
                    children=move |comment: Comment| {
                        let id = comment.id;
                        let reply_count = comment.replies.len();
                        let visible = {
                            let comment = comment.clone();
                            move || thread.with(|t| t.visible_replies(&comment).to_vec())
                        };
                        view! {
                            <div class="comment">
                                <div class="avatar">{comment.initials.clone()}</div>
                                <div class="comment-body">
                                    <div class="comment-head">
                                        <span class="comment-author">{comment.author.clone()}</span>
                                        <span class="comment-date">{comment.date.clone()}</span>
                                    </div>
                                    <p>{comment.content.clone()}</p>
                                    <div class="comment-actions">
                                        <span class="likes">{format!("{} likes", comment.likes)}</span>
                                        <button
                                            class="reply-btn"
                                            on:click=move |_| set_reply_target.set(Some(ReplyTarget {
                                                comment_id: id,
                                                reply_to: None,
                                            }))
                                        >
                                            "Reply"
                                        </button>
                                    </div>

                                    <div class="reply-list">
                                        <For
                                            each=visible
                                            key=|reply| reply.id
                                            children=move |reply| {
                                                let answered = reply.reply_to.clone();
                                                let author_for_target = reply.author.clone();
                                                view! {
                                                    <div class="reply">
                                                        <div class="reply-head">
                                                            <span class="comment-author">{reply.author.clone()}</span>
                                                            <span class="comment-date">{reply.date.clone()}</span>
                                                        </div>
                                                        {answered.map(|name| view! {
                                                            <span class="reply-to">{format!("@{name}")}</span>
                                                        })}
                                                        <p>{reply.content.clone()}</p>
                                                        <div class="comment-actions">
                                                            <span class="likes">{format!("{} likes", reply.likes)}</span>
                                                            <button
                                                                class="reply-btn"
                                                                on:click=move |_| set_reply_target.set(Some(ReplyTarget {
                                                                    comment_id: id,
                                                                    reply_to: Some(author_for_target.clone()),
                                                                }))
                                                            >
                                                                "Reply"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>

                                    <Show when=move || (reply_count > COLLAPSED_REPLIES)>
                                        <button
                                            class="toggle-replies"
                                            on:click=move |_| thread.update(|t| t.toggle_replies(id))
                                        >
                                            {move || {
                                                if thread.with(|t| t.replies_expanded(id)) {
                                                    "Show fewer replies".to_string()
                                                } else {
                                                    format!("View all {reply_count} replies")
                                                }
                                            }}
                                        </button>
                                    </Show>

                                    {move || {
                                        reply_target
                                            .get()
                                            .filter(|target| target.comment_id == id)
                                            .map(|target| view! {
                                                <ReplyForm
                                                    thread=thread
                                                    comment_id=id
                                                    reply_to=target.reply_to
                                                    on_done=move |_| set_reply_target.set(None)
                                                />
                                            })
                                    }}
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="comment-sentinel" node_ref=sentinel>
                <Show when=move || thread.with(|t| t.is_loading())>
                    <div class="loading">"Loading comments..."</div>
                </Show>
                <Show when=move || thread.with(|t| !t.has_more() && !t.is_loading())>
                    <div class="thread-end">"You're all caught up."</div>
                </Show>
            </div>
        </section>
    }
}
