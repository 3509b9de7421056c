//! Blog Post Page
//!
//! Full article with its comment thread, or a not-found fallback for
//! unknown ids.

use leptos::prelude::*;

use crate::components::CommentThread;
use crate::context::{use_app, Route};
use crate::data;
use crate::markdown::render_markdown;

#[component]
pub fn BlogPostPage(id: u32) -> impl IntoView {
    let ctx = use_app();

    let Some(post) = data::blog_posts().iter().find(|p| p.id == id) else {
        return view! {
            <div class="not-found">
                <h1>"Article not found"</h1>
                <p>"This article may have been removed, or the link is wrong."</p>
                <button class="btn-secondary" on:click=move |_| ctx.navigate(Route::Blog)>
                    "Back to the blog"
                </button>
            </div>
        }
        .into_any();
    };

    let body = render_markdown(&post.content);

    view! {
        <article class="blog-post-page">
            <button class="back-link" on:click=move |_| ctx.navigate(Route::Blog)>
                "< All articles"
            </button>

            <header class="post-header">
                <span class="post-category">{post.category.clone()}</span>
                <h1>{post.title.clone()}</h1>
                <p class="post-byline">{format!("{} · {}", post.author, post.date)}</p>
                <div class="post-tags">
                    {post.tags.iter().map(|tag| view! {
                        <span class="tag">{format!("#{tag}")}</span>
                    }).collect_view()}
                </div>
            </header>

            <div class="post-body" inner_html=body></div>

            <CommentThread post_id=id />
        </article>
    }
    .into_any()
}
