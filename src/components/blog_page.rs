//! Blog Page
//!
//! Free-text filtered, paginated article grid.

use leptos::prelude::*;

use crate::components::Pagination;
use crate::context::{use_app, Route};
use crate::data;
use crate::list::{filter_items, page_count, page_slice, PagedQuery, PAGE_SIZE};
use crate::markdown::render_markdown_inline;
use crate::models::BlogPost;

#[component]
pub fn BlogPage() -> impl IntoView {
    let ctx = use_app();
    let paged = RwSignal::new(PagedQuery::new());

    let filtered = Memo::new(move |_| {
        paged.with(|p| filter_items(data::blog_posts(), p.query()))
    });
    let total_pages = Memo::new(move |_| filtered.with(|f| page_count(f.len(), PAGE_SIZE)));
    let page_items = Memo::new(move |_| {
        let page = paged.with(|p| p.page());
        filtered.with(|f| page_slice(f, page, PAGE_SIZE))
    });

    view! {
        <div class="blog-page">
            <header class="page-header">
                <h1>"The PulseFit Blog"</h1>
                <p>"Training, nutrition, and recovery. Written by coaches, not algorithms."</p>
                <input
                    type="text"
                    class="list-search"
                    placeholder="Search articles..."
                    prop:value=move || paged.with(|p| p.query().to_string())
                    on:input=move |ev| paged.update(|p| p.set_query(event_target_value(&ev)))
                />
            </header>

            <Show when=move || {
                page_items.with(|items| items.is_empty()) && !paged.with(|p| p.query().trim().is_empty())
            }>
                <div class="empty-state">
                    {move || format!("No articles match \"{}\"", paged.with(|p| p.query().trim().to_string()))}
                </div>
            </Show>

            <div class="post-grid">
                <For
                    each=move || page_items.get()
                    key=|post| post.id
                    children=move |post: BlogPost| {
                        let id = post.id;
                        let excerpt = render_markdown_inline(&post.excerpt);
                        view! {
                            <article class="post-card">
                                <span class="post-category">{post.category}</span>
                                <h2 on:click=move |_| ctx.navigate(Route::BlogPost(id))>{post.title}</h2>
                                <p class="post-excerpt" inner_html=excerpt></p>
                                <div class="post-tags">
                                    {post.tags.iter().map(|tag| view! {
                                        <span class="tag">{format!("#{tag}")}</span>
                                    }).collect_view()}
                                </div>
                                <div class="post-footer">
                                    <span class="post-byline">{format!("{} · {}", post.author, post.date)}</span>
                                    <button class="read-more" on:click=move |_| ctx.navigate(Route::BlogPost(id))>
                                        "Read more"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Pagination paged=paged total_pages=total_pages />
        </div>
    }
}
