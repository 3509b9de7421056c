//! Global Search Overlay
//!
//! Free-text search across articles, workout plans, and products via
//! the mock API. Only the latest in-flight request may land, so a slow
//! earlier response never overwrites newer results.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app, Route};
use crate::models::{SearchHit, SearchKind};

#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = signal(String::new());
    let (hits, set_hits) = signal(Vec::<SearchHit>::new());
    let (searching, set_searching) = signal(false);
    // Monotonic token so stale responses are dropped
    let (request_seq, set_request_seq) = signal(0u32);

    Effect::new(move |_| {
        let q = query.get();
        let seq = request_seq.get_untracked() + 1;
        set_request_seq.set(seq);

        if q.trim().is_empty() {
            set_hits.set(Vec::new());
            set_searching.set(false);
            return;
        }
        set_searching.set(true);
        spawn_local(async move {
            match api::search_content(&q).await {
                Ok(results) => {
                    if request_seq.try_get_untracked() == Some(seq) {
                        set_hits.try_set(results);
                        set_searching.try_set(false);
                    }
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[SEARCH] failed: {err}").into());
                    set_searching.try_set(false);
                }
            }
        });
    });

    let open_hit = move |kind: SearchKind, id: u32| match kind {
        SearchKind::Post => ctx.navigate(Route::BlogPost(id)),
        SearchKind::Workout => ctx.navigate(Route::WorkoutDetail(id)),
        SearchKind::Product => ctx.navigate(Route::Store),
    };

    view! {
        <div class="search-overlay">
            <div class="search-panel">
                <div class="search-input-row">
                    <input
                        type="text"
                        placeholder="Search articles, workouts, gear..."
                        autofocus=true
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ctx.close_search();
                            }
                        }
                    />
                    <button class="search-close" on:click=move |_| ctx.close_search()>
                        "Close"
                    </button>
                </div>

                <Show when=move || searching.get()>
                    <div class="search-status">"Searching..."</div>
                </Show>

                <Show when=move || {
                    !searching.get() && hits.with(|h| h.is_empty()) && !query.with(|q| q.trim().is_empty())
                }>
                    <div class="search-status">{move || format!("No results for \"{}\"", query.get().trim())}</div>
                </Show>

                <div class="search-results">
                    <For
                        each=move || hits.get()
                        key=|hit| (hit.kind, hit.id)
                        children=move |hit| {
                            let kind = hit.kind;
                            let id = hit.id;
                            view! {
                                <button class="search-hit" on:click=move |_| open_hit(kind, id)>
                                    <span class="hit-kind">{kind.label()}</span>
                                    <span class="hit-title">{hit.title}</span>
                                    <span class="hit-subtitle">{hit.subtitle}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
