//! Workouts Page
//!
//! Filtered, paginated program grid.

use leptos::prelude::*;

use crate::components::Pagination;
use crate::context::{use_app, Route};
use crate::data;
use crate::list::{filter_items, page_count, page_slice, PagedQuery, PAGE_SIZE};
use crate::models::WorkoutPlan;

fn level_class(level: &str) -> &'static str {
    match level {
        "Beginner" => "level-badge beginner",
        "Intermediate" => "level-badge intermediate",
        _ => "level-badge advanced",
    }
}

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let ctx = use_app();
    let paged = RwSignal::new(PagedQuery::new());

    let filtered = Memo::new(move |_| {
        paged.with(|p| filter_items(data::workout_plans(), p.query()))
    });
    let total_pages = Memo::new(move |_| filtered.with(|f| page_count(f.len(), PAGE_SIZE)));
    let page_items = Memo::new(move |_| {
        let page = paged.with(|p| p.page());
        filtered.with(|f| page_slice(f, page, PAGE_SIZE))
    });

    view! {
        <div class="workouts-page">
            <header class="page-header">
                <h1>"Training Programs"</h1>
                <p>"Pick a program that matches where you are, not where you wish you were."</p>
                <input
                    type="text"
                    class="list-search"
                    placeholder="Search programs..."
                    prop:value=move || paged.with(|p| p.query().to_string())
                    on:input=move |ev| paged.update(|p| p.set_query(event_target_value(&ev)))
                />
            </header>

            <Show when=move || {
                page_items.with(|items| items.is_empty()) && !paged.with(|p| p.query().trim().is_empty())
            }>
                <div class="empty-state">
                    {move || format!("No programs match \"{}\"", paged.with(|p| p.query().trim().to_string()))}
                </div>
            </Show>

            <div class="plan-grid">
                <For
                    each=move || page_items.get()
                    key=|plan| plan.id
                    children=move |plan: WorkoutPlan| {
                        let id = plan.id;
                        view! {
                            <article class="workout-card">
                                <span class=level_class(&plan.level)>{plan.level.clone()}</span>
                                <h2>{plan.title}</h2>
                                <p>{plan.description}</p>
                                <p class="workout-meta">
                                    {format!("{} weeks · {} sessions/week", plan.duration_weeks, plan.sessions_per_week)}
                                </p>
                                <ul class="feature-list">
                                    {plan.features.iter().map(|feature| view! {
                                        <li>{feature.clone()}</li>
                                    }).collect_view()}
                                </ul>
                                <button class="btn-primary" on:click=move |_| ctx.navigate(Route::WorkoutDetail(id))>
                                    "View program"
                                </button>
                            </article>
                        }
                    }
                />
            </div>

            <Pagination paged=paged total_pages=total_pages />
        </div>
    }
}
