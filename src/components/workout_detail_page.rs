//! Workout Detail Page

use leptos::prelude::*;

use crate::context::{use_app, Route, ToastKind};
use crate::data;
use crate::store::{self, use_session};

#[component]
pub fn WorkoutDetailPage(id: u32) -> impl IntoView {
    let ctx = use_app();
    let session = use_session();

    let Some(plan) = data::workout_plans().iter().find(|p| p.id == id) else {
        return view! {
            <div class="not-found">
                <h1>"Program not found"</h1>
                <button class="btn-secondary" on:click=move |_| ctx.navigate(Route::Workouts)>
                    "Back to programs"
                </button>
            </div>
        }
        .into_any();
    };

    let title = plan.title.clone();
    let on_start = move |_| {
        if store::session_is_logged_in(&session) {
            ctx.show_toast(
                ToastKind::Success,
                format!("{title} added to your training calendar"),
            );
        } else {
            ctx.show_toast(ToastKind::Error, "Sign in to start a program");
        }
    };

    view! {
        <div class="workout-detail-page">
            <button class="back-link" on:click=move |_| ctx.navigate(Route::Workouts)>
                "< All programs"
            </button>

            <header class="page-header">
                <span class="level-badge">{plan.level.clone()}</span>
                <h1>{plan.title.clone()}</h1>
                <p>{plan.description.clone()}</p>
                <p class="workout-meta">
                    {format!("{} weeks · {} sessions/week", plan.duration_weeks, plan.sessions_per_week)}
                </p>
            </header>

            <section class="plan-features">
                <h2>"What's inside"</h2>
                <ul class="feature-list">
                    {plan.features.iter().map(|feature| view! {
                        <li>{feature.clone()}</li>
                    }).collect_view()}
                </ul>
            </section>

            <button class="btn-primary" on:click=on_start>
                "Start this program"
            </button>
        </div>
    }
    .into_any()
}
