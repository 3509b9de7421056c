//! Home Page
//!
//! Hero, membership tiers, and the latest articles.

use leptos::prelude::*;

use crate::context::{use_app, Route, ToastKind};
use crate::data;
use crate::models::format_price;
use crate::store::{self, use_session, Language};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();

    let tagline = move || match store::session_language(&session) {
        Language::En => "Train with intent. Recover with purpose.",
        Language::Es => "Entrena con intención. Recupera con propósito.",
    };

    let join = move |plan_name: String| {
        if store::session_is_logged_in(&session) {
            ctx.show_toast(
                ToastKind::Success,
                format!("You're on the {plan_name} plan. Let's get to work."),
            );
        } else {
            ctx.show_toast(ToastKind::Error, "Sign in to start a membership");
        }
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"PulseFit"</h1>
                <p class="hero-tagline">{tagline}</p>
                <div class="hero-actions">
                    <button class="btn-primary" on:click=move |_| ctx.navigate(Route::Workouts)>
                        "Browse programs"
                    </button>
                    <button class="btn-secondary" on:click=move |_| ctx.navigate(Route::Blog)>
                        "Read the blog"
                    </button>
                </div>
            </section>

            <section class="plans">
                <h2>"Memberships"</h2>
                <div class="plan-grid">
                    {data::membership_plans().iter().map(|plan| {
                        let name = plan.name.clone();
                        let card_class = if plan.featured { "plan-card featured" } else { "plan-card" };
                        view! {
                            <div class=card_class>
                                <h3>{plan.name.clone()}</h3>
                                <p class="plan-price">
                                    {format_price(plan.price_cents)}
                                    <span class="plan-period">{format!("/{}", plan.period)}</span>
                                </p>
                                <ul class="plan-perks">
                                    {plan.perks.iter().map(|perk| view! { <li>{perk.clone()}</li> }).collect_view()}
                                </ul>
                                <button class="btn-primary" on:click=move |_| join(name.clone())>
                                    "Join"
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            <section class="latest-posts">
                <h2>"From the blog"</h2>
                <div class="post-row">
                    {data::blog_posts().iter().take(3).map(|post| {
                        let id = post.id;
                        view! {
                            <button class="post-teaser" on:click=move |_| ctx.navigate(Route::BlogPost(id))>
                                <span class="post-category">{post.category.clone()}</span>
                                <span class="post-title">{post.title.clone()}</span>
                                <span class="post-date">{post.date.clone()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
