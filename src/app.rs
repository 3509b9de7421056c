//! PulseFit App
//!
//! Root component: provides the session store and app context, then
//! switches the current page on the route signal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BlogPage, BlogPostPage, ContactPage, HomePage, NavBar, SearchOverlay, StorePage, ToastHost,
    WorkoutDetailPage, WorkoutsPage,
};
use crate::context::{AppContext, Route};
use crate::store::SessionState;

#[component]
pub fn App() -> impl IntoView {
    let session = Store::new(SessionState::default());
    provide_context(session);

    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <div class="app-shell">
            <NavBar />

            <main class="page">
                {move || match ctx.route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Blog => view! { <BlogPage /> }.into_any(),
                    Route::BlogPost(id) => view! { <BlogPostPage id=id /> }.into_any(),
                    Route::Workouts => view! { <WorkoutsPage /> }.into_any(),
                    Route::WorkoutDetail(id) => view! { <WorkoutDetailPage id=id /> }.into_any(),
                    Route::Store => view! { <StorePage /> }.into_any(),
                    Route::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>

            <Show when=move || ctx.search_open.get()>
                <SearchOverlay />
            </Show>

            <ToastHost />
        </div>
    }
}
