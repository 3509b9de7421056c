//! Pagination Controls

use leptos::prelude::*;

use crate::list::PagedQuery;

/// Page links for a [`PagedQuery`]-driven list. Previous/next disable
/// at the bounds; hidden entirely when there is a single page.
#[component]
pub fn Pagination(
    paged: RwSignal<PagedQuery>,
    #[prop(into)] total_pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || (total_pages.get() > 1)>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || paged.with(|p| p.page()) == 1
                    on:click=move |_| {
                        let total = total_pages.get_untracked();
                        paged.update(|p| p.prev(total));
                    }
                >
                    "Previous"
                </button>

                {move || (1..=total_pages.get()).map(|number| {
                    view! {
                        <button
                            class=move || {
                                if paged.with(|p| p.page()) == number { "page-btn active" } else { "page-btn" }
                            }
                            on:click=move |_| {
                                let total = total_pages.get_untracked();
                                paged.update(|p| p.goto(number, total));
                            }
                        >
                            {number}
                        </button>
                    }
                }).collect_view()}

                <button
                    class="page-btn"
                    disabled=move || paged.with(|p| p.page()) >= total_pages.get()
                    on:click=move |_| {
                        let total = total_pages.get_untracked();
                        paged.update(|p| p.next(total));
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
