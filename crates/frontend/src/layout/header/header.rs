use crate::layout::global_context::DashboardContext;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    let is_loading = move || ctx.loading.get();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">"Ticketing Operations Dashboard"</h1>
                <span id="lastUpdate" class="header__updated">{move || ctx.last_updated.get()}</span>
            </div>
            <div id="loadingIndicator" class="loading-indicator" class:show=is_loading>
                <Show when=is_loading>
                    <Spinner />
                </Show>
                <span>"Loading charts..."</span>
            </div>
        </header>
    }
}
