pub mod global_context;
pub mod header;
pub mod tab_controller;
pub mod tabs;

use crate::dashboards::ViewSection;
use contracts::dashboards::View;
use header::Header;
use leptos::prelude::*;
use tabs::TabBar;

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, last update, loading)    |
/// +------------------------------------------+
/// |  TabBar                                  |
/// +------------------------------------------+
/// |  one section per view, one visible       |
/// +------------------------------------------+
/// ```
///
/// All sections stay mounted; switching only toggles `active`, so canvas ids
/// remain resolvable for the chart registry.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <TabBar />
            <main class="app-main">
                {View::ALL
                    .into_iter()
                    .map(|view| view! { <ViewSection view=view /> })
                    .collect_view()}
            </main>
        </div>
    }
}
