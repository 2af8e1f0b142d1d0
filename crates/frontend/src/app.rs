use crate::app_shell::AppShell;
use crate::layout::global_context::DashboardContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the DashboardContext store to the whole app via context.
    provide_context(DashboardContext::new());

    view! {
        <AppShell />
    }
}
