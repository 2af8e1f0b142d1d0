use crate::layout::global_context::DashboardContext;
use crate::layout::tab_controller::ControllerStore;
use contracts::dashboards::View;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn TabButton(tab: View) -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let controller = expect_context::<ControllerStore>();

    let is_active = Memo::new(move |_| ctx.is_active(tab));

    let on_click = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.switch_to(tab.key()).await;
        });
    };

    view! {
        <button class="tab-button" class:active=is_active data-view=tab.key() on:click=on_click>
            {tab.title()}
        </button>
    }
}

/// Кнопки переключения дашбордов, в порядке [`View::ALL`].
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="tabs">
            {View::ALL
                .into_iter()
                .map(|tab| view! { <TabButton tab=tab /> })
                .collect_view()}
        </nav>
    }
}
