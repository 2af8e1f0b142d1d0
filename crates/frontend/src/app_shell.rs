//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - config gate (показывает ошибку конфигурации или MainLayout)
//! - `MainLayout` - создаёт контроллер дашборда и запускает первичную отрисовку

use crate::layout::global_context::DashboardContext;
use crate::layout::tab_controller::{ControllerStore, DashboardController};
use crate::layout::Shell;
use crate::shared::charts::canvas::CanvasSurfaces;
use crate::shared::charts::chart_js::ChartJs;
use crate::shared::charts::ChartRegistry;
use crate::shared::config::load_dashboard_config;
use crate::shared::date_utils::now_local;
use crate::shared::timers::BrowserTimers;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Dashboard layout with a live controller.
///
/// The initial render starts from an effect, i.e. once the sections and
/// canvases are mounted.
#[component]
fn MainLayout(config: DashboardConfig) -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    let registry = ChartRegistry::new(ChartJs, CanvasSurfaces);
    let controller = Rc::new(DashboardController::new(
        registry,
        ctx,
        BrowserTimers,
        &config,
    ));
    let store: ControllerStore = StoredValue::new_local(controller);
    provide_context(store);

    Effect::new(move |_| {
        let controller = store.get_value();
        spawn_local(async move {
            if controller.start(now_local()).await.is_err() {
                log::warn!("Dashboard is running without charts");
            }
        });
    });

    view! { <Shell /> }
}

#[component]
fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h2>"Dashboard configuration error"</h2>
            <pre>{message}</pre>
        </div>
    }
}

/// Application shell - config gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    match load_dashboard_config() {
        Ok(config) => view! { <MainLayout config=config /> }.into_any(),
        Err(err) => {
            log::error!("Invalid dashboard configuration: {:#}", err);
            view! { <ConfigError message=format!("{:#}", err) /> }.into_any()
        }
    }
}
