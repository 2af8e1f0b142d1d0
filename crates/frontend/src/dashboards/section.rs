use crate::layout::global_context::DashboardContext;
use contracts::dashboards::{catalog, View};
use leptos::prelude::*;

/// Section of one view: a card with a `<canvas>` for every chart in its
/// catalog. Charts are drawn into the canvases by the controller, not here.
#[component]
pub fn ViewSection(view: View) -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    let is_active = Memo::new(move |_| ctx.is_active(view));

    view! {
        <section id=view.section_id() class="tab-content" class:active=is_active>
            <h2 class="section-title">{view.title()}</h2>
            <div class="chart-grid">
                {catalog(view)
                    .into_iter()
                    .map(|spec| {
                        view! {
                            <div class="chart-card">
                                <h3 class="chart-card__title">{spec.title}</h3>
                                <div class="chart-card__body">
                                    <canvas id=spec.id></canvas>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
