//! View initialization routines and the view sections they render into.

pub mod section;

pub use section::ViewSection;

use crate::shared::charts::{ChartError, ChartLibrary, ChartRegistry, SurfaceProvider};
use contracts::dashboards::{catalog, View};

/// Creates every chart of `view`. Returns how many were created.
///
/// Without the charting library nothing is created; individual failures only
/// cost the affected chart.
pub fn init_view_charts<L, S>(registry: &mut ChartRegistry<L, S>, view: View) -> usize
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
{
    if !registry.library_loaded() {
        ChartError::LibraryUnavailable.report();
        return 0;
    }

    let mut created = 0;
    for spec in catalog(view) {
        if registry.create(spec.id, &spec.config).is_some() {
            created += 1;
        }
    }
    log::debug!("{}: {} chart(s) created", view.key(), created);
    created
}

pub fn init_operational_charts<L, S>(registry: &mut ChartRegistry<L, S>) -> usize
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
{
    init_view_charts(registry, View::Operational)
}

pub fn init_error_charts<L, S>(registry: &mut ChartRegistry<L, S>) -> usize
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
{
    init_view_charts(registry, View::Errors)
}

pub fn init_transaction_charts<L, S>(registry: &mut ChartRegistry<L, S>) -> usize
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
{
    init_view_charts(registry, View::Transactions)
}
