//! View table - единственный источник правды для маппинга view key → init routine
//!
//! The section id and button index of each view come from
//! [`View::section_id`] and [`View::button_index`].

use crate::dashboards::{init_error_charts, init_operational_charts, init_transaction_charts};
use crate::shared::charts::{ChartLibrary, ChartRegistry, SurfaceProvider};
use contracts::dashboards::View;

/// Routine that (re)populates the registry with one view's charts.
pub type InitRoutine<L, S> = fn(&mut ChartRegistry<L, S>) -> usize;

pub struct ViewEntry<L: ChartLibrary, S> {
    pub view: View,
    pub init: InitRoutine<L, S>,
}

/// Looks up a view by its key. `None` for unknown keys.
pub fn view_entry<L, S>(key: &str) -> Option<ViewEntry<L, S>>
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
{
    let view = View::from_key(key)?;
    let init: InitRoutine<L, S> = match view {
        View::Operational => init_operational_charts,
        View::Errors => init_error_charts,
        View::Transactions => init_transaction_charts,
    };
    Some(ViewEntry { view, init })
}
