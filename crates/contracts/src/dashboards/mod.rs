//! Static chart catalog of the three dashboards.

pub mod d410_operational;
pub mod d411_errors;
pub mod d412_transactions;
pub mod view;

pub use view::View;

use crate::shared::charts::ChartConfig;

/// One chart of a view: the canvas id it renders into and its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// DOM id of the `<canvas>`; also the chart registry key.
    pub id: &'static str,
    pub title: &'static str,
    pub config: ChartConfig,
}

/// Charts belonging to `view`, in render order.
pub fn catalog(view: View) -> Vec<ChartSpec> {
    match view {
        View::Operational => d410_operational::charts(),
        View::Errors => d411_errors::charts(),
        View::Transactions => d412_transactions::charts(),
    }
}

/// Canvas ids of `view`, in render order.
pub fn chart_ids(view: View) -> Vec<&'static str> {
    catalog(view).into_iter().map(|spec| spec.id).collect()
}
