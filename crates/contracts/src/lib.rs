//! Target-independent types shared by the dashboard frontend: views, the
//! chart configuration model and its display policies, the static chart
//! catalog and configuration.

pub mod dashboards;
pub mod shared;
