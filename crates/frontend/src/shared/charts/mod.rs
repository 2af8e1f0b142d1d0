//! Chart lifecycle: the capabilities the page environment supplies and the
//! registry that owns every live chart.
//!
//! The registry only talks to the outside world through two traits:
//! - [`SurfaceProvider`]: "given an element id, return a drawable surface"
//! - [`ChartLibrary`]: constructs a renderable on a surface
//!
//! The browser implementations are [`canvas::CanvasSurfaces`] and
//! [`chart_js::ChartJs`].

pub mod canvas;
pub mod chart_js;
pub mod error;
pub mod readiness;
pub mod registry;

#[cfg(test)]
pub mod fakes;

pub use error::ChartError;
pub use readiness::{wait_until_ready, ReadinessError, RetryPolicy};
pub use registry::ChartRegistry;

use contracts::shared::charts::ChartConfig;
use contracts::shared::config::ChartDefaults;

/// Looks up drawing surfaces by element id.
pub trait SurfaceProvider {
    type Surface;

    /// Fails with [`ChartError::MissingElement`] when no element has the id and
    /// [`ChartError::MissingContext`] when it cannot be drawn on.
    fn surface(&self, id: &str) -> Result<Self::Surface, ChartError>;
}

/// A live chart owned by the external library.
pub trait Renderable {
    /// Releases the underlying rendering resources.
    fn teardown(self) -> Result<(), String>;
}

/// The external charting library.
pub trait ChartLibrary {
    type Surface;
    type Handle: Renderable;

    /// Whether the library has finished loading.
    fn is_loaded(&self) -> bool;

    fn apply_defaults(&self, defaults: &ChartDefaults) -> Result<(), String>;

    fn construct(
        &self,
        surface: Self::Surface,
        config: &ChartConfig,
    ) -> Result<Self::Handle, String>;
}
