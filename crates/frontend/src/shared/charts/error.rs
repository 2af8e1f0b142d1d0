use thiserror::Error;

/// Failures at the chart creation/destruction boundary. None of them is
/// fatal: the affected chart is simply missing from the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Canvas element {0} not found")]
    MissingElement(String),

    #[error("Could not get context for {0}")]
    MissingContext(String),

    #[error("Error creating chart {id}: {reason}")]
    Construction { id: String, reason: String },

    #[error("Error destroying chart {id}: {reason}")]
    Teardown { id: String, reason: String },

    #[error("Chart.js not loaded")]
    LibraryUnavailable,
}

impl ChartError {
    /// Level the error is reported at when it is swallowed.
    pub fn level(&self) -> log::Level {
        match self {
            ChartError::MissingElement(_) | ChartError::MissingContext(_) => log::Level::Warn,
            _ => log::Level::Error,
        }
    }

    pub fn report(&self) {
        log::log!(self.level(), "{}", self);
    }
}
