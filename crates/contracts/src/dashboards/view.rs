use serde::{Deserialize, Serialize};

/// Top-level tabbed dashboards. The order of [`View::ALL`] is the order of
/// the tab buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Operational,
    Errors,
    Transactions,
}

impl View {
    pub const ALL: [View; 3] = [View::Operational, View::Errors, View::Transactions];

    /// Key used by tab buttons and the `?view=` style lookups.
    pub fn key(&self) -> &'static str {
        match self {
            View::Operational => "operational",
            View::Errors => "errors",
            View::Transactions => "transactions",
        }
    }

    /// Returns `None` for keys that name no view.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.key() == key)
    }

    /// DOM id of the section holding the view's canvases.
    pub fn section_id(&self) -> &'static str {
        match self {
            View::Operational => "operational-tab",
            View::Errors => "errors-tab",
            View::Transactions => "transactions-tab",
        }
    }

    /// Position of the view's button among the `.tab-button` elements.
    pub fn button_index(&self) -> usize {
        match self {
            View::Operational => 0,
            View::Errors => 1,
            View::Transactions => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Operational => "Operational Performance",
            View::Errors => "Error Analysis",
            View::Transactions => "Transactions & Revenue",
        }
    }
}
