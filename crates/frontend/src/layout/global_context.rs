use crate::layout::tab_controller::{ViewError, ViewHost};
use contracts::dashboards::View;
use leptos::prelude::*;
use web_sys::window;

/// Reactive page state shared by the shell components.
///
/// `active == None` means every section and tab button is hidden/unmarked,
/// the transient state between deactivation and activation during a switch.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub active: RwSignal<Option<View>>,
    pub loading: RwSignal<bool>,
    pub last_updated: RwSignal<String>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Some(View::default())),
            loading: RwSignal::new(false),
            last_updated: RwSignal::new(String::new()),
        }
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active.get() == Some(view)
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHost for DashboardContext {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_last_updated(&self, text: &str) {
        self.last_updated.set(text.to_string());
    }

    fn deactivate_all(&self) -> Result<(), ViewError> {
        self.active.set(None);
        Ok(())
    }

    fn activate(&self, view: View) -> Result<(), ViewError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(ViewError::MissingSection(view.section_id()))?;

        if document.get_element_by_id(view.section_id()).is_none() {
            return Err(ViewError::MissingSection(view.section_id()));
        }

        let button = document
            .query_selector_all(".tab-button")
            .ok()
            .and_then(|buttons| buttons.item(view.button_index() as u32));
        if button.is_none() {
            return Err(ViewError::MissingButton(view.button_index()));
        }

        log::debug!("Activating section #{}", view.section_id());
        self.active.set(Some(view));
        Ok(())
    }
}
