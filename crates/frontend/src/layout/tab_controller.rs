//! View switching and startup.
//!
//! `DashboardController` owns the chart registry and the active view. Every
//! method takes `&self`: the controller is shared between event handlers via
//! `Rc`, and its state is only borrowed inside synchronous steps, never across
//! an `.await`.

use super::global_context::DashboardContext;
use super::tabs::{view_entry, ViewEntry};
use crate::dashboards::init_operational_charts;
use crate::shared::charts::canvas::CanvasSurfaces;
use crate::shared::charts::chart_js::ChartJs;
use crate::shared::charts::{
    wait_until_ready, ChartLibrary, ChartRegistry, ReadinessError, RetryPolicy, SurfaceProvider,
};
use crate::shared::date_utils::format_last_updated;
use crate::shared::timers::{BrowserTimers, Timers};
use chrono::NaiveDateTime;
use contracts::dashboards::View;
use contracts::shared::config::{ChartDefaults, DashboardConfig, TimingConfig};
use leptos::prelude::{LocalStorage, StoredValue};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Section #{0} not found")]
    MissingSection(&'static str),

    #[error("Tab button {0} not found")]
    MissingButton(usize),
}

/// The visible side of the dashboard: sections, tab buttons, loading
/// indicator and timestamp. Write-only from the controller's point of view.
pub trait ViewHost {
    fn set_loading(&self, loading: bool);

    fn set_last_updated(&self, text: &str);

    /// Removes the active marker from every section and tab button.
    fn deactivate_all(&self) -> Result<(), ViewError>;

    /// Marks the view's section and tab button active.
    fn activate(&self, view: View) -> Result<(), ViewError>;
}

/// The controller wired to Chart.js, the page canvases and the Leptos shell.
pub type BrowserController =
    DashboardController<ChartJs, CanvasSurfaces, DashboardContext, BrowserTimers>;

/// How components reach the controller: an arena slot that is `Copy` and can
/// sit in context, holding the non-`Send` controller.
pub type ControllerStore = StoredValue<Rc<BrowserController>, LocalStorage>;

pub struct DashboardController<L, S, H, T>
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
    H: ViewHost,
    T: Timers,
{
    registry: RefCell<ChartRegistry<L, S>>,
    host: H,
    timers: T,
    timing: TimingConfig,
    defaults: ChartDefaults,
    active: Cell<View>,
    /// Bumped by every switch; a paint step from an older switch is skipped.
    generation: Cell<u64>,
}

impl<L, S, H, T> DashboardController<L, S, H, T>
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
    H: ViewHost,
    T: Timers,
{
    pub fn new(registry: ChartRegistry<L, S>, host: H, timers: T, config: &DashboardConfig) -> Self {
        Self {
            registry: RefCell::new(registry),
            host,
            timers,
            timing: config.timing,
            defaults: config.chart_defaults.clone(),
            active: Cell::new(View::default()),
            generation: Cell::new(0),
        }
    }

    pub fn active_view(&self) -> View {
        self.active.get()
    }

    pub fn registry(&self) -> Ref<'_, ChartRegistry<L, S>> {
        self.registry.borrow()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Initial render: stamps the header, waits for the charting library and
    /// draws the operational view.
    ///
    /// On timeout the loading indicator is cleared and no chart is ever drawn.
    pub async fn start(&self, now: NaiveDateTime) -> Result<(), ReadinessError> {
        self.host.set_last_updated(&format_last_updated(&now));
        self.host.set_loading(true);
        let generation = self.generation.get();

        let policy = RetryPolicy::from(&self.timing);
        let attempts = match wait_until_ready(
            || self.registry.borrow().library_loaded(),
            policy,
            &self.timers,
        )
        .await
        {
            Ok(attempts) => attempts,
            Err(err) => {
                log::error!("{}", err);
                self.host.set_loading(false);
                return Err(err);
            }
        };
        log::info!("Chart.js ready after {} attempt(s)", attempts);

        if let Err(err) = self.registry.borrow().library().apply_defaults(&self.defaults) {
            log::warn!("Could not apply chart defaults: {}", err);
        }

        self.timers.next_frame().await;
        if self.generation.get() != generation {
            // A tab switch took over while we were waiting; it draws its own view.
            return Ok(());
        }
        let created = init_operational_charts(&mut *self.registry.borrow_mut());
        log::info!("Initial render: {} chart(s)", created);
        self.host.set_loading(false);
        Ok(())
    }

    /// Switches to the view named `key`.
    ///
    /// Tears down all current charts, activates the view's section and button,
    /// and after the next paint creates the view's charts. An unknown key still
    /// tears the charts down but leaves the current section active.
    pub async fn switch_to(&self, key: &str) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.host.set_loading(true);

        self.timers.sleep(self.timing.settle_delay_ms).await;

        let entry = match self.swap_sections(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                self.host.set_loading(false);
                return;
            }
            Err(err) => {
                log::error!("Error switching tabs: {}", err);
                self.host.set_loading(false);
                return;
            }
        };

        self.timers.next_frame().await;
        if self.generation.get() != generation {
            log::debug!("Switch to '{}' superseded before paint", key);
            return;
        }

        let created = (entry.init)(&mut *self.registry.borrow_mut());
        log::info!("Switched to {}: {} chart(s)", entry.view.key(), created);
        self.host.set_loading(false);
    }

    /// Synchronous part of a switch: deactivate, tear down, activate.
    fn swap_sections(&self, key: &str) -> Result<Option<ViewEntry<L, S>>, ViewError> {
        let Some(entry) = view_entry::<L, S>(key) else {
            log::warn!("Unknown view '{}'", key);
            self.registry.borrow_mut().destroy_all();
            return Ok(None);
        };

        self.host.deactivate_all()?;
        let destroyed = self.registry.borrow_mut().destroy_all();
        log::debug!("Destroyed {} chart(s)", destroyed);

        self.host.activate(entry.view)?;
        self.active.set(entry.view);
        Ok(Some(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::fakes::{
        capture_logs, FakeHost, FakeLibrary, FakeSurfaces, ImmediateTimers,
    };
    use chrono::NaiveDate;
    use contracts::dashboards::chart_ids;
    use contracts::shared::config::load_config;
    use futures::executor::block_on;
    use std::collections::HashSet;

    type Controller = DashboardController<FakeLibrary, FakeSurfaces, FakeHost, ImmediateTimers>;

    fn controller_with(library: FakeLibrary, host: FakeHost, timers: ImmediateTimers) -> Controller {
        let config = load_config().unwrap();
        let registry = ChartRegistry::new(library, FakeSurfaces::all_views());
        DashboardController::new(registry, host, timers, &config)
    }

    fn controller(library: FakeLibrary) -> Controller {
        controller_with(library, FakeHost::default(), ImmediateTimers::default())
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn sorted_ids(view: View) -> Vec<String> {
        let mut ids: Vec<String> = chart_ids(view).into_iter().map(str::to_string).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_start_renders_operational_view() {
        let library = FakeLibrary::loading_on_probe(3);
        let controller = controller(library.clone());

        assert_eq!(block_on(controller.start(now())), Ok(()));

        assert_eq!(controller.registry().ids(), sorted_ids(View::Operational));
        assert_eq!(controller.active_view(), View::Operational);
        assert_eq!(controller.host().loading_history(), vec![true, false]);
        assert_eq!(
            controller.host().last_updated().as_deref(),
            Some("Last Updated: Sun, Oct 18, 2026, 09:15 AM")
        );
        assert_eq!(controller.timers().sleeps(), vec![200, 200, 200]);
        assert_eq!(controller.timers().frames(), 1);
        assert_eq!(library.defaults().map(|d| d.color), Some("#4a5568".to_string()));
    }

    #[test]
    fn test_start_gives_up_when_library_never_loads() {
        let library = FakeLibrary::unloaded();
        let controller = controller(library.clone());

        let result = block_on(controller.start(now()));

        assert_eq!(result, Err(ReadinessError::TimedOut { attempts: 10 }));
        assert_eq!(library.probes(), 10);
        assert!(!controller.host().is_loading());
        assert!(controller.registry().is_empty());
        assert!(library.events().is_empty());
        assert!(library.defaults().is_none());
    }

    #[test]
    fn test_start_timeout_logs_one_error() {
        let controller = controller(FakeLibrary::unloaded());
        let logs = capture_logs();

        assert!(block_on(controller.start(now())).is_err());

        assert_eq!(
            logs.at(log::Level::Error),
            vec!["Chart.js failed to load after 10 attempts".to_string()]
        );
        assert!(logs.at(log::Level::Info).is_empty());
    }

    #[test]
    fn test_switch_replaces_operational_with_error_charts() {
        let library = FakeLibrary::loaded();
        let controller = controller(library.clone());
        block_on(controller.start(now())).unwrap();
        assert_eq!(controller.registry().len(), 4);

        block_on(controller.switch_to("errors"));

        assert_eq!(controller.active_view(), View::Errors);
        assert_eq!(controller.host().active(), Some(View::Errors));
        assert_eq!(controller.registry().ids(), sorted_ids(View::Errors));
        // 4 -> 0 -> 4: every operational chart was torn down first.
        assert_eq!(library.torn_down().len(), 4);
        assert_eq!(library.live().len(), 4);
        let before: HashSet<String> = sorted_ids(View::Operational).into_iter().collect();
        let after: HashSet<String> = controller.registry().ids().into_iter().collect();
        assert!(before.is_disjoint(&after));
        assert!(!controller.host().is_loading());
    }

    #[test]
    fn test_switch_waits_settle_delay_then_a_frame() {
        let controller = controller(FakeLibrary::loaded());
        block_on(controller.switch_to("transactions"));

        assert_eq!(controller.timers().sleeps(), vec![50]);
        assert_eq!(controller.timers().frames(), 1);
        assert_eq!(controller.host().loading_history(), vec![true, false]);
        assert_eq!(controller.registry().len(), 6);
    }

    #[test]
    fn test_switch_to_unknown_view_keeps_section_and_destroys_charts() {
        let library = FakeLibrary::loaded();
        let controller = controller(library.clone());
        block_on(controller.start(now())).unwrap();
        let constructed = library.events().len();

        block_on(controller.switch_to("revenue"));

        assert_eq!(controller.active_view(), View::Operational);
        assert_eq!(controller.host().active(), Some(View::Operational));
        assert!(controller.registry().is_empty());
        assert_eq!(library.torn_down().len(), 4);
        // Only teardowns happened after the switch, no constructions.
        assert!(library.events()[constructed..]
            .iter()
            .all(|event| event.starts_with("teardown")));
        assert!(!controller.host().is_loading());
    }

    #[test]
    fn test_switch_abandoned_when_section_missing() {
        let library = FakeLibrary::loaded();
        let controller = controller_with(
            library.clone(),
            FakeHost::without_section(View::Transactions),
            ImmediateTimers::default(),
        );
        block_on(controller.start(now())).unwrap();

        block_on(controller.switch_to("transactions"));

        assert_eq!(controller.host().active(), None);
        assert_eq!(controller.active_view(), View::Operational);
        assert!(controller.registry().is_empty());
        assert!(!controller.host().is_loading());
        assert_eq!(controller.timers().frames(), 1);
    }

    #[test]
    fn test_switch_before_library_loaded_creates_nothing() {
        let library = FakeLibrary::unloaded();
        let controller = controller(library.clone());

        block_on(controller.switch_to("errors"));

        assert_eq!(controller.active_view(), View::Errors);
        assert!(controller.registry().is_empty());
        assert!(!controller.host().is_loading());
    }

    #[test]
    fn test_overlapping_switches_last_one_wins() {
        let library = FakeLibrary::loaded();
        let controller = controller_with(
            library.clone(),
            FakeHost::default(),
            ImmediateTimers::yielding(),
        );

        block_on(async {
            futures::join!(
                controller.switch_to("errors"),
                controller.switch_to("transactions")
            )
        });

        assert_eq!(controller.active_view(), View::Transactions);
        assert_eq!(controller.registry().ids(), sorted_ids(View::Transactions));
        assert_eq!(library.live().len(), 6);
        assert_eq!(controller.host().loading_history(), vec![true, true, false]);
    }

    #[test]
    fn test_switch_during_startup_supersedes_initial_render() {
        let library = FakeLibrary::loaded();
        let controller = controller_with(
            library.clone(),
            FakeHost::default(),
            ImmediateTimers::yielding(),
        );

        block_on(async {
            let (started, ()) =
                futures::join!(controller.start(now()), controller.switch_to("errors"));
            assert_eq!(started, Ok(()));
        });

        assert_eq!(controller.active_view(), View::Errors);
        assert_eq!(controller.registry().ids(), sorted_ids(View::Errors));
        assert!(!controller.host().is_loading());
    }
}
