//! In-memory stand-ins for the browser capabilities, used by unit tests.

use super::{ChartError, ChartLibrary, Renderable, SurfaceProvider};
use crate::layout::tab_controller::{ViewError, ViewHost};
use crate::shared::timers::Timers;
use contracts::dashboards::View;
use contracts::shared::charts::{ChartConfig, ChartKind};
use contracts::shared::config::ChartDefaults;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Once;
use std::task::{Context, Poll};

// ---------------------------------------------------------------------------
// Chart library
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct LibraryState {
    loaded: bool,
    /// Becomes loaded on this probe (1-based) when set.
    load_on_probe: Option<u32>,
    probes: u32,
    next_serial: u64,
    failing: HashSet<String>,
    failing_teardown: HashSet<String>,
    live: Vec<(String, u64)>,
    torn_down: Vec<u64>,
    events: Vec<String>,
    defaults: Option<ChartDefaults>,
}

/// Records every construction and teardown. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeLibrary {
    state: Rc<RefCell<LibraryState>>,
}

impl FakeLibrary {
    pub fn loaded() -> Self {
        let library = Self::default();
        library.state.borrow_mut().loaded = true;
        library
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Reports loaded from the `probe`-th call of `is_loaded` on.
    pub fn loading_on_probe(probe: u32) -> Self {
        let library = Self::default();
        library.state.borrow_mut().load_on_probe = Some(probe);
        library
    }

    pub fn failing_on(self, id: &str) -> Self {
        self.fail_on(id);
        self
    }

    pub fn fail_on(&self, id: &str) {
        self.state.borrow_mut().failing.insert(id.to_string());
    }

    pub fn fail_teardown_of(&self, id: &str) {
        self.state.borrow_mut().failing_teardown.insert(id.to_string());
    }

    pub fn probes(&self) -> u32 {
        self.state.borrow().probes
    }

    pub fn live(&self) -> Vec<(String, u64)> {
        self.state.borrow().live.clone()
    }

    pub fn torn_down(&self) -> Vec<u64> {
        self.state.borrow().torn_down.clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.state.borrow().events.clone()
    }

    pub fn defaults(&self) -> Option<ChartDefaults> {
        self.state.borrow().defaults.clone()
    }
}

#[derive(Debug)]
pub struct FakeHandle {
    pub id: String,
    pub kind: ChartKind,
    pub serial: u64,
    state: Rc<RefCell<LibraryState>>,
}

impl Renderable for FakeHandle {
    fn teardown(self) -> Result<(), String> {
        let mut state = self.state.borrow_mut();
        state.live.retain(|(_, serial)| *serial != self.serial);
        state.torn_down.push(self.serial);
        state.events.push(format!("teardown {}#{}", self.id, self.serial));
        if state.failing_teardown.contains(&self.id) {
            return Err(format!("teardown of {} failed", self.id));
        }
        Ok(())
    }
}

impl ChartLibrary for FakeLibrary {
    type Surface = String;
    type Handle = FakeHandle;

    fn is_loaded(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.probes += 1;
        if let Some(probe) = state.load_on_probe {
            if state.probes >= probe {
                state.loaded = true;
            }
        }
        state.loaded
    }

    fn apply_defaults(&self, defaults: &ChartDefaults) -> Result<(), String> {
        self.state.borrow_mut().defaults = Some(defaults.clone());
        Ok(())
    }

    fn construct(&self, surface: String, config: &ChartConfig) -> Result<FakeHandle, String> {
        let mut state = self.state.borrow_mut();
        if state.failing.contains(&surface) {
            return Err(format!("cannot construct {}", surface));
        }
        state.next_serial += 1;
        let serial = state.next_serial;
        state.live.push((surface.clone(), serial));
        state.events.push(format!("construct {}#{}", surface, serial));
        Ok(FakeHandle {
            id: surface,
            kind: config.kind,
            serial,
            state: Rc::clone(&self.state),
        })
    }
}

// ---------------------------------------------------------------------------
// Surfaces
// ---------------------------------------------------------------------------

/// Element ids present on the fake page. The surface is the id itself.
#[derive(Debug, Clone, Default)]
pub struct FakeSurfaces {
    elements: HashSet<String>,
    without_context: HashSet<String>,
}

impl FakeSurfaces {
    pub fn with(ids: &[&str]) -> Self {
        Self {
            elements: ids.iter().map(|id| id.to_string()).collect(),
            without_context: HashSet::new(),
        }
    }

    /// Every canvas of every view.
    pub fn all_views() -> Self {
        let ids: Vec<&str> = View::ALL
            .into_iter()
            .flat_map(contracts::dashboards::chart_ids)
            .collect();
        Self::with(&ids)
    }

    pub fn without_context(mut self, id: &str) -> Self {
        self.without_context.insert(id.to_string());
        self
    }
}

impl SurfaceProvider for FakeSurfaces {
    type Surface = String;

    fn surface(&self, id: &str) -> Result<String, ChartError> {
        if !self.elements.contains(id) {
            return Err(ChartError::MissingElement(id.to_string()));
        }
        if self.without_context.contains(id) {
            return Err(ChartError::MissingContext(id.to_string()));
        }
        Ok(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// View host
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct FakeHost {
    active: Cell<Option<View>>,
    loading: RefCell<Vec<bool>>,
    last_updated: RefCell<Option<String>>,
    missing_section: Cell<Option<View>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            active: Cell::new(Some(View::Operational)),
            loading: RefCell::new(Vec::new()),
            last_updated: RefCell::new(None),
            missing_section: Cell::new(None),
        }
    }
}

impl FakeHost {
    /// Activating `view` fails as if its section were not in the page.
    pub fn without_section(view: View) -> Self {
        let host = Self::default();
        host.missing_section.set(Some(view));
        host
    }

    pub fn active(&self) -> Option<View> {
        self.active.get()
    }

    /// Every loading-indicator write, in order.
    pub fn loading_history(&self) -> Vec<bool> {
        self.loading.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.borrow().last().copied().unwrap_or(false)
    }

    pub fn last_updated(&self) -> Option<String> {
        self.last_updated.borrow().clone()
    }
}

impl ViewHost for FakeHost {
    fn set_loading(&self, loading: bool) {
        self.loading.borrow_mut().push(loading);
    }

    fn set_last_updated(&self, text: &str) {
        *self.last_updated.borrow_mut() = Some(text.to_string());
    }

    fn deactivate_all(&self) -> Result<(), ViewError> {
        self.active.set(None);
        Ok(())
    }

    fn activate(&self, view: View) -> Result<(), ViewError> {
        if self.missing_section.get() == Some(view) {
            return Err(ViewError::MissingSection(view.section_id()));
        }
        self.active.set(Some(view));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

/// Resolves on the second poll so concurrent tasks get to interleave.
pub struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Records requested delays instead of waiting for them.
#[derive(Debug, Default)]
pub struct ImmediateTimers {
    yielding: bool,
    sleeps: RefCell<Vec<u32>>,
    frames: Cell<u32>,
}

impl ImmediateTimers {
    /// Every wait yields to the executor once before resolving.
    pub fn yielding() -> Self {
        Self {
            yielding: true,
            ..Self::default()
        }
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }

    pub fn frames(&self) -> u32 {
        self.frames.get()
    }
}

impl Timers for ImmediateTimers {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(ms);
        YieldOnce {
            yielded: !self.yielding,
        }
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        self.frames.set(self.frames.get() + 1);
        YieldOnce {
            yielded: !self.yielding,
        }
    }
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps records per thread, so parallel tests do not see each other's logs.
struct RecordingLogger;

impl log::Log for RecordingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger;
static INSTALL: Once = Once::new();

/// Records emitted on the current thread since [`capture_logs`].
pub struct LogCapture;

/// Installs the recording logger (once per process) and clears this
/// thread's records.
pub fn capture_logs() -> LogCapture {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    LogCapture
}

impl LogCapture {
    pub fn records(&self) -> Vec<(log::Level, String)> {
        RECORDS.with(|records| records.borrow().clone())
    }

    /// Messages logged at exactly `level`.
    pub fn at(&self, level: log::Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message)
            .collect()
    }
}
