use super::{ChartError, ChartLibrary, Renderable, SurfaceProvider};
use contracts::shared::charts::ChartConfig;
use std::collections::HashMap;

/// Owns every live chart, keyed by the id of the canvas it renders into.
///
/// At most one handle exists per id: creating a chart for an occupied id
/// tears the previous one down first.
pub struct ChartRegistry<L: ChartLibrary, S> {
    library: L,
    surfaces: S,
    charts: HashMap<String, L::Handle>,
}

impl<L, S> ChartRegistry<L, S>
where
    L: ChartLibrary,
    S: SurfaceProvider<Surface = L::Surface>,
{
    pub fn new(library: L, surfaces: S) -> Self {
        Self {
            library,
            surfaces,
            charts: HashMap::new(),
        }
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn library_loaded(&self) -> bool {
        self.library.is_loaded()
    }

    /// Creates the chart for `id`, replacing any existing one.
    ///
    /// A missing surface leaves the registry untouched, including an existing
    /// chart for `id`. A construction failure leaves no entry for `id`.
    pub fn try_create(&mut self, id: &str, config: &ChartConfig) -> Result<&L::Handle, ChartError> {
        let surface = self.surfaces.surface(id)?;

        self.destroy(id);

        let handle = self
            .library
            .construct(surface, config)
            .map_err(|reason| ChartError::Construction {
                id: id.to_string(),
                reason,
            })?;

        // `destroy` above emptied the slot.
        Ok(&*self.charts.entry(id.to_string()).or_insert(handle))
    }

    /// Like [`try_create`](Self::try_create) but reports the failure to the
    /// log and returns `None`.
    pub fn create(&mut self, id: &str, config: &ChartConfig) -> Option<&L::Handle> {
        match self.try_create(id, config) {
            Ok(handle) => Some(handle),
            Err(err) => {
                err.report();
                None
            }
        }
    }

    /// Tears down and forgets the chart for `id`. Returns whether one existed.
    ///
    /// The entry is removed even if the library fails to tear it down.
    pub fn destroy(&mut self, id: &str) -> bool {
        let Some(handle) = self.charts.remove(id) else {
            return false;
        };
        if let Err(reason) = handle.teardown() {
            ChartError::Teardown {
                id: id.to_string(),
                reason,
            }
            .report();
        }
        true
    }

    /// Tears down every chart. Returns how many were destroyed.
    pub fn destroy_all(&mut self) -> usize {
        let ids: Vec<String> = self.charts.keys().cloned().collect();
        ids.iter().filter(|id| self.destroy(id)).count()
    }

    pub fn get(&self, id: &str) -> Option<&L::Handle> {
        self.charts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.charts.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.charts.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
