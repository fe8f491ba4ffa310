use tracing::trace;

/// Token referencing the live, currently mounted chart instance.
///
/// The token does not own chart data and is only meaningful while the host
/// keeps the instance it was issued for mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    #[must_use]
    pub fn new(instance_id: u64) -> Self {
        Self(instance_id)
    }

    #[must_use]
    pub fn instance_id(self) -> u64 {
        self.0
    }
}

/// Tracks the handle to the mounted chart instance.
///
/// Invariant: a live handle exists only while a chart is mounted with
/// published chart data. Hosts may replace the whole instance on every new
/// dataset, so the handle is dropped on each data change and must be
/// re-fetched once the host re-mounts; a handle cached across a data change
/// can point at a detached instance.
#[derive(Debug, Default)]
pub struct ChartHandleRegistry {
    live: Option<ChartHandle>,
}

impl ChartHandleRegistry {
    pub fn on_chart_mounted(&mut self, handle: ChartHandle) {
        trace!(instance_id = handle.instance_id(), "chart mounted");
        self.live = Some(handle);
    }

    pub fn on_chart_unmounted(&mut self) {
        trace!("chart unmounted");
        self.live = None;
    }

    pub fn on_data_changed(&mut self) {
        trace!("chart data changed, dropping live handle");
        self.live = None;
    }

    #[must_use]
    pub fn live_handle(&self) -> Option<ChartHandle> {
        self.live
    }
}
