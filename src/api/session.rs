use tracing::debug;

use crate::chart::{ChartHandle, ChartHandleRegistry};
use crate::core::{ChartData, RenderConfig};
use crate::net::GenerateBackend;

use super::sidebar::SidebarState;

/// Main orchestration facade consumed by UI shells.
///
/// `ViewerSession` owns the render configuration, the most recently
/// published chart data, the live-handle registry and sidebar visibility.
/// All state is session-local and dropped with the value; nothing is
/// persisted.
pub struct ViewerSession<B: GenerateBackend> {
    pub(super) backend: B,
    pub(super) config: RenderConfig,
    pub(super) chart_data: Option<ChartData>,
    pub(super) registry: ChartHandleRegistry,
    pub(super) sidebar: SidebarState,
}

impl<B: GenerateBackend> ViewerSession<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: RenderConfig::default(),
            chart_data: None,
            registry: ChartHandleRegistry::default(),
            sidebar: SidebarState::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn chart_data(&self) -> Option<&ChartData> {
        self.chart_data.as_ref()
    }

    #[must_use]
    pub fn live_handle(&self) -> Option<ChartHandle> {
        self.registry.live_handle()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Replaces the published chart data. The previous dataset and any live
    /// handle are dropped in the same step, so consumers re-fetch the handle
    /// after the host re-mounts.
    pub(super) fn publish_chart_data(&mut self, data: ChartData) {
        debug!(
            traces = data.traces.len(),
            title = data.title.as_deref(),
            "publishing chart data"
        );
        self.chart_data = Some(data);
        self.registry.on_data_changed();
    }
}
