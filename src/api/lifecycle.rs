use tracing::warn;

use crate::chart::{ChartHandle, SunburstFigure};
use crate::error::{ViewerError, ViewerResult};
use crate::net::GenerateBackend;

use super::ViewerSession;

impl<B: GenerateBackend> ViewerSession<B> {
    /// Composes the mountable figure for the published chart data, with the
    /// configured palette as colorway. Fails with `NoChart` when nothing is
    /// published.
    pub fn figure(&self) -> ViewerResult<SunburstFigure> {
        let data = self.chart_data.as_ref().ok_or(ViewerError::NoChart)?;
        Ok(SunburstFigure::compose(data, self.config.palette()))
    }

    /// Registers the handle the host issued for the current mount.
    ///
    /// Ignored when no chart data is published: a handle may only be live
    /// while a chart is mounted with data.
    pub fn chart_mounted(&mut self, handle: ChartHandle) {
        if self.chart_data.is_none() {
            warn!(
                instance_id = handle.instance_id(),
                "ignoring mount without published chart data"
            );
            return;
        }
        self.registry.on_chart_mounted(handle);
    }

    /// Drops the live handle when the host unmounts the chart.
    pub fn chart_unmounted(&mut self) {
        self.registry.on_chart_unmounted();
    }
}
