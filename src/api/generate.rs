use tracing::{debug, warn};

use crate::error::ViewerResult;
use crate::net::{GenerateBackend, RenderRequest};

use super::ViewerSession;

impl<B: GenerateBackend> ViewerSession<B> {
    /// Runs one configuration → request → publish cycle.
    ///
    /// Fails with `MissingInput` before any backend call when no file is
    /// selected. Otherwise the sidebar collapses so the chart area has the
    /// viewport when data arrives, the configuration is snapshotted, and
    /// the exchange is awaited. On success the response replaces the
    /// published chart data in a single step and the live handle is
    /// invalidated until the host re-mounts. On failure the prior
    /// configuration, published data and handle are left untouched.
    pub async fn generate(&mut self) -> ViewerResult<()> {
        let request = RenderRequest::from_config(&self.config)?;
        self.sidebar.close();
        debug!(
            file = request.file().name(),
            generation_depth = request.generation_depth(),
            color_by = %request.color_by(),
            palette = %request.palette(),
            "starting generate exchange"
        );

        let outcome = self.backend.generate(&request).await;
        match outcome {
            Ok(data) => {
                self.publish_chart_data(data);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "generate exchange failed");
                Err(err)
            }
        }
    }
}
