use tracing::{debug, warn};

use crate::chart::ChartHost;
use crate::error::{ViewerError, ViewerResult};
use crate::export::{DownloadSink, EXPORT_FILE_NAME, ExportArtifact, ImageExportOptions};
use crate::net::GenerateBackend;

use super::ViewerSession;

impl<B: GenerateBackend> ViewerSession<B> {
    /// Encodes the mounted chart and hands the finished artifact to `sink`.
    ///
    /// Fails with `NoChart` when nothing is published, and with
    /// `NoLiveHandle` when chart data exists but no live instance is
    /// registered (for example right after a data change, before the host
    /// re-mounts). Neither failure touches the sink. Delivery itself is
    /// fire-and-forget; the returned artifact is the caller's copy.
    pub async fn export_chart<H, S>(
        &self,
        host: &mut H,
        sink: &mut S,
    ) -> ViewerResult<ExportArtifact>
    where
        H: ChartHost,
        S: DownloadSink,
    {
        if self.chart_data.is_none() {
            return Err(ViewerError::NoChart);
        }
        let handle = self
            .registry
            .live_handle()
            .ok_or(ViewerError::NoLiveHandle)?;

        let options = ImageExportOptions::default();
        let outcome = host.encode_image(handle, &options).await;
        let bytes = match outcome {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "image encoding failed");
                return Err(err);
            }
        };

        let artifact = ExportArtifact {
            bytes,
            filename: EXPORT_FILE_NAME.to_owned(),
        };
        debug!(
            filename = %artifact.filename,
            bytes = artifact.bytes.len(),
            "delivering export artifact"
        );
        sink.deliver(&artifact);
        Ok(artifact)
    }
}
