use crate::error::{ViewerError, ViewerResult};
use crate::export::ImageExportOptions;

use super::{ChartHandle, SunburstFigure};

/// Contract implemented by the chart engine embedding.
///
/// Hosts own instance lifetimes: `mount` replaces any previous instance and
/// issues a fresh handle, and an encode call carrying a superseded handle
/// must fail instead of silently targeting the wrong instance.
#[allow(async_fn_in_trait)]
pub trait ChartHost {
    /// Mounts `figure` as the live chart, replacing any prior mount.
    fn mount(&mut self, figure: &SunburstFigure) -> ViewerResult<ChartHandle>;

    /// Unmounts the live chart, if any.
    fn unmount(&mut self);

    /// Encodes the mounted instance referenced by `handle` as an image.
    async fn encode_image(
        &mut self,
        handle: ChartHandle,
        options: &ImageExportOptions,
    ) -> ViewerResult<Vec<u8>>;
}

/// Headless host used by tests and engine-free embeddings.
///
/// Issues monotonically increasing instance ids so handle-staleness bugs
/// surface deterministically, and records the last encode request.
#[derive(Debug, Default)]
pub struct NullChartHost {
    next_instance_id: u64,
    mounted: Option<ChartHandle>,
    pub mount_count: usize,
    pub last_figure_trace_count: usize,
    pub last_encode_options: Option<ImageExportOptions>,
}

impl ChartHost for NullChartHost {
    fn mount(&mut self, figure: &SunburstFigure) -> ViewerResult<ChartHandle> {
        self.next_instance_id += 1;
        let handle = ChartHandle::new(self.next_instance_id);
        self.mounted = Some(handle);
        self.mount_count += 1;
        self.last_figure_trace_count = figure.data.len();
        Ok(handle)
    }

    fn unmount(&mut self) {
        self.mounted = None;
    }

    async fn encode_image(
        &mut self,
        handle: ChartHandle,
        options: &ImageExportOptions,
    ) -> ViewerResult<Vec<u8>> {
        if self.mounted != Some(handle) {
            return Err(ViewerError::Encoding(format!(
                "handle {} does not reference the mounted instance",
                handle.instance_id()
            )));
        }
        self.last_encode_options = Some(*options);
        Ok(format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\"/>",
            options.width_px, options.height_px
        )
        .into_bytes())
    }
}
