//! Image export: the fixed encoding parameters, the artifact type, and the
//! save-as side-effect seam.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Encoding of the exported image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
}

impl ImageFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
        }
    }
}

/// Name offered to the save dialog for every exported chart.
pub const EXPORT_FILE_NAME: &str = "family-tree-chart.svg";

/// Parameters of the image-encoding call, fixed by the download feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageExportOptions {
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
    pub scale: f64,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Svg,
            width_px: 1200,
            height_px: 800,
            scale: 2.0,
        }
    }
}

/// Encoded image plus the name it is saved under.
///
/// Transient: exists only for the duration of one download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Save-as destination for finished artifacts.
///
/// Delivery is fire-and-forget: the export pipeline never waits for, or
/// learns about, the fate of the artifact after handoff.
pub trait DownloadSink {
    fn deliver(&mut self, artifact: &ExportArtifact);
}

/// Collects delivered artifacts in memory.
#[derive(Debug, Default)]
pub struct MemoryDownloadSink {
    pub delivered: Vec<ExportArtifact>,
}

impl DownloadSink for MemoryDownloadSink {
    fn deliver(&mut self, artifact: &ExportArtifact) {
        self.delivered.push(artifact.clone());
    }
}

/// Writes artifacts into a directory, for desktop and headless shells.
#[derive(Debug)]
pub struct DirDownloadSink {
    dir: PathBuf,
}

impl DirDownloadSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirDownloadSink {
    fn deliver(&mut self, artifact: &ExportArtifact) {
        let path = self.dir.join(&artifact.filename);
        match fs::write(&path, &artifact.bytes) {
            Ok(()) => debug!(
                path = %path.display(),
                bytes = artifact.bytes.len(),
                "export artifact written"
            ),
            Err(err) => warn!(
                path = %path.display(),
                error = %err,
                "failed to write export artifact"
            ),
        }
    }
}
