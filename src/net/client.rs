use std::time::Duration;

use reqwest::multipart;
use tracing::{debug, warn};

use crate::core::{ChartData, ColorBy, Palette, RenderConfig, SelectedFile};
use crate::error::{ViewerError, ViewerResult};

use super::contract::parse_generate_response;

/// Fixed external endpoint of the rendering backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const UPLOAD_PATH: &str = "/upload";

const FIELD_FILE: &str = "file";
const FIELD_GENERATIONS: &str = "nb_of_generations";
const FIELD_COLOR_BY: &str = "color_by";
const FIELD_PALETTE: &str = "palette";

/// Immutable snapshot of the parameters sent with one generate exchange.
///
/// Taken at the moment generation is triggered; later configuration edits
/// do not affect an in-flight request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    file: SelectedFile,
    generation_depth: u32,
    color_by: ColorBy,
    palette: Palette,
}

impl RenderRequest {
    /// Snapshots `config`. Fails with `MissingInput` when no file is
    /// selected.
    pub fn from_config(config: &RenderConfig) -> ViewerResult<Self> {
        let file = config
            .selected_file()
            .cloned()
            .ok_or(ViewerError::MissingInput)?;
        Ok(Self {
            file,
            generation_depth: config.generation_depth(),
            color_by: config.color_by(),
            palette: config.palette(),
        })
    }

    #[must_use]
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    #[must_use]
    pub fn generation_depth(&self) -> u32 {
        self.generation_depth
    }

    #[must_use]
    pub fn color_by(&self) -> ColorBy {
        self.color_by
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }
}

/// Connection settings for the rendering backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// Whole-request deadline. `None` leaves a hung connection pending
    /// indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: None,
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// One asynchronous generate exchange with the rendering backend.
///
/// Implementations classify failures through `ViewerError` and never retry;
/// surfacing the failure is the caller's job.
#[allow(async_fn_in_trait)]
pub trait GenerateBackend {
    async fn generate(&self, request: &RenderRequest) -> ViewerResult<ChartData>;
}

/// `reqwest`-backed implementation of the upload wire contract.
pub struct HttpBackend {
    config: BackendConfig,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> ViewerResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("famsun-client/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    fn upload_url(&self) -> String {
        format!("{}{UPLOAD_PATH}", self.config.base_url.trim_end_matches('/'))
    }
}

impl GenerateBackend for HttpBackend {
    async fn generate(&self, request: &RenderRequest) -> ViewerResult<ChartData> {
        let url = self.upload_url();
        let part = multipart::Part::bytes(request.file().bytes().to_vec())
            .file_name(request.file().name().to_owned());
        let form = multipart::Form::new()
            .part(FIELD_FILE, part)
            .text(FIELD_GENERATIONS, request.generation_depth().to_string())
            .text(FIELD_COLOR_BY, request.color_by().as_str())
            .text(FIELD_PALETTE, request.palette().as_str());

        debug!(
            url = %url,
            file = request.file().name(),
            generation_depth = request.generation_depth(),
            color_by = %request.color_by(),
            palette = %request.palette(),
            "posting generate request"
        );

        let response = self.http.post(url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "backend rejected generate request");
            return Err(ViewerError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_generate_response(&body)
    }
}
