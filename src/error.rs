use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no genealogy file selected")]
    MissingInput,

    #[error("transport failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend rejected the request with status {status}")]
    Upstream { status: u16 },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("no chart data has been published")]
    NoChart,

    #[error("no live chart instance is registered")]
    NoLiveHandle,

    #[error("image encoding failed: {0}")]
    Encoding(String),
}
