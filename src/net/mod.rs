pub mod client;
pub(crate) mod contract;

pub use client::{BackendConfig, DEFAULT_BASE_URL, GenerateBackend, HttpBackend, RenderRequest};
