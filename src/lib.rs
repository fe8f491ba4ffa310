//! famsun-client: client-side pipeline of the Family Sun sunburst viewer.
//!
//! The crate covers the configuration → request → render → export flow:
//! validated render parameters, the multipart generate exchange with the
//! rendering backend, figure composition for a Plotly-style chart host, the
//! live-handle lifecycle, and SVG export with a save-as handoff. The chart
//! engine, the transport and the download destination sit behind trait seams
//! so the same session logic runs in browser shells, desktop shells and
//! headless tests.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod export;
pub mod net;
pub mod telemetry;

pub use api::{SidebarState, ViewerSession};
pub use error::{ViewerError, ViewerResult};
