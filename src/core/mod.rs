pub mod config;
pub mod palette;
pub mod trace;

pub use config::{
    ColorBy, MAX_GENERATION_DEPTH, MIN_GENERATION_DEPTH, RenderConfig, SelectedFile,
};
pub use palette::{COLORWAY_LEN, Palette};
pub use trace::{ChartData, TraceRecord};
