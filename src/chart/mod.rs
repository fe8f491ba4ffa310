pub mod figure;
pub mod handle;
pub mod host;

pub use figure::{DEFAULT_CHART_TITLE, FigureLayout, FigureMargin, SunburstFigure};
pub use handle::{ChartHandle, ChartHandleRegistry};
pub use host::{ChartHost, NullChartHost};
