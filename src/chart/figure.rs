use serde::Serialize;

use crate::core::{ChartData, Palette, TraceRecord};

/// Title used when the backend response carries none.
pub const DEFAULT_CHART_TITLE: &str = "Family Tree Sunburst";

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Plot margins in pixels, Plotly layout shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FigureMargin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

impl Default for FigureMargin {
    fn default() -> Self {
        // Top margin reserves the title band; the rings fill everything else.
        Self {
            l: 0,
            r: 0,
            b: 0,
            t: 40,
        }
    }
}

/// Layout half of the figure payload handed to the chart host.
///
/// Field names match the Plotly layout keys so the struct serializes
/// directly into what a Plotly-style host consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub margin: FigureMargin,
    pub title: String,
    pub sunburstcolorway: Vec<String>,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
}

/// Complete mountable figure: the published traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstFigure {
    pub data: Vec<TraceRecord>,
    pub layout: FigureLayout,
}

impl SunburstFigure {
    /// Composes the mountable figure for `data`, with `palette` applied as
    /// the categorical colorway.
    #[must_use]
    pub fn compose(data: &ChartData, palette: Palette) -> Self {
        let title = data
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_CHART_TITLE.to_owned());
        Self {
            data: data.traces.clone(),
            layout: FigureLayout {
                margin: FigureMargin::default(),
                title,
                sunburstcolorway: palette
                    .colorway()
                    .iter()
                    .map(|color| (*color).to_owned())
                    .collect(),
                paper_bgcolor: TRANSPARENT.to_owned(),
                plot_bgcolor: TRANSPARENT.to_owned(),
            },
        }
    }
}
