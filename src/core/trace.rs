use serde::{Deserialize, Serialize};

/// Opaque structured record describing one data series for the chart engine.
///
/// The sunburst schema (labels, parents, values, marker colors) is owned by
/// the chart library and the rendering backend; the client forwards records
/// verbatim and never reorders or rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceRecord(pub serde_json::Value);

/// Chart payload published after a successful generate exchange.
///
/// Owned by the session until replaced by the next generate call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub traces: Vec<TraceRecord>,
    pub title: Option<String>,
}

impl ChartData {
    #[must_use]
    pub fn new(traces: Vec<TraceRecord>) -> Self {
        Self {
            traces,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
