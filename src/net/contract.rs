//! Response contract of the generate exchange.

use serde::Deserialize;

use crate::core::{ChartData, TraceRecord};
use crate::error::{ViewerError, ViewerResult};

/// Success body: `{ "data": [<trace>, ...], "title"?: string }`.
///
/// Unknown fields are tolerated; the trace schema itself belongs to the
/// backend and the chart library.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    data: Vec<TraceRecord>,
    #[serde(default)]
    title: Option<String>,
}

pub(crate) fn parse_generate_response(body: &str) -> ViewerResult<ChartData> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(|e| {
        ViewerError::MalformedResponse(format!("failed to parse generate response: {e}"))
    })?;
    Ok(ChartData {
        traces: response.data,
        title: response.title,
    })
}
