#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use famsun_client::ViewerResult;
use famsun_client::api::ViewerSession;
use famsun_client::core::{ChartData, SelectedFile, TraceRecord};
use famsun_client::net::{GenerateBackend, RenderRequest};

/// Scripted backend double: pops one queued outcome per generate call and
/// records every request it sees.
pub struct ScriptedBackend {
    outcomes: RefCell<VecDeque<ViewerResult<ChartData>>>,
    requests: RefCell<Vec<RenderRequest>>,
}

impl ScriptedBackend {
    pub fn new(outcomes: Vec<ViewerResult<ChartData>>) -> Self {
        Self {
            outcomes: RefCell::new(VecDeque::from(outcomes)),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<RenderRequest> {
        self.requests.borrow().clone()
    }
}

impl GenerateBackend for ScriptedBackend {
    async fn generate(&self, request: &RenderRequest) -> ViewerResult<ChartData> {
        self.requests.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .expect("backend called more times than scripted")
    }
}

pub fn session_with(outcomes: Vec<ViewerResult<ChartData>>) -> ViewerSession<ScriptedBackend> {
    ViewerSession::new(ScriptedBackend::new(outcomes))
}

pub fn trace(label: &str) -> TraceRecord {
    TraceRecord(serde_json::json!({
        "type": "sunburst",
        "labels": [label],
        "parents": [""],
        "values": [100],
        "branchvalues": "total",
        "rotation": -30,
    }))
}

pub fn gedcom_file() -> SelectedFile {
    SelectedFile::new(
        "famille.ged",
        b"0 HEAD\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME Jean /Dupont/\n0 TRLR\n".to_vec(),
    )
}
