use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use travelagent_core::error::TransportError;
use travelagent_core::pipeline::{LABEL_QUEUED, LABEL_ROUTING, NodeStatus, PipelineStage};
use travelagent_core::types::{FlightOption, HotelOption, TripResponse};

pub const QUERY_WAITING: &str = "Waiting for a request.";
pub const QUERY_NOT_AVAILABLE: &str = "not available";
pub const NO_STRUCTURED_RESULTS: &str = "No structured results.";
pub const STATUS_UNKNOWN: &str = "unknown";
pub const INLINE_THINKING: &str = "Thinking…";
pub const INLINE_RETRY: &str = "There was an error. Please try again.";

/// Live request-lifecycle state read by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSession {
    pub message: String,
    pub is_loading: bool,
    pub stage_statuses: BTreeMap<PipelineStage, NodeStatus>,
    pub elapsed_seconds: f64,
    pub result_query_line: String,
    pub result_answer: String,
    pub status_line: String,
    pub flights: Vec<FlightOption>,
    pub hotels: Vec<HotelOption>,
    pub inline_status_text: String,
    pub show_inline_status: bool,
}

impl RequestSession {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_loading: false,
            stage_statuses: PipelineStage::ALL
                .into_iter()
                .map(|s| (s, NodeStatus::idle()))
                .collect(),
            elapsed_seconds: 0.0,
            result_query_line: QUERY_WAITING.into(),
            result_answer: String::new(),
            status_line: status_line("idle", 0.0),
            flights: Vec::new(),
            hotels: Vec::new(),
            inline_status_text: INLINE_THINKING.into(),
            show_inline_status: false,
        }
    }

    /// Never fails: a stage without an entry reads as idle.
    pub fn stage_status(&self, stage: PipelineStage) -> NodeStatus {
        self.stage_statuses.get(&stage).cloned().unwrap_or_default()
    }

    pub fn stage_status_by_name(&self, name: &str) -> NodeStatus {
        PipelineStage::from_name(name)
            .map(|s| self.stage_status(s))
            .unwrap_or_default()
    }

    fn set_stage(&mut self, stage: PipelineStage, status: NodeStatus) {
        let prev = self.stage_statuses.insert(stage, status.clone());
        if prev.as_ref() != Some(&status) {
            log::info!(
                "stage {}: {} -> {}",
                stage,
                prev.map(|p| p.label).unwrap_or_else(|| "idle".into()),
                status.label
            );
        }
    }

    /// Pre-call transition: loading, cleared results, stages running.
    pub(crate) fn begin(&mut self) {
        self.is_loading = true;
        self.show_inline_status = true;
        self.inline_status_text = INLINE_THINKING.into();
        self.result_answer.clear();
        self.result_query_line.clear();
        self.flights.clear();
        self.hotels.clear();

        self.set_stage(PipelineStage::Orchestrator, NodeStatus::running(LABEL_ROUTING));
        self.set_stage(PipelineStage::FlightSearch, NodeStatus::running(LABEL_QUEUED));
        self.set_stage(PipelineStage::HotelSearch, NodeStatus::running(LABEL_QUEUED));
    }

    pub(crate) fn complete(&mut self, resp: TripResponse, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        self.elapsed_seconds = secs;

        self.result_query_line = format!(
            "Query: {}",
            resp.query.as_deref().unwrap_or(QUERY_NOT_AVAILABLE)
        );
        self.flights = resp.flights.unwrap_or_default();
        self.hotels = resp.hotels.unwrap_or_default();

        // Structured results win over free text.
        self.result_answer = if self.flights.is_empty() && self.hotels.is_empty() {
            resp.answer
                .unwrap_or_else(|| NO_STRUCTURED_RESULTS.to_string())
        } else {
            String::new()
        };

        self.status_line = status_line(resp.status.as_deref().unwrap_or(STATUS_UNKNOWN), secs);
        self.show_inline_status = false;

        self.set_stage(PipelineStage::Orchestrator, NodeStatus::done());
        self.set_stage(
            PipelineStage::FlightSearch,
            NodeStatus::for_results(!self.flights.is_empty()),
        );
        self.set_stage(
            PipelineStage::HotelSearch,
            NodeStatus::for_results(!self.hotels.is_empty()),
        );
        self.is_loading = false;
    }

    pub(crate) fn fail(&mut self, err: &TransportError, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        self.elapsed_seconds = secs;

        self.status_line = error_line(&err.to_string(), secs);
        self.inline_status_text = INLINE_RETRY.into();
        self.show_inline_status = true;

        for stage in PipelineStage::ALL {
            self.set_stage(stage, NodeStatus::error());
        }
        self.is_loading = false;
    }
}

impl Default for RequestSession {
    fn default() -> Self {
        Self::new(String::new())
    }
}

pub fn status_line(status: &str, secs: f64) -> String {
    format!("Status: {status} | Time: {secs:.1} s")
}

pub fn error_line(cause: &str, secs: f64) -> String {
    format!("Error: {cause} | Time: {secs:.1} s")
}
