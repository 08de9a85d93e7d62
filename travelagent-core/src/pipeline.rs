use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of the visualized backend graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Orchestrator,
    FlightSearch,
    HotelSearch,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 3] = [
        PipelineStage::Orchestrator,
        PipelineStage::FlightSearch,
        PipelineStage::HotelSearch,
    ];

    /// Node id as used by the agent server.
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Orchestrator => "orchestrator",
            PipelineStage::FlightSearch => "flight_search",
            PipelineStage::HotelSearch => "hotel_search",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PipelineStage::Orchestrator => "Orchestrator",
            PipelineStage::FlightSearch => "Flight Search",
            PipelineStage::HotelSearch => "Hotel Search",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    #[default]
    Idle,
    Running,
    Done,
    Skipped,
    Error,
}

pub const LABEL_IDLE: &str = "idle";
pub const LABEL_ROUTING: &str = "routing";
pub const LABEL_QUEUED: &str = "queued";
pub const LABEL_DONE: &str = "done";
pub const LABEL_SKIPPED: &str = "skipped";
pub const LABEL_ERROR: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub state: NodeState,
    pub label: String,
}

impl NodeStatus {
    pub fn new(state: NodeState, label: impl Into<String>) -> Self {
        Self {
            state,
            label: label.into(),
        }
    }

    pub fn idle() -> Self {
        Self::new(NodeState::Idle, LABEL_IDLE)
    }

    pub fn running(label: impl Into<String>) -> Self {
        Self::new(NodeState::Running, label)
    }

    pub fn done() -> Self {
        Self::new(NodeState::Done, LABEL_DONE)
    }

    pub fn skipped() -> Self {
        Self::new(NodeState::Skipped, LABEL_SKIPPED)
    }

    pub fn error() -> Self {
        Self::new(NodeState::Error, LABEL_ERROR)
    }

    /// `done` when the stage produced items, `skipped` otherwise.
    pub fn for_results(has_items: bool) -> Self {
        if has_items { Self::done() } else { Self::skipped() }
    }
}

impl Default for NodeStatus {
    fn default() -> Self {
        Self::idle()
    }
}
