pub mod agent_api;
pub mod client;
pub mod parse;
pub mod request;
pub mod runtime;

pub use client::AgentClient;
