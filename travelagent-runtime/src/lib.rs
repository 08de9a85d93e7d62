pub mod config_store;
pub mod defaults;
pub mod env;
pub mod runtime_engine;
pub mod transport;
