pub mod config;
pub mod error;
pub mod pipeline;
pub mod pricing;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use error::*;
pub use pipeline::*;
pub use pricing::*;
pub use types::*;
