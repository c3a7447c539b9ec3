pub mod config;
pub mod error;
pub mod face;
pub mod fetch;
pub mod handlers;
pub mod payload;
pub mod server;
pub mod state;

// Re-exports for convenience
pub use config::{BackendKind, Config};
pub use error::{ServiceError, ServiceResult};
pub use state::{AppState, Readiness, ReadinessSignal};
