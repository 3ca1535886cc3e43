pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

// Re-exports for convenience
pub use config::Config;
pub use error::{AppError, AppResult};
pub use server::app;

/// Name reported in the `service` field of the health payload
pub const SERVICE_NAME: &str = "mvp-app";
