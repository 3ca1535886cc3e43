pub mod config;
pub mod error;
pub mod handler;
pub mod probe;
pub mod report;
pub mod verify;

// Re-exports for convenience
pub use config::Config;
pub use error::{VerifyError, VerifyResult};
pub use handler::{resolve_handler, Listen, ServerHandle};
pub use report::Reporter;
pub use verify::{verify, Verified};
