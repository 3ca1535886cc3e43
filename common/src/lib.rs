// Re-export commonly used items
pub mod types;

// Convenience re-exports
pub use types::{HealthResponse, HEALTHY, HEALTH_PATH};
