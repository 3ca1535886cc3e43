// Module declarations for HTTP handlers
pub mod fallback;
pub mod health;

// Re-exports
pub use fallback::fallback_handler;
pub use health::health_handler;
