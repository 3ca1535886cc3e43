use anyhow::Context;
use std::env;
use std::num::NonZeroU64;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Upper bound on the health request. `None` waits for as long as the handler takes.
    pub request_timeout: Option<Duration>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let request_timeout = match env::var("VERIFY_TIMEOUT_SECS") {
            Ok(secs) => {
                let secs: NonZeroU64 = secs.parse().with_context(|| {
                    format!(
                        "VERIFY_TIMEOUT_SECS must be a positive number of seconds, got {:?}",
                        secs
                    )
                })?;
                Some(Duration::from_secs(secs.get()))
            }
            Err(_) => None,
        };

        Ok(Self {
            request_timeout,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }
}
