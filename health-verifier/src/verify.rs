use crate::config::Config;
use crate::error::VerifyResult;
use crate::handler::{resolve_handler, Listen};
use crate::probe::{check_status, parse_payload, Probe};
use crate::report::Reporter;
use common::HEALTH_PATH;
use std::io::Write;

/// Outcome of a passing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verified {
    /// Port the OS assigned to the handler for this run
    pub port: u16,
}

/// Run the health check against `entry`
///
/// Steps run strictly in order and the first failure ends the run:
/// 1. the entry point must provide a handler
/// 2. the handler is bound to an ephemeral loopback port
/// 3. one `GET /health` is sent and the full body collected
/// 4. the body must be a JSON object whose `status` is `"healthy"`
/// 5. the listener is closed
///
/// Each failure prints exactly one marker through `reporter`. On failure the
/// listener is only signalled to close, not awaited.
pub async fn verify<H, W>(
    entry: Option<H>,
    config: &Config,
    reporter: &mut Reporter<W>,
) -> VerifyResult<Verified>
where
    H: Listen,
    W: Write,
{
    reporter.banner();

    let handler = resolve_handler(entry).map_err(|err| reporter.fail(err))?;
    tracing::debug!("Request handler resolved");
    reporter.export_ok();

    let server = handler.listen(0).await.map_err(|err| reporter.fail(err))?;
    let port = server.port();
    let url = format!("http://localhost:{}{}", port, HEALTH_PATH);

    match check_health(&url, config).await {
        Ok(()) => {
            reporter.health_passed();
            server.close().await;
            reporter.all_passed();
            Ok(Verified { port })
        }
        Err(err) => {
            let err = reporter.fail(err);
            server.close_detached();
            Err(err)
        }
    }
}

async fn check_health(url: &str, config: &Config) -> VerifyResult<()> {
    let probe = Probe::new(config.request_timeout)?;
    let response = probe.fetch(url).await?;

    if !response.status.is_success() {
        tracing::warn!("Health endpoint answered {}", response.status);
    }

    let payload = parse_payload(&response.body)?;
    check_status(&payload)
}
