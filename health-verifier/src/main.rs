use health_verifier::{verify, Config, Reporter};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load configuration
    let config = Config::from_env()?;

    // Logs go to stderr so stdout only carries the progress markers
    tracing_subscriber::registry()
        .with(EnvFilter::new(config.log_level.clone()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(limit) = config.request_timeout {
        tracing::info!("Health request bounded to {:?}", limit);
    }

    let mut reporter = Reporter::stdout();

    match verify(Some(mvp_app::app()), &config, &mut reporter).await {
        Ok(verified) => {
            tracing::info!("Verification passed on port {}", verified.port);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!("Verification failed: {}", err);
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
