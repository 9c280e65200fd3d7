use tracing_subscriber::EnvFilter;

use moodscope_lambda::build_router;
use moodscope_lambda::config::ServiceConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        default_locale = %config.default_locale,
        strict_answers = config.strict_answers,
        "moodscope api starting"
    );

    lambda_http::run(build_router(config))
        .await
        .map_err(|e| eyre::eyre!(e))
}
