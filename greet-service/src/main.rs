use anyhow::Context;
use greet_service::config::GreetConfig;
use greet_service::Application;
use service_core::observability::{init_metrics, init_tracing, spawn_upkeep, DEFAULT_UPKEEP_INTERVAL};
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GreetConfig::from_env().context("Failed to read configuration")?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );
    spawn_upkeep(init_metrics(), DEFAULT_UPKEEP_INTERVAL);

    let service_span = tracing::info_span!(
        "service",
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
    );

    async move {
        let address = config.bind_address();
        let origins = config.cors.allowed_origins.join(",");
        let app = Application::build(config).await?;

        tracing::info!(address = %address, port = app.port(), allowed_origins = %origins, "Listening");

        app.run_until_stopped().await.map_err(|e| {
            tracing::error!("Server error: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })
    }
    .instrument(service_span)
    .await
}
