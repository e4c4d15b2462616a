use task_api::api::{AppState, create_router};
use task_api::config::{AppConfig, LogFormat};
use task_api::server::Server;
use task_api::telemetry;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let config = AppConfig::from_env();

    telemetry::init(
        config
            .as_ref()
            .map_or(LogFormat::default(), |config| config.log_format),
    );

    if let Err(error) = &dotenv
        && !error.not_found()
    {
        tracing::warn!(%error, "Failed to load .env file");
    }

    let config = match config {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        log_format = %config.log_format,
        request_timeout_secs = config.server.request_timeout.as_secs(),
        "Task API - Starting Server"
    );

    let router = create_router(
        AppState::with_mock_repository(),
        config.server.request_timeout,
    );

    if let Err(error) = Server::new(config.server).run(router).await {
        tracing::error!(%error, "Server terminated with an error");
        std::process::exit(1);
    }
}
