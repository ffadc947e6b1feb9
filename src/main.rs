use jokes_server::config::JokesConfig;
use jokes_server::database::sqlite::SqliteRepository;
use jokes_server::{app, db, telemetry, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = JokesConfig::from_env()?;
    let shared_config = Arc::new(config.clone());

    let pool = db::init_pool(&config.database_url, config.max_connections).await?;

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
        config: shared_config,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
