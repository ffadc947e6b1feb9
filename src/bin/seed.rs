use jokes_server::config::JokesConfig;
use jokes_server::database::sqlite::SqliteRepository;
use jokes_server::{db, seed, telemetry};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = match JokesConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(seed::EXIT_FAILURE);
        }
    };

    let pool = match db::init_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::from(seed::EXIT_FAILURE);
        }
    };

    let repo = SqliteRepository::new(pool);
    ExitCode::from(seed::run(&repo).await)
}
