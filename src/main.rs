use sqlx::postgres::PgPoolOptions;

use omni_api::config::{AppConfig, Environment};
use omni_api::handlers;
use omni_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!(environment = ?config.environment, "starting omni-api");

    if matches!(config.environment, Environment::Production | Environment::Staging)
        && config.security.jwt_secret.is_empty()
    {
        panic!("JWT_SECRET must be set outside development");
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .expect("failed to connect to database");

    let state = AppState::postgres(&config, pool);
    let app = handlers::router(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("omni-api listening on http://{}", bind_addr);
    axum::serve(listener, app).await.expect("server");
}
