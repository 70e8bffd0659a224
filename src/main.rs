mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::RelayConfig::from_env().expect("invalid relay configuration");
    let state = state::AppState::new(&config).expect("upstream client init failed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, bind_addr = %config.bind_addr, "docview relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
