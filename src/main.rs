use std::time::Duration;

use axum::Router;
use music_lib::controller;
use music_lib::service::config::Config;
use music_lib::state::AppState;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting server");

    let config = Config::init();
    let state = AppState::init(&config).await;

    let app = Router::new()
        .merge(controller::api_router())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(state);

    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.server_port))
            .await
            .unwrap();

    tracing::info!("Listening on http://127.0.0.1:{}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}
