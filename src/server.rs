use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::Config, error, info, success};

/// Builds the application router with the shared configuration attached.
pub fn app(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/search", post(api::search))
        .route("/health", get(api::health))
        .layer(Extension(config))
}

/// Starts the HTTP server and serves requests until the process exits.
pub async fn start_server(config: Arc<Config>) {
    let addr = match SocketAddr::from_str(&config.server_address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Binding server to {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    success!("Listening on http://{}", addr);
    axum::serve(listener, app(config)).await.unwrap();
}
