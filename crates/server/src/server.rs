use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::{expenses, groups, summary, wallets};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

#[derive(Serialize)]
struct Banner {
    message: &'static str,
    endpoints: &'static [&'static str],
}

/// Service banner listing the available endpoints.
async fn root() -> Json<Banner> {
    Json(Banner {
        message: "Splitfund API is running!",
        endpoints: &[
            "POST /group/create",
            "POST /wallet/add",
            "POST /expense/split",
            "GET /group/summary/{group_id}",
            "GET /group/summary/detailed/{group_id}",
        ],
    })
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/group/create", post(groups::create))
        .route("/wallet/add", post(wallets::add_money))
        .route("/expense/split", post(expenses::split))
        .route("/group/summary/{group_id}", get(summary::group_summary))
        .route(
            "/group/summary/detailed/{group_id}",
            get(summary::group_summary_detailed),
        )
        // Development-friendly CORS for browser clients; lock down for production.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:5500").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
