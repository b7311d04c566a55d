use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use super::handlers::{core, records, upload};
use super::types::AppState;
use crate::config::Config;
use crate::db::Store;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(records::home))
        .route("/uploadfile/", post(upload::upload_file))
        // Any other method falls through to axum's 405.
        .route(
            "/result_page/",
            get(records::result_page).post(records::result_page_noop),
        )
        .route("/health", get(core::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

pub fn serve(config: &Config, store: Store) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let state = AppState {
        store: Arc::new(store),
        row_limit: config.row_limit,
    };
    let app = build_router(state, config.max_upload_bytes);
    let bind_addr = config.bind.clone();

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind {bind_addr}"))?;
        tracing::info!(addr = %bind_addr, "listening");
        axum::serve(listener, app)
            .await
            .context("http server failed")
    })
}
