use axum::extract::State;
use axum::response::Html;

use super::with_connection;
use crate::http::error::ApiError;
use crate::http::render;
use crate::http::types::AppState;
use crate::records::{self, Record};

async fn load_all(state: &AppState) -> Result<Vec<Record>, ApiError> {
    with_connection(state, |conn| Ok(records::list_records(conn)?)).await
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let users = load_all(&state).await?;
    Ok(Html(render::index_page(&users)))
}

pub async fn result_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let users = load_all(&state).await?;
    Ok(Html(render::result_page(&users)))
}

// POST is accepted and ignored.
pub async fn result_page_noop() {}
