pub mod core;
pub mod records;
pub mod upload;

use rusqlite::Connection;

use super::error::ApiError;
use super::types::AppState;

/// Runs `f` on a blocking thread with a connection opened for this request
/// alone. The connection is closed when `f` returns, whatever the outcome.
pub(super) async fn with_connection<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut Connection) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || -> Result<T, ApiError> {
        let mut conn = store.connect()?;
        f(&mut conn)
    })
    .await?
}
