use axum::extract::{Multipart, Query, State};
use axum::response::Redirect;

use super::with_connection;
use crate::http::error::ApiError;
use crate::http::types::{AppState, MappingParams};
use crate::ingest;

pub const RESULT_PAGE: &str = "/result_page/";

/// POST /uploadfile/
///
/// Reads the `file` part and optional `id_col`/`name_col`/`age_col` parts,
/// ingests the upload, then redirects (303) to the result page.
pub async fn upload_file(
    State(state): State<AppState>,
    Query(mut params): Query<MappingParams>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart field: {e}")))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        match name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid file field: {e}")))?;
                file = Some(bytes.to_vec());
            }
            "id_col" | "name_col" | "age_col" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid {name} field: {e}")))?;
                params.set_from_field(&name, &text)?;
            }
            _ => {}
        }
    }

    let bytes = file.ok_or_else(|| ApiError::BadRequest("missing field: file".to_string()))?;
    let mapping = params.into_mapping()?;
    let limit = state.row_limit;

    let report = with_connection(&state, move |conn| {
        Ok(ingest::ingest_upload(conn, &bytes, &mapping, limit)?)
    })
    .await?;
    tracing::debug!(
        upload_id = %report.upload_id,
        warnings = report.warnings.len(),
        "redirecting to result page"
    );

    Ok(Redirect::to(RESULT_PAGE))
}
