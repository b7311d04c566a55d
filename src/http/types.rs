use serde::Deserialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::db::Store;
use crate::ingest::ColumnMapping;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub row_limit: usize,
}

/// Column offsets as they arrive on the wire. Signed so a negative offset
/// can be reported instead of failing to deserialize.
#[derive(Debug, Default, Deserialize)]
pub struct MappingParams {
    pub id_col: Option<i64>,
    pub name_col: Option<i64>,
    pub age_col: Option<i64>,
}

impl MappingParams {
    /// Applies a multipart form value; form fields win over query params.
    pub fn set_from_field(&mut self, name: &str, text: &str) -> Result<(), ApiError> {
        let value = text.trim().parse::<i64>().map_err(|_| {
            ApiError::BadRequest(format!("{name} must be an integer, got {text:?}"))
        })?;
        match name {
            "id_col" => self.id_col = Some(value),
            "name_col" => self.name_col = Some(value),
            "age_col" => self.age_col = Some(value),
            _ => {}
        }
        Ok(())
    }

    pub fn into_mapping(self) -> Result<ColumnMapping, ApiError> {
        let defaults = ColumnMapping::default();
        Ok(ColumnMapping {
            id_col: offset("id_col", self.id_col, defaults.id_col)?,
            name_col: offset("name_col", self.name_col, defaults.name_col)?,
            age_col: offset("age_col", self.age_col, defaults.age_col)?,
        })
    }
}

fn offset(name: &str, value: Option<i64>, default: usize) -> Result<usize, ApiError> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v).map_err(|_| {
            ApiError::BadRequest(format!("{name} must be a non-negative integer, got {v}"))
        }),
    }
}
