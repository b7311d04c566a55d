use rusqlite::Connection;

use super::outcome::{RowOutcome, SkipReason};
use super::row::{extract_row, ColumnMapping, RawRow};
use crate::error::StoreError;
use crate::records::{self, Record};

fn coerce_int(field: &'static str, raw: &str) -> Result<i64, SkipReason> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SkipReason::TypeConversion {
            field,
            value: raw.to_string(),
        })
}

/// Upserts one candidate row by id. Conversion failures come back as
/// `Skipped`; only store failures are errors.
pub fn apply_row(conn: &Connection, row_no: usize, raw: &RawRow) -> Result<RowOutcome, StoreError> {
    let id = match coerce_int("id", &raw.id) {
        Ok(v) => v,
        Err(reason) => return Ok(RowOutcome::Skipped(reason)),
    };
    let age = match coerce_int("age", &raw.age) {
        Ok(v) => v,
        Err(reason) => return Ok(RowOutcome::Skipped(reason)),
    };
    let record = Record {
        id,
        name: raw.name.clone(),
        age,
    };

    if records::find_record(conn, id)?.is_some() {
        tracing::warn!(id, row = row_no, "record already exists, overwriting");
        records::update_record(conn, &record)?;
        Ok(RowOutcome::Updated)
    } else {
        records::insert_record(conn, &record)?;
        Ok(RowOutcome::Inserted)
    }
}

pub fn evaluate_row(
    conn: &Connection,
    row_no: usize,
    fields: &[String],
    mapping: &ColumnMapping,
) -> Result<RowOutcome, StoreError> {
    let outcome = match extract_row(fields, mapping) {
        Ok(raw) => apply_row(conn, row_no, &raw)?,
        Err(reason) => RowOutcome::Skipped(reason),
    };
    if let RowOutcome::Skipped(reason) = &outcome {
        tracing::error!(row = row_no, code = reason.code(), error = %reason, "skipping row");
    }
    Ok(outcome)
}
