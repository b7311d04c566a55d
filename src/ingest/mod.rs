//! CSV upload ingestion.
//!
//! The first line of an upload is a header and is never inspected. Data rows
//! are numbered from 2, and only rows numbered above `limit + 1` are applied:
//! the first `limit` data rows are passed over. Every applied row runs inside
//! one transaction, so a fatal error leaves the store as it was.

mod outcome;
mod policy;
mod row;

pub use outcome::{IngestReport, RowOutcome, RowWarning, SkipReason};
pub use policy::{apply_row, evaluate_row};
pub use row::{extract_row, parse_csv_record, split_lines, ColumnMapping, RawRow};

use rusqlite::{Connection, TransactionBehavior};
use uuid::Uuid;

use crate::error::StoreError;

pub const DEFAULT_ROW_LIMIT: usize = 50;

const FIRST_DATA_ROW: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("upload is not valid utf-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("upload has no header row")]
    MissingHeader,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for IngestError {
    fn from(e: rusqlite::Error) -> Self {
        IngestError::Store(StoreError::from(e))
    }
}

pub fn ingest_upload(
    conn: &mut Connection,
    bytes: &[u8],
    mapping: &ColumnMapping,
    limit: usize,
) -> Result<IngestReport, IngestError> {
    let upload_id = Uuid::new_v4();
    let _span = tracing::info_span!("ingest", %upload_id).entered();

    let text = std::str::from_utf8(bytes)?;
    let mut lines = split_lines(text).into_iter();
    if lines.next().is_none() {
        return Err(IngestError::MissingHeader);
    }

    // Write lock before the first read; concurrent uploads wait on busy_timeout.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let mut report = IngestReport::new(upload_id);
    for (offset, line) in lines.enumerate() {
        let row_no = offset + FIRST_DATA_ROW;
        report.rows_seen += 1;
        if row_no <= limit.saturating_add(1) {
            report.rows_below_threshold += 1;
            continue;
        }
        let fields = parse_csv_record(line);
        let outcome = evaluate_row(&tx, row_no, &fields, mapping)?;
        report.record(row_no, outcome);
    }
    tx.commit()?;

    tracing::info!(
        rows_seen = report.rows_seen,
        below_threshold = report.rows_below_threshold,
        inserted = report.inserted,
        updated = report.updated,
        skipped = report.skipped,
        "upload committed"
    );
    Ok(report)
}
