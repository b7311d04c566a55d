use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingColumn { index: usize, len: usize },
    TypeConversion { field: &'static str, value: String },
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::MissingColumn { .. } => "missing_column",
            SkipReason::TypeConversion { .. } => "bad_integer",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingColumn { index, len } => {
                write!(f, "column {index} out of range for row with {len} fields")
            }
            SkipReason::TypeConversion { field, value } => {
                write!(f, "{field} must be an integer, got {value:?}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Inserted,
    Updated,
    Skipped(SkipReason),
}

#[derive(Debug, Clone)]
pub struct RowWarning {
    pub row: usize,
    pub code: &'static str,
    pub message: String,
}

/// Per-upload tally. Logged when the upload finishes; never returned to the
/// HTTP caller.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub upload_id: Uuid,
    pub rows_seen: usize,
    pub rows_below_threshold: usize,
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
    pub warnings: Vec<RowWarning>,
}

impl IngestReport {
    pub fn new(upload_id: Uuid) -> Self {
        Self {
            upload_id,
            rows_seen: 0,
            rows_below_threshold: 0,
            inserted: 0,
            updated: 0,
            skipped: 0,
            warnings: Vec::new(),
        }
    }

    pub fn record(&mut self, row: usize, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Inserted => self.inserted += 1,
            RowOutcome::Updated => self.updated += 1,
            RowOutcome::Skipped(reason) => {
                self.skipped += 1;
                self.warnings.push(RowWarning {
                    row,
                    code: reason.code(),
                    message: reason.to_string(),
                });
            }
        }
    }
}
