mod test_support;

use rosterd::ingest::{self, ColumnMapping};
use std::io::Write;
use std::sync::{Arc, Mutex};
use test_support::{all_records, open_store, seed};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8(logs.0.lock().expect("log buffer").clone()).expect("utf8 logs");
    (out, text)
}

#[test]
fn non_integer_row_is_logged_as_error_and_later_rows_apply() {
    let store = open_store("rosterd-logging-bad-age");
    let mut conn = store.connect().expect("connect");

    let (report, logs) = with_captured_logs(|| {
        ingest::ingest_upload(
            &mut conn,
            b"id,name,age\n7,Alice,thirtytwo\n8,Bob,40\n",
            &ColumnMapping::default(),
            0,
        )
        .expect("ingest")
    });

    assert_eq!(report.skipped, 1);
    assert_eq!(all_records(&store).len(), 1);
    let line = logs
        .lines()
        .find(|l| l.contains("skipping row"))
        .unwrap_or_else(|| panic!("no skip logged:\n{logs}"));
    assert!(line.contains("ERROR"), "line: {line}");
    assert!(line.contains("row=2"), "line: {line}");
    assert!(line.contains("thirtytwo"), "line: {line}");
    assert!(logs.contains("upload committed"), "logs:\n{logs}");
}

#[test]
fn overwrite_of_existing_record_is_logged_as_warning() {
    let store = open_store("rosterd-logging-overwrite");
    seed(&store, &[(3, "Old", 10)]);
    let mut conn = store.connect().expect("connect");

    let (report, logs) = with_captured_logs(|| {
        ingest::ingest_upload(
            &mut conn,
            b"id,name,age\n3,New,11\n4,Fresh,12\n",
            &ColumnMapping::default(),
            0,
        )
        .expect("ingest")
    });

    assert_eq!(report.updated, 1);
    let warnings: Vec<&str> = logs
        .lines()
        .filter(|l| l.contains("record already exists, overwriting"))
        .collect();
    assert_eq!(warnings.len(), 1, "logs:\n{logs}");
    assert!(warnings[0].contains("WARN"), "line: {}", warnings[0]);
    assert!(warnings[0].contains("id=3"), "line: {}", warnings[0]);
    assert!(warnings[0].contains("row=2"), "line: {}", warnings[0]);
}
