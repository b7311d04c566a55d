#![allow(dead_code)]

use rosterd::db::{Store, StoreConfig};
use rosterd::records::{self, Record};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

pub fn open_store(prefix: &str) -> Store {
    let dir = temp_dir(prefix);
    Store::open(StoreConfig {
        db_path: dir.join("rosterd.sqlite3"),
    })
    .expect("open store")
}

pub fn all_records(store: &Store) -> Vec<Record> {
    let conn = store.connect().expect("connect");
    records::list_records(&conn).expect("list records")
}

pub fn seed(store: &Store, rows: &[(i64, &str, i64)]) {
    let conn = store.connect().expect("connect");
    for (id, name, age) in rows {
        records::insert_record(
            &conn,
            &Record {
                id: *id,
                name: name.to_string(),
                age: *age,
            },
        )
        .expect("seed record");
    }
}

/// Header plus `n` rows of the form `N,UserN,2N`.
pub fn numbered_csv(n: usize) -> String {
    let mut csv = String::from("id,name,age\n");
    for i in 1..=n {
        csv.push_str(&format!("{i},User{i},2{i}\n"));
    }
    csv
}
