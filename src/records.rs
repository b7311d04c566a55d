use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

pub fn list_records(conn: &Connection) -> Result<Vec<Record>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, age FROM users ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Record {
                id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find_record(conn: &Connection, id: i64) -> Result<Option<Record>, StoreError> {
    let found = conn
        .query_row(
            "SELECT id, name, age FROM users WHERE id = ?",
            [id],
            |row| {
                Ok(Record {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    age: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(found)
}

pub fn insert_record(conn: &Connection, record: &Record) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO users(id, name, age) VALUES(?, ?, ?)",
        (record.id, &record.name, record.age),
    )?;
    Ok(())
}

pub fn update_record(conn: &Connection, record: &Record) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE users SET name = ?, age = ? WHERE id = ?",
        (&record.name, record.age, record.id),
    )?;
    Ok(())
}

pub fn count_records(conn: &Connection) -> Result<i64, StoreError> {
    let n = conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
    Ok(n)
}
