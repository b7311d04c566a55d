use anyhow::Context;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::StoreError;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

/// Handle to the file-backed record store. Holds no open connection; each
/// request acquires its own through [`Store::connect`] and drops it when done.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn open(config: StoreConfig) -> anyhow::Result<Self> {
        let conn = open_db(&config.db_path)
            .with_context(|| format!("opening store at {}", config.db_path.display()))?;
        drop(conn);
        Ok(Self { config })
    }

    pub fn path(&self) -> &Path {
        &self.config.db_path
    }

    /// Opens a connection to an existing store file. A missing file is an
    /// error here rather than being silently recreated empty.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open_with_flags(
            &self.config.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

pub fn open_db(db_path: &Path) -> anyhow::Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(db_path)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users(
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_users_name ON users(name)",
        [],
    )?;

    Ok(conn)
}
