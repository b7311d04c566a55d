use clap::Parser;
use std::path::PathBuf;

use crate::db::StoreConfig;
use crate::ingest::DEFAULT_ROW_LIMIT;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "rosterd", about = "User record list with CSV bulk upsert")]
pub struct Config {
    /// SQLite file holding the users table.
    #[arg(long, default_value = "./rosterd.sqlite3", env = "ROSTERD_DB_PATH")]
    pub db_path: PathBuf,

    #[arg(long, default_value = "127.0.0.1:8000", env = "ROSTERD_BIND")]
    pub bind: String,

    /// Number of leading data rows an upload passes over before applying any.
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT, env = "ROSTERD_ROW_LIMIT")]
    pub row_limit: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "ROSTERD_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            db_path: self.db_path.clone(),
        }
    }
}
