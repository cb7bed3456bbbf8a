//! Database schema and connection management

use crate::error::LotoError;
use crate::DB_PATH_ENV_VAR;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for draw data.
///
/// Mutations take `&mut self` and reads take `&self`, so one owner at a
/// time can write while the borrow checker keeps reads consistent.
pub struct DrawDatabase {
    pub(crate) conn: Connection,
}

impl DrawDatabase {
    /// Open the database at the default path and ensure tables exist.
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::with_path(&db_path)
    }

    /// Open the database at an explicit path and ensure tables exist.
    pub fn with_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open a fresh in-memory database, one isolated store per call.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file.
    ///
    /// `LOTO90_DB` overrides the default platform data directory.
    fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }

        let data_dir = data_dir().ok_or_else(|| LotoError::DataDir {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("loto90").join("draws.db"))
    }

    /// Initialize the database schema.
    ///
    /// `AUTOINCREMENT` keeps draw ids strictly increasing across the life
    /// of the file, so a deleted id is never handed out again.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS draws (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                draw_date TEXT NOT NULL,
                ball1 INTEGER NOT NULL,
                ball2 INTEGER NOT NULL,
                ball3 INTEGER NOT NULL,
                ball4 INTEGER NOT NULL,
                ball5 INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_draws_category_date
             ON draws(category, draw_date)",
            [],
        )?;

        Ok(())
    }
}
