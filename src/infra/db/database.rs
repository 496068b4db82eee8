//! SQLite database setup and connection management for the flight search store.
//! Handles database initialization, schema creation, snapshot seeding, and
//! connection management.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::infra::db::repository::{AirportRepository, FavoriteRepository};
use crate::infra::db::snapshot;

/// Schema version stamped into the SQLite `user_version` pragma. A store
/// carrying any other non-zero version is destroyed and recreated from the
/// bundled snapshot; there is no incremental migration path.
const SCHEMA_VERSION: i32 = 1;

/// Database wrapper that manages the SQLite connection.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create or open the database at the default location.
    pub fn open() -> Result<Self> {
        let path = Self::default_path();
        Self::open_at(path)
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// The schema is created but the airport table is left empty, matching
    /// the test harness convention of inserting fixtures explicitly.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init(false)?;
        Ok(db)
    }

    /// Create or open the database at a specific path.
    ///
    /// A fresh store is seeded from the bundled snapshot. A store whose
    /// schema version does not match [`SCHEMA_VERSION`] is destroyed and
    /// recreated from the snapshot.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init(true)?;
        Ok(db)
    }

    /// Get the default database path.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FLIGHTSEARCH_DB_PATH") {
            return PathBuf::from(path);
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(home) = home::home_dir() {
                return home
                    .join("Library")
                    .join("Application Support")
                    .join("FlightSearch")
                    .join("flight_search.db");
            }
        }

        #[cfg(target_os = "windows")]
        {
            if let Some(appdata) = std::env::var_os("APPDATA") {
                return PathBuf::from(appdata)
                    .join("FlightSearch")
                    .join("flight_search.db");
            }
        }

        #[cfg(target_os = "linux")]
        {
            if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
                return PathBuf::from(xdg)
                    .join("flightsearch")
                    .join("flight_search.db");
            }
            if let Some(home) = home::home_dir() {
                return home
                    .join(".local")
                    .join("share")
                    .join("flightsearch")
                    .join("flight_search.db");
            }
        }

        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".flightsearch")
            .join("flight_search.db")
    }

    /// Initialize the schema, seeding the airport table from the bundled
    /// snapshot when `seed_catalog` is set.
    fn init(&self, seed_catalog: bool) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .expect("Database: failed to acquire database lock");

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version == 0 {
            // Fresh store: create the tables and import the snapshot.
            Self::create_schema(&conn)?;
            if seed_catalog {
                let count = snapshot::seed(&conn).context("failed to seed airport catalog")?;
                log::info!("Seeded airport catalog with {} records", count);
            }
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        } else if existing_version != SCHEMA_VERSION {
            // Version mismatch: destroy and recreate from the snapshot.
            log::warn!(
                "Schema version {} does not match expected {}; recreating store from snapshot",
                existing_version,
                SCHEMA_VERSION
            );
            conn.execute_batch(
                r#"
                DROP TABLE IF EXISTS airport;
                DROP TABLE IF EXISTS favorite;
                "#,
            )?;
            Self::create_schema(&conn)?;
            if seed_catalog {
                let count = snapshot::seed(&conn).context("failed to seed airport catalog")?;
                log::info!("Seeded airport catalog with {} records", count);
            }
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(())
    }

    /// Get a reference to the connection.
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn airport_repo(&self) -> AirportRepository {
        AirportRepository::new(self.connection())
    }

    pub fn favorite_repo(&self) -> FavoriteRepository {
        FavoriteRepository::new(self.connection())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS airport (
                id INTEGER PRIMARY KEY,
                iata_code TEXT NOT NULL,
                name TEXT NOT NULL,
                passengers INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS favorite (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                departure_code TEXT NOT NULL,
                destination_code TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_airport_passengers ON airport(passengers DESC);
            "#,
        )?;
        Ok(())
    }
}
