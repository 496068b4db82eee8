//! Application context: the one place that owns the opened store.

use crate::application::query::QueryService;
use crate::infra::db::Database;
use anyhow::Result;
use once_cell::sync::OnceCell;

/// Process-wide context, created once and handed to whatever needs data
/// access (presentation layers, dev tooling).
pub struct AppState {
    pub db: Database,
    pub queries: QueryService,
}

static APP: OnceCell<AppState> = OnceCell::new();

impl AppState {
    /// Open the store at the default location and build the query service.
    ///
    /// Construction is explicit: tests and embedders call this directly and
    /// own the returned context.
    pub fn new() -> Result<Self> {
        let db = Database::open()?;
        let queries = QueryService::new(&db);
        Ok(Self { db, queries })
    }

    /// One-time process-wide initialization.
    ///
    /// Concurrent callers are serialized: exactly one open-and-seed runs and
    /// every caller observes the same instance. A failed initialization is
    /// returned as a startup error and the cell stays empty, so nothing is
    /// cached in a half-initialized state.
    pub fn initialize() -> Result<&'static AppState> {
        APP.get_or_try_init(AppState::new)
    }

    /// The initialized context, if [`initialize`](Self::initialize) has
    /// already succeeded.
    pub fn get() -> Option<&'static AppState> {
        APP.get()
    }
}
