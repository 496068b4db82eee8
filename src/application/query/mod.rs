//! Query service: the read/write surface of the data layer.
//!
//! All read operations are live — they return a [`LiveQuery`] whose result
//! re-emits whenever the table it depends on changes. Writes commit first
//! and then synchronously notify every affected live query, so a completed
//! write is always visible to subscribers by the time the call returns.

mod live;

pub use live::LiveQuery;

use anyhow::Result;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::domain::{Airport, AirportId, Favorite, FavoriteError};
use crate::infra::db::{AirportRepository, Database, FavoriteRepository};
use live::{QueryRegistry, Table};

/// Serves airport and favorite queries over the shared store connection.
pub struct QueryService {
    conn: Arc<Mutex<Connection>>,
    registry: Arc<Mutex<QueryRegistry>>,
}

impl QueryService {
    pub fn new(db: &Database) -> Self {
        Self {
            conn: db.connection(),
            registry: Arc::new(Mutex::new(QueryRegistry::new())),
        }
    }

    /// Every airport in the catalog, busiest first.
    pub async fn all_airports(&self) -> Result<LiveQuery<Airport>> {
        let repo = AirportRepository::new(self.conn.clone());
        self.register_live(Table::Airport, move || repo.find_all())
    }

    /// Airports whose IATA code or name contains `term` (case-sensitive
    /// substring). The empty term matches everything; no match is an empty
    /// result, not an error.
    pub async fn search_airports(&self, term: &str) -> Result<LiveQuery<Airport>> {
        let repo = AirportRepository::new(self.conn.clone());
        let term = term.to_string();
        self.register_live(Table::Airport, move || repo.search(&term))
    }

    /// Possible destinations from the given airport: every other airport.
    /// An id missing from the catalog returns the full set.
    pub async fn destinations_from(&self, airport_id: AirportId) -> Result<LiveQuery<Airport>> {
        let repo = AirportRepository::new(self.conn.clone());
        self.register_live(Table::Airport, move || repo.destinations_from(airport_id))
    }

    /// Every saved favorite, in insertion order.
    pub async fn all_favorites(&self) -> Result<LiveQuery<Favorite>> {
        let repo = FavoriteRepository::new(self.conn.clone());
        self.register_live(Table::Favorite, move || repo.find_all())
    }

    /// Save a favorite route and return the created record.
    ///
    /// No validation that the codes refer to catalog airports and no dedup
    /// check; the same pair can be saved repeatedly.
    pub async fn save_favorite(
        &self,
        departure_code: &str,
        destination_code: &str,
    ) -> Result<Favorite, FavoriteError> {
        let repo = FavoriteRepository::new(self.conn.clone());
        let favorite = repo.insert(departure_code, destination_code)?;
        self.notify(Table::Favorite);
        Ok(favorite)
    }

    /// Append an airport record. Test/setup utility; the catalog is
    /// normally populated from the bundled snapshot.
    pub async fn insert_airport(&self, airport: &Airport) -> Result<()> {
        let repo = AirportRepository::new(self.conn.clone());
        repo.insert(airport)?;
        self.notify(Table::Airport);
        Ok(())
    }

    /// Number of live registrations currently held by this service.
    pub fn subscription_count(&self) -> usize {
        self.registry
            .lock()
            .expect("QueryService: failed to acquire registry lock")
            .len()
    }

    fn register_live<T, F>(&self, table: Table, query: F) -> Result<LiveQuery<T>>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Result<Vec<T>> + Send + 'static,
    {
        let initial = query()?;
        let (tx, rx) = tokio::sync::watch::channel(initial);
        let mut registry = self
            .registry
            .lock()
            .expect("QueryService: failed to acquire registry lock");
        let id = registry.register(
            table,
            Box::new(move || {
                if tx.is_closed() {
                    return false;
                }
                match query() {
                    Ok(rows) => tx.send(rows).is_ok(),
                    Err(err) => {
                        // Keep the subscription on its last emitted value;
                        // the next successful recompute refreshes it.
                        log::warn!("Live query recompute failed: {err:#}");
                        true
                    }
                }
            }),
        );
        Ok(LiveQuery::new(rx, Arc::clone(&self.registry), id))
    }

    fn notify(&self, table: Table) {
        let mut registry = self
            .registry
            .lock()
            .expect("QueryService: failed to acquire registry lock");
        registry.notify(table);
    }
}
