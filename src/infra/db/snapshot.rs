//! Bundled airport snapshot.
//!
//! The catalog ships as a JSON array embedded in the binary at compile
//! time. On first open (or after a destructive schema recreate) the whole
//! snapshot is imported into the `airport` table in a single transaction.

use crate::domain::{Airport, CatalogError};
use anyhow::Context;
use rusqlite::Connection;

/// Embedded read-only dataset used to seed the airport table.
static SNAPSHOT_JSON: &str = include_str!("../../../assets/airports.json");

/// Decode the bundled snapshot.
///
/// A decode failure means the shipped asset is corrupt; callers treat this
/// as a fatal startup error.
pub fn bundled_airports() -> Result<Vec<Airport>, CatalogError> {
    let airports: Vec<Airport> = serde_json::from_str(SNAPSHOT_JSON)?;
    Ok(airports)
}

/// Import every snapshot row into the `airport` table.
///
/// Runs in a single transaction so readers never observe a half-imported
/// catalog. Rows keep their snapshot-assigned ids.
pub fn seed(conn: &Connection) -> Result<usize, CatalogError> {
    let airports = bundled_airports()?;
    import(conn, &airports).map_err(CatalogError::OperationFailed)?;
    Ok(airports.len())
}

fn import(conn: &Connection, airports: &[Airport]) -> anyhow::Result<()> {
    let tx = conn
        .unchecked_transaction()
        .context("failed to begin snapshot import transaction")?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO airport (id, iata_code, name, passengers) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for airport in airports {
            stmt.execute((
                airport.id,
                &airport.iata_code,
                &airport.name,
                airport.passengers,
            ))?;
        }
    }
    tx.commit().context("failed to commit snapshot import")?;
    Ok(())
}
