use super::DbConn;
use crate::domain::{Airport, AirportId};
use anyhow::Result;
use rusqlite::Row;

const AIRPORT_COLUMNS: &str = "id, iata_code, name, passengers";

/// Repository for airport catalog operations.
///
/// The catalog is read-mostly: rows arrive once via the snapshot import (or
/// explicit inserts in tests) and are immutable afterwards. All list
/// operations rank by annual passenger volume, busiest first, with the
/// stable snapshot id as tie-break.
pub struct AirportRepository {
    conn: DbConn,
}

impl AirportRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Append one airport record. Test/setup utility only; normal use loads
    /// the catalog from the bundled snapshot.
    pub fn insert(&self, airport: &Airport) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .expect("AirportRepository: failed to acquire database lock");
        conn.execute(
            "INSERT INTO airport (id, iata_code, name, passengers) VALUES (?1, ?2, ?3, ?4)",
            (
                airport.id,
                &airport.iata_code,
                &airport.name,
                airport.passengers,
            ),
        )?;
        Ok(())
    }

    /// Every airport, busiest first.
    pub fn find_all(&self) -> Result<Vec<Airport>> {
        let conn = self
            .conn
            .lock()
            .expect("AirportRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(&format!(
            "SELECT {AIRPORT_COLUMNS} FROM airport ORDER BY passengers DESC, id"
        ))?;
        let rows = stmt.query_map([], row_to_airport)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Airports whose IATA code or name contains `term`.
    ///
    /// Matching is case-sensitive substring containment (`instr`, not
    /// `LIKE` — SQLite's `LIKE` folds ASCII case). The empty term matches
    /// every airport; a term matching nothing yields an empty vec.
    pub fn search(&self, term: &str) -> Result<Vec<Airport>> {
        let conn = self
            .conn
            .lock()
            .expect("AirportRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(&format!(
            "SELECT {AIRPORT_COLUMNS} FROM airport \
             WHERE ?1 = '' OR instr(iata_code, ?1) > 0 OR instr(name, ?1) > 0 \
             ORDER BY passengers DESC, id"
        ))?;
        let rows = stmt.query_map([term], row_to_airport)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Possible destinations from an airport: every other airport in the
    /// catalog. An id absent from the catalog excludes nothing, so the full
    /// set comes back; that is a defined outcome, not an error.
    pub fn destinations_from(&self, airport_id: AirportId) -> Result<Vec<Airport>> {
        let conn = self
            .conn
            .lock()
            .expect("AirportRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(&format!(
            "SELECT {AIRPORT_COLUMNS} FROM airport WHERE id != ?1 ORDER BY passengers DESC, id"
        ))?;
        let rows = stmt.query_map([airport_id], row_to_airport)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn row_to_airport(row: &Row<'_>) -> rusqlite::Result<Airport> {
    Ok(Airport {
        id: row.get(0)?,
        iata_code: row.get(1)?,
        name: row.get(2)?,
        passengers: row.get(3)?,
    })
}
