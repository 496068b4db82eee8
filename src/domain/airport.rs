use serde::{Deserialize, Serialize};

/// Unique identifier for an airport record.
///
/// Ids are stable: they are assigned in the bundled snapshot and never
/// reassigned within a session.
pub type AirportId = i64;

/// An airport in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    /// Stable identifier from the bundled snapshot.
    pub id: AirportId,
    /// Three-letter IATA code, used as a display and search key.
    pub iata_code: String,
    /// Full human-readable airport name, used for search matching.
    pub name: String,
    /// Annual passenger volume. Used only for ranking results.
    pub passengers: i64,
}

impl Airport {
    pub fn new(id: AirportId, iata_code: &str, name: &str, passengers: i64) -> Self {
        Self {
            id,
            iata_code: iata_code.to_string(),
            name: name.to_string(),
            passengers,
        }
    }
}
