use serde::{Deserialize, Serialize};

/// Unique identifier for a saved favorite route.
pub type FavoriteId = i64;

/// A saved departure/destination route.
///
/// The codes are soft references to airport IATA codes; nothing enforces
/// that they exist in the catalog, and the store does not deduplicate
/// repeated saves of the same pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    /// Auto-assigned on insert unless the caller supplies one.
    pub id: FavoriteId,
    /// IATA code of the departure airport.
    pub departure_code: String,
    /// IATA code of the destination airport.
    pub destination_code: String,
}

impl Favorite {
    pub fn new(id: FavoriteId, departure_code: &str, destination_code: &str) -> Self {
        Self {
            id,
            departure_code: departure_code.to_string(),
            destination_code: destination_code.to_string(),
        }
    }
}
