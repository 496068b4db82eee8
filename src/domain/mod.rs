//! Domain types for the flight search data layer.
//! Defines the core data structures and business objects used throughout the crate.

pub mod airport;
pub mod error;
pub mod favorite;

pub use airport::*;
pub use error::*;
pub use favorite::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_constructor() {
        let airport = Airport::new(1, "SEA", "Seattle-Tacoma International", 5_000);
        assert_eq!(airport.id, 1);
        assert_eq!(airport.iata_code, "SEA");
        assert_eq!(airport.name, "Seattle-Tacoma International");
        assert_eq!(airport.passengers, 5_000);
    }

    #[test]
    fn test_favorite_is_an_ordered_pair() {
        let out = Favorite::new(1, "SEA", "PDX");
        let back = Favorite::new(2, "PDX", "SEA");
        assert_ne!(out.departure_code, back.departure_code);
        assert_eq!(out.departure_code, back.destination_code);
    }

    #[test]
    fn test_airport_serde_round_trip() -> anyhow::Result<()> {
        let airport = Airport::new(2, "ATL", "Hartsfield-Jackson Atlanta International", 7_000);
        let json = serde_json::to_string(&airport)?;
        let parsed: Airport = serde_json::from_str(&json)?;
        assert_eq!(parsed, airport);
        Ok(())
    }
}
