//! Route helpers for the presentation boundary.
//!
//! Pure functions over already-fetched result sets; no storage access.

use crate::domain::{Airport, Favorite};

/// Whether the ordered pair departure → destination is already saved.
///
/// The store itself never deduplicates, so this is the check a caller runs
/// before offering (or suppressing) a "save this route" action.
pub fn is_route_saved(favorites: &[Favorite], departure_code: &str, destination_code: &str) -> bool {
    favorites
        .iter()
        .any(|f| f.departure_code == departure_code && f.destination_code == destination_code)
}

/// A favorite paired with the catalog records behind its codes.
///
/// Codes are soft references; a code with no catalog match resolves to
/// `None` and the favorite is still listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub favorite: &'a Favorite,
    pub departure: Option<&'a Airport>,
    pub destination: Option<&'a Airport>,
}

/// Pair each favorite with its departure and destination airports,
/// preserving favorite order. The first catalog record with a matching
/// IATA code wins (codes are not guaranteed unique).
pub fn resolve_routes<'a>(
    favorites: &'a [Favorite],
    airports: &'a [Airport],
) -> Vec<ResolvedRoute<'a>> {
    let by_code = |code: &str| airports.iter().find(|a| a.iata_code == code);
    favorites
        .iter()
        .map(|favorite| ResolvedRoute {
            favorite,
            departure: by_code(&favorite.departure_code),
            destination: by_code(&favorite.destination_code),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airports() -> Vec<Airport> {
        vec![
            Airport::new(1, "SEA", "Seattle-Tacoma International", 5_000),
            Airport::new(2, "ATL", "Hartsfield-Jackson Atlanta International", 7_000),
        ]
    }

    #[test]
    fn test_is_route_saved_is_direction_sensitive() {
        let favorites = vec![Favorite::new(1, "SEA", "PDX")];
        assert!(is_route_saved(&favorites, "SEA", "PDX"));
        assert!(!is_route_saved(&favorites, "PDX", "SEA"));
        assert!(!is_route_saved(&favorites, "SEA", "ATL"));
    }

    #[test]
    fn test_resolve_routes_pairs_catalog_records() {
        let airports = airports();
        let favorites = vec![Favorite::new(1, "SEA", "ATL")];

        let resolved = resolve_routes(&favorites, &airports);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].departure.unwrap().iata_code, "SEA");
        assert_eq!(resolved[0].destination.unwrap().iata_code, "ATL");
    }

    #[test]
    fn test_resolve_routes_leaves_unknown_codes_unresolved() {
        let airports = airports();
        let favorites = vec![Favorite::new(1, "SEA", "XXX")];

        let resolved = resolve_routes(&favorites, &airports);
        assert_eq!(resolved[0].departure.unwrap().iata_code, "SEA");
        assert!(resolved[0].destination.is_none());
    }
}
