use crate::domain::{Airport, Favorite};
use crate::infra::db::Database;
use crate::infra::db::repository::*;

fn seattle() -> Airport {
    Airport::new(1, "SEA", "Seattle-Tacoma International", 5_000)
}

fn atlanta() -> Airport {
    Airport::new(2, "ATL", "Hartsfield-Jackson Atlanta International", 7_000)
}

fn portland() -> Airport {
    Airport::new(3, "PDX", "Portland International", 3_000)
}

fn add_all_airports(repo: &AirportRepository) -> anyhow::Result<()> {
    repo.insert(&seattle())?;
    repo.insert(&atlanta())?;
    repo.insert(&portland())?;
    Ok(())
}

#[test]
fn test_find_all_returns_airports_in_traffic_order() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    let all = repo.find_all()?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], atlanta());
    assert_eq!(all[1], seattle());
    assert_eq!(all[2], portland());
    Ok(())
}

#[test]
fn test_find_all_breaks_traffic_ties_by_id() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    repo.insert(&Airport::new(7, "AAA", "Alpha Field", 1_000))?;
    repo.insert(&Airport::new(4, "BBB", "Bravo Field", 1_000))?;

    let all = repo.find_all()?;
    assert_eq!(all[0].id, 4);
    assert_eq!(all[1].id, 7);
    Ok(())
}

#[test]
fn test_search_matches_names() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    // "Hartsfield" and "Portland" both contain "rt", which is in neither
    // the SEA name nor any code.
    let matching = repo.search("rt")?;
    assert_eq!(matching.len(), 2);
    assert_eq!(matching[0], atlanta());
    assert_eq!(matching[1], portland());
    Ok(())
}

#[test]
fn test_search_matches_codes() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    let matching = repo.search("DX")?;
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0], portland());
    Ok(())
}

#[test]
fn test_search_is_case_sensitive() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    // Codes are upper-case; a lower-case term must not match them.
    assert!(repo.search("dx")?.is_empty());
    assert_eq!(repo.search("Port")?.len(), 1);
    assert!(repo.search("port")?.is_empty());
    Ok(())
}

#[test]
fn test_search_with_empty_term_matches_everything() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    let all = repo.search("")?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], atlanta());
    Ok(())
}

#[test]
fn test_search_with_no_match_returns_empty() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    assert!(repo.search("zzz")?.is_empty());
    Ok(())
}

#[test]
fn test_destinations_exclude_the_departure_airport() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    let destinations = repo.destinations_from(seattle().id)?;
    assert_eq!(destinations.len(), 2);
    assert_eq!(destinations[0], atlanta());
    assert_eq!(destinations[1], portland());
    Ok(())
}

#[test]
fn test_destinations_from_unknown_id_return_full_catalog() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AirportRepository::new(db.connection());
    add_all_airports(&repo)?;

    let destinations = repo.destinations_from(999)?;
    assert_eq!(destinations.len(), 3);
    Ok(())
}

#[test]
fn test_favorite_insert_assigns_fresh_ids() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = FavoriteRepository::new(db.connection());

    let first = repo.insert("SEA", "PDX")?;
    let second = repo.insert("PDX", "ATL")?;
    assert_ne!(first.id, second.id);

    let all = repo.find_all()?;
    assert_eq!(all, vec![first, second]);
    Ok(())
}

#[test]
fn test_favorite_insert_with_explicit_id() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = FavoriteRepository::new(db.connection());

    let favorite = Favorite::new(1, "SEA", "PDX");
    repo.insert_with_id(&favorite)?;

    let all = repo.find_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], favorite);
    Ok(())
}

#[test]
fn test_favorites_are_not_deduplicated() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = FavoriteRepository::new(db.connection());

    repo.insert("SEA", "PDX")?;
    repo.insert("SEA", "PDX")?;
    assert_eq!(repo.find_all()?.len(), 2);
    Ok(())
}

#[test]
fn test_favorites_keep_insertion_order() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = FavoriteRepository::new(db.connection());

    repo.insert("SEA", "PDX")?;
    repo.insert("PDX", "ATL")?;
    repo.insert("ATL", "SEA")?;

    let all = repo.find_all()?;
    let routes: Vec<_> = all
        .iter()
        .map(|f| format!("{}-{}", f.departure_code, f.destination_code))
        .collect();
    assert_eq!(routes, vec!["SEA-PDX", "PDX-ATL", "ATL-SEA"]);
    Ok(())
}
