use flightsearch::infra::db::{Database, snapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::try_init();

    let db_path = Database::default_path();
    println!("Connecting to database at: {}", db_path.display());

    let db = Database::open_at(db_path.clone())?;

    // Force a clean re-import of the bundled snapshot, even if the store
    // was already seeded by a previous run.
    let imported = {
        let conn = db.connection();
        let guard = conn
            .lock()
            .expect("seed_db: failed to acquire database lock");
        guard.execute("DELETE FROM airport", [])?;
        snapshot::seed(&guard)?
    };
    println!("Imported {} airports from the bundled snapshot", imported);

    // Sample routes between snapshot airports, handy for UI work.
    let favorites = db.favorite_repo();
    for (departure, destination) in [("SEA", "PDX"), ("SEA", "ATL"), ("JFK", "LHR")] {
        let favorite = favorites.insert(departure, destination)?;
        println!(
            "Saved sample favorite #{}: {} -> {}",
            favorite.id, favorite.departure_code, favorite.destination_code
        );
    }

    let favorite_count = favorites.find_all()?.len();
    println!("\nSeed complete:");
    println!("  Airports: {}", imported);
    println!("  Favorites: {}", favorite_count);
    println!("Database location: {}", db_path.display());

    Ok(())
}
