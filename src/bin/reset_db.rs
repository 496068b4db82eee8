use flightsearch::infra::db::Database;
use rusqlite::Connection;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::try_init();

    let db_path = Database::default_path();

    // Check if database exists
    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());

    let conn = Connection::open(&db_path)?;

    // The favorite table might not exist if the store was never initialized
    let tables_exist: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='favorite'",
        [],
        |row| row.get(0),
    )?;

    if tables_exist == 0 {
        println!("Tables do not exist. No reset needed.");
        return Ok(());
    }

    let airport_count: i64 = conn.query_row("SELECT COUNT(*) FROM airport", [], |row| row.get(0))?;
    let favorite_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM favorite", [], |row| row.get(0))?;

    println!("Current record counts:");
    println!("  Airports: {}", airport_count);
    println!("  Favorites: {}", favorite_count);

    // Only user data is cleared; the airport catalog stays seeded.
    conn.execute("DELETE FROM favorite", [])?;
    println!("Cleared favorite table");

    let favorite_count_after: i64 =
        conn.query_row("SELECT COUNT(*) FROM favorite", [], |row| row.get(0))?;

    println!("\nAfter reset:");
    println!("  Airports: {}", airport_count);
    println!("  Favorites: {}", favorite_count_after);

    if favorite_count_after == 0 {
        println!("\nDatabase successfully reset! All favorites have been deleted.");
    } else {
        eprintln!("\nWarning: Some favorites still exist in the database.");
    }

    println!("Database location: {}", db_path.display());

    Ok(())
}
