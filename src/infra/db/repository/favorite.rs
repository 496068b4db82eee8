use super::DbConn;
use crate::domain::Favorite;
use anyhow::Result;

/// Repository for saved favorite routes.
///
/// Append-only from the application's perspective. The store performs no
/// dedup and no validation that the codes refer to catalog airports;
/// callers who care about "already favorited" query and compare.
pub struct FavoriteRepository {
    conn: DbConn,
}

impl FavoriteRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Append a new favorite, letting the store assign a fresh unique id.
    /// Returns the created record.
    pub fn insert(&self, departure_code: &str, destination_code: &str) -> Result<Favorite> {
        let conn = self
            .conn
            .lock()
            .expect("FavoriteRepository: failed to acquire database lock");
        conn.execute(
            "INSERT INTO favorite (departure_code, destination_code) VALUES (?1, ?2)",
            (departure_code, destination_code),
        )?;
        Ok(Favorite {
            id: conn.last_insert_rowid(),
            departure_code: departure_code.to_string(),
            destination_code: destination_code.to_string(),
        })
    }

    /// Append a favorite preserving its caller-supplied id (fixtures and
    /// seeding).
    pub fn insert_with_id(&self, favorite: &Favorite) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .expect("FavoriteRepository: failed to acquire database lock");
        conn.execute(
            "INSERT INTO favorite (id, departure_code, destination_code) VALUES (?1, ?2, ?3)",
            (
                favorite.id,
                &favorite.departure_code,
                &favorite.destination_code,
            ),
        )?;
        Ok(())
    }

    /// Every saved favorite in insertion order.
    pub fn find_all(&self) -> Result<Vec<Favorite>> {
        let conn = self
            .conn
            .lock()
            .expect("FavoriteRepository: failed to acquire database lock");
        let mut stmt = conn
            .prepare("SELECT id, departure_code, destination_code FROM favorite ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Favorite {
                id: row.get(0)?,
                departure_code: row.get(1)?,
                destination_code: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
