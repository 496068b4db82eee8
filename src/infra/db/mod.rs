//! SQLite persistence (infrastructure).

pub mod database;
pub mod repository;
pub mod snapshot;

pub use database::Database;
pub use repository::{AirportRepository, FavoriteRepository};
