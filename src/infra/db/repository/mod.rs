//! Repository implementations for data access.
//!
//! Provides database operations for the airport catalog and the saved
//! favorite routes.

mod airport;
mod favorite;

pub use airport::AirportRepository;
pub use favorite::FavoriteRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub(super) type DbConn = Arc<Mutex<Connection>>;

#[cfg(test)]
mod tests;
