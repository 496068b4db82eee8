//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy integration: the SQLite store.

pub mod db;
