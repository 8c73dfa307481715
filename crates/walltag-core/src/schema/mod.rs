//! SQLite tag store.

mod db;
mod sql;

pub use db::Database;
