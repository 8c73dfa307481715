//! Core library for walltag.
//!
//! This crate defines the tag categories and the wallpaper record, the
//! SQLite tag store, identity resolution (explicit key or content hash),
//! and the cycling policy that advances a tag through its value set.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cycle;
pub mod error;
pub mod identity;
pub mod model;
pub mod schema;

pub use cycle::cycle_tag;
pub use error::{Error, Result};
pub use identity::Identity;
pub use model::{Category, WallpaperRecord};
pub use schema::Database;
