use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

use crate::error::Result;
use crate::model::{Category, WallpaperRecord};

use super::sql::{upsert_for, SCHEMA, SELECT_WALLPAPER};

/// A database connection with tag CRUD methods.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening tag database at {}", path.display());
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Create the `wallpapers` table if it does not exist yet.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

// Tag CRUD
impl Database {
    /// Set `category` to `value` for `id`, creating the row if needed.
    ///
    /// A new row takes schema defaults for the other categories; an existing
    /// row keeps them. The value is not checked against the category's known
    /// values.
    pub fn set_tag(&self, id: &str, category: Category, value: &str) -> Result<()> {
        log::debug!("Setting {category} = {value:?} for {id}");
        self.conn
            .execute(upsert_for(category), rusqlite::params![id, value])?;
        Ok(())
    }

    /// Fetch the full row for `id`, or `None` if no row exists.
    pub fn get_all_tags(&self, id: &str) -> Result<Option<WallpaperRecord>> {
        let record = self
            .conn
            .query_row(SELECT_WALLPAPER, [id], |row| Self::row_to_record(row))
            .optional()?;
        Ok(record)
    }

    /// Fetch a single category value, or `None` if the row or value is absent.
    pub fn get_tag(&self, id: &str, category: Category) -> Result<Option<String>> {
        let value = self
            .get_all_tags(id)?
            .and_then(|record| record.get(category).map(str::to_string));
        Ok(value)
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<WallpaperRecord> {
        Ok(WallpaperRecord {
            id: row.get(0)?,
            color: row.get(1)?,
            people: row.get(2)?,
            time: row.get(3)?,
        })
    }
}
