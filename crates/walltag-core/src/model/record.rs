use serde::Serialize;

use super::Category;
use crate::error::Result;

/// A stored row of the `wallpapers` table.
///
/// Tag fields are optional: the schema fills defaults on insert, but a
/// column may still hold `NULL` in a database written by another tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallpaperRecord {
    pub id: String,
    pub color: Option<String>,
    pub people: Option<String>,
    pub time: Option<String>,
}

impl WallpaperRecord {
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Color => self.color.as_deref(),
            Category::People => self.people.as_deref(),
            Category::Time => self.time.as_deref(),
        }
    }

    /// Render the record as a JSON object keyed by column name.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
