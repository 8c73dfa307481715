use crate::model::Category;

pub(crate) const SCHEMA: &str = r#"
-- One row per wallpaper identity (explicit key or MD5 of the file contents)
CREATE TABLE IF NOT EXISTS wallpapers (
    id TEXT PRIMARY KEY,
    color TEXT DEFAULT 'warm',
    people TEXT DEFAULT 'many',
    time TEXT DEFAULT 'night'
);
"#;

pub(crate) const SELECT_WALLPAPER: &str =
    "SELECT id, color, people, time FROM wallpapers WHERE id = ?1";

const UPSERT_COLOR: &str = "INSERT INTO wallpapers (id, color) VALUES (?1, ?2)
     ON CONFLICT(id) DO UPDATE SET color = excluded.color";

const UPSERT_PEOPLE: &str = "INSERT INTO wallpapers (id, people) VALUES (?1, ?2)
     ON CONFLICT(id) DO UPDATE SET people = excluded.people";

const UPSERT_TIME: &str = "INSERT INTO wallpapers (id, time) VALUES (?1, ?2)
     ON CONFLICT(id) DO UPDATE SET time = excluded.time";

/// The upsert statement targeting `category`'s column.
pub(crate) const fn upsert_for(category: Category) -> &'static str {
    match category {
        Category::Color => UPSERT_COLOR,
        Category::People => UPSERT_PEOPLE,
        Category::Time => UPSERT_TIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_targets_category_column() {
        for category in Category::ALL {
            let sql = upsert_for(category);
            let column = category.column();
            assert!(sql.contains(&format!("(id, {column})")));
            assert!(sql.contains(&format!("SET {column} = excluded.{column}")));
        }
    }

    #[test]
    fn test_schema_defaults_match_categories() {
        for category in Category::ALL {
            let column_def = format!(
                "{} TEXT DEFAULT '{}'",
                category.column(),
                category.default_value()
            );
            assert!(SCHEMA.contains(&column_def), "missing {column_def}");
        }
    }
}
