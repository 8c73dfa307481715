use crate::error::Result;
use crate::model::Category;
use crate::schema::Database;

/// Advance `category` on `id` to the next value in its set and store it.
///
/// Creates the row if it does not exist. Returns the value written.
pub fn cycle_tag(db: &Database, id: &str, category: Category) -> Result<&'static str> {
    let current = db.get_tag(id, category)?;
    let next = category.next_value(current.as_deref());
    log::info!(
        "Cycling {category} for {id}: {} -> {next}",
        current.as_deref().unwrap_or("<unset>")
    );
    db.set_tag(id, category, next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_creates_row() {
        let db = Database::open_in_memory().unwrap();

        let next = cycle_tag(&db, "abc", Category::People).unwrap();
        assert_eq!(next, "few");

        let record = db.get_all_tags("abc").unwrap().unwrap();
        assert_eq!(record.people.as_deref(), Some("few"));
        assert_eq!(record.color.as_deref(), Some("warm"));
        assert_eq!(record.time.as_deref(), Some("night"));
    }

    #[test]
    fn test_cycle_wraps_around() {
        let db = Database::open_in_memory().unwrap();
        db.set_tag("abc", Category::Color, "warm").unwrap();

        assert_eq!(cycle_tag(&db, "abc", Category::Color).unwrap(), "cool");
        assert_eq!(cycle_tag(&db, "abc", Category::Color).unwrap(), "greyscale");
        assert_eq!(cycle_tag(&db, "abc", Category::Color).unwrap(), "warm");
        assert_eq!(
            db.get_tag("abc", Category::Color).unwrap().as_deref(),
            Some("warm")
        );
    }

    #[test]
    fn test_cycle_from_unknown_value_lands_on_second() {
        let db = Database::open_in_memory().unwrap();
        db.set_tag("abc", Category::Time, "midnight").unwrap();

        assert_eq!(cycle_tag(&db, "abc", Category::Time).unwrap(), "day");
    }

    #[test]
    fn test_cycle_leaves_other_categories() {
        let db = Database::open_in_memory().unwrap();
        db.set_tag("abc", Category::Color, "greyscale").unwrap();
        db.set_tag("abc", Category::People, "none").unwrap();

        cycle_tag(&db, "abc", Category::Time).unwrap();

        let record = db.get_all_tags("abc").unwrap().unwrap();
        assert_eq!(record.color.as_deref(), Some("greyscale"));
        assert_eq!(record.people.as_deref(), Some("none"));
        assert_eq!(record.time.as_deref(), Some("day"));
    }
}
