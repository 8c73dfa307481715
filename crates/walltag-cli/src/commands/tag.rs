use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use walltag_core::{cycle_tag, Category, Database, Identity};

fn open_db(db_path: &Path) -> Result<Database> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }
    Database::open(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))
}

/// Store `tag` under `category` and echo the value written.
pub fn run_set(
    db_path: &Path,
    identity: &Identity,
    category: &str,
    tag: &str,
    out: &mut impl Write,
) -> Result<()> {
    let category: Category = category.parse()?;
    let db = open_db(db_path)?;
    let key = identity.resolve()?;

    db.set_tag(&key, category, tag)?;
    writeln!(out, "{tag}")?;
    Ok(())
}

/// Printed by `get --category` when no value is stored.
pub const ABSENT: &str = "null";

/// Print one tag value, or the whole record as JSON when no category is given.
///
/// An unknown category is reported like a missing value, as `null`.
pub fn run_get(
    db_path: &Path,
    identity: &Identity,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let db = open_db(db_path)?;
    let key = identity.resolve()?;

    let Some(name) = category else {
        match db.get_all_tags(&key)? {
            Some(record) => writeln!(out, "{}", record.to_json()?)?,
            None => writeln!(out, "{{}}")?,
        }
        return Ok(());
    };

    let value = match name.parse::<Category>() {
        Ok(category) => db.get_tag(&key, category)?,
        Err(_) => {
            tracing::debug!(%key, category = name, "unknown category, reporting absent");
            None
        }
    };
    writeln!(out, "{}", value.as_deref().unwrap_or(ABSENT))?;
    Ok(())
}

/// Advance `category` to its next value. Prints nothing.
pub fn run_cycle(db_path: &Path, identity: &Identity, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let db = open_db(db_path)?;
    let key = identity.resolve()?;

    let next = cycle_tag(&db, &key, category)?;
    tracing::debug!(%key, %category, next, "cycled tag");
    Ok(())
}
