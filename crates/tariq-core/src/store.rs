//! File-backed table store.
//!
//! Each table lives in `.tariq/<table>.yaml` as a YAML list in insertion
//! order. Every mutation rewrites the whole file through [`write_yaml`].

use crate::config::Config;
use crate::error::{Result, TariqError};
use crate::io::{read_yaml, seed_yaml, write_yaml};
use crate::paths;
use crate::record::Record;
use crate::types::Table;
use std::path::Path;

/// Create `.tariq/`, a default config and empty table files. Idempotent;
/// existing files are left untouched. Returns `true` if the directory was new.
pub fn init(root: &Path, project_name: &str) -> Result<bool> {
    let created = !paths::is_initialized(root);
    std::fs::create_dir_all(paths::tariq_dir(root))?;

    seed_yaml(&paths::config_path(root), &Config::new(project_name))?;
    for table in Table::all() {
        seed_yaml(&paths::table_path(root, *table), &Vec::<()>::new())?;
    }
    tracing::debug!(root = %root.display(), created, "initialized board");
    Ok(created)
}

/// All rows of `R`'s table. Empty if the table file does not exist yet.
pub fn list<R: Record>(root: &Path) -> Result<Vec<R>> {
    require_init(root)?;
    let rows: Option<Vec<R>> = read_yaml(&paths::table_path(root, R::TABLE))?;
    Ok(rows.unwrap_or_default())
}

pub fn get<R: Record>(root: &Path, id: &str) -> Result<R> {
    list::<R>(root)?
        .into_iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| not_found::<R>(id))
}

/// Append a new row. `text` is trimmed and must not be empty.
pub fn insert<R: Record>(root: &Path, text: &str) -> Result<R> {
    let text = required_text::<R>(text)?;
    let mut rows = list::<R>(root)?;
    let record = R::from_parts(uuid::Uuid::new_v4().to_string(), text);
    rows.push(record.clone());
    save(root, &rows)?;
    tracing::debug!(table = %R::TABLE, id = record.id(), "inserted record");
    Ok(record)
}

/// Replace the text column of row `id`. `text` is trimmed and must not be empty.
pub fn update<R: Record>(root: &Path, id: &str, text: &str) -> Result<R> {
    let text = required_text::<R>(text)?;
    let mut rows = list::<R>(root)?;
    let row = rows
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| not_found::<R>(id))?;
    row.set_text(text);
    let updated = row.clone();
    save(root, &rows)?;
    tracing::debug!(table = %R::TABLE, id, "updated record");
    Ok(updated)
}

pub fn delete<R: Record>(root: &Path, id: &str) -> Result<R> {
    let mut rows = list::<R>(root)?;
    let pos = rows
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| not_found::<R>(id))?;
    let removed = rows.remove(pos);
    save(root, &rows)?;
    tracing::debug!(table = %R::TABLE, id, "deleted record");
    Ok(removed)
}

fn save<R: Record>(root: &Path, rows: &[R]) -> Result<()> {
    write_yaml(&paths::table_path(root, R::TABLE), rows)
}

fn require_init(root: &Path) -> Result<()> {
    if !paths::is_initialized(root) {
        return Err(TariqError::NotInitialized);
    }
    Ok(())
}

fn required_text<R: Record>(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TariqError::EmptyField(R::TABLE.empty_field()));
    }
    Ok(text.to_string())
}

fn not_found<R: Record>(id: &str) -> TariqError {
    TariqError::RecordNotFound {
        table: R::TABLE.to_string(),
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
