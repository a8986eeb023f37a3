//! Manual corrections to an allocation after auto-distribution.
//!
//! These only touch the in-memory [`Allocation`]; nothing is written to the
//! store. Add and edit trim their input and do nothing when it is blank
//! (returning `false`). A row or entry index out of range is an error.

use crate::allocation::{Allocation, AssignmentRow};
use crate::error::{Result, TariqError};
use crate::types::EntryKind;

fn entries_mut(row: &mut AssignmentRow, kind: EntryKind) -> &mut Vec<String> {
    match kind {
        EntryKind::Session => &mut row.sessions,
        EntryKind::Task => &mut row.tasks,
    }
}

fn entry_not_found(row: usize, kind: EntryKind, index: usize) -> TariqError {
    TariqError::EntryNotFound {
        row,
        kind: kind.to_string(),
        index,
    }
}

/// Append `text` to the row's session or task list.
pub fn add_entry(alloc: &mut Allocation, row: usize, kind: EntryKind, text: &str) -> Result<bool> {
    let target = alloc.row_mut(row)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(false);
    }
    entries_mut(target, kind).push(text.to_string());
    Ok(true)
}

/// Replace the entry at `index` in place.
pub fn edit_entry(
    alloc: &mut Allocation,
    row: usize,
    kind: EntryKind,
    index: usize,
    text: &str,
) -> Result<bool> {
    let target = alloc.row_mut(row)?;
    let entries = entries_mut(target, kind);
    let slot = entries
        .get_mut(index)
        .ok_or_else(|| entry_not_found(row, kind, index))?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(false);
    }
    *slot = text.to_string();
    Ok(true)
}

/// Remove the entry at `index`, returning it.
pub fn delete_entry(
    alloc: &mut Allocation,
    row: usize,
    kind: EntryKind,
    index: usize,
) -> Result<String> {
    let target = alloc.row_mut(row)?;
    let entries = entries_mut(target, kind);
    if index >= entries.len() {
        return Err(entry_not_found(row, kind, index));
    }
    Ok(entries.remove(index))
}

pub fn add_session(alloc: &mut Allocation, row: usize, name: &str) -> Result<bool> {
    add_entry(alloc, row, EntryKind::Session, name)
}

pub fn edit_session(alloc: &mut Allocation, row: usize, index: usize, name: &str) -> Result<bool> {
    edit_entry(alloc, row, EntryKind::Session, index, name)
}

pub fn delete_session(alloc: &mut Allocation, row: usize, index: usize) -> Result<String> {
    delete_entry(alloc, row, EntryKind::Session, index)
}

pub fn add_task(alloc: &mut Allocation, row: usize, title: &str) -> Result<bool> {
    add_entry(alloc, row, EntryKind::Task, title)
}

pub fn edit_task(alloc: &mut Allocation, row: usize, index: usize, title: &str) -> Result<bool> {
    edit_entry(alloc, row, EntryKind::Task, index, title)
}

pub fn delete_task(alloc: &mut Allocation, row: usize, index: usize) -> Result<String> {
    delete_entry(alloc, row, EntryKind::Task, index)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn alloc_with(sessions: &[&str], tasks: &[&str]) -> Allocation {
        Allocation::new(vec![AssignmentRow {
            supervisor: "X".to_string(),
            sessions: sessions.iter().map(|s| s.to_string()).collect(),
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
        }])
    }

    #[test]
    fn delete_middle_session() {
        let mut a = alloc_with(&["A", "B", "C"], &[]);
        let removed = delete_session(&mut a, 0, 1).unwrap();
        assert_eq!(removed, "B");
        assert_eq!(a.rows[0].sessions, vec!["A", "C"]);
    }

    #[test]
    fn edit_first_task() {
        let mut a = alloc_with(&[], &["T1", "T2"]);
        assert!(edit_task(&mut a, 0, 0, "T9").unwrap());
        assert_eq!(a.rows[0].tasks, vec!["T9", "T2"]);
    }

    #[test]
    fn add_to_empty_task_list() {
        let mut a = alloc_with(&[], &[]);
        assert!(add_task(&mut a, 0, "T1").unwrap());
        assert_eq!(a.rows[0].tasks, vec!["T1"]);
    }

    #[test]
    fn add_session_trims() {
        let mut a = alloc_with(&[], &[]);
        add_session(&mut a, 0, "  A  ").unwrap();
        assert_eq!(a.rows[0].sessions, vec!["A"]);
    }

    #[test]
    fn blank_edit_is_noop() {
        let mut a = alloc_with(&["A"], &[]);
        assert!(!edit_session(&mut a, 0, 0, "   ").unwrap());
        assert_eq!(a.rows[0].sessions, vec!["A"]);
    }

    #[test]
    fn blank_add_is_noop() {
        let mut a = alloc_with(&[], &[]);
        assert!(!add_task(&mut a, 0, "").unwrap());
        assert!(a.rows[0].tasks.is_empty());
    }

    #[test]
    fn bad_row_is_error() {
        let mut a = alloc_with(&[], &[]);
        assert!(matches!(
            add_session(&mut a, 3, "A"),
            Err(TariqError::AssignmentNotFound(3))
        ));
    }

    #[test]
    fn bad_index_is_error() {
        let mut a = alloc_with(&["A"], &["T1"]);
        assert!(matches!(
            delete_task(&mut a, 0, 5),
            Err(TariqError::EntryNotFound { index: 5, .. })
        ));
        assert!(edit_session(&mut a, 0, 1, "B").is_err());
    }

    #[test]
    fn adjustments_do_not_cross_lists() {
        let mut a = alloc_with(&["A"], &["T1"]);
        add_session(&mut a, 0, "B").unwrap();
        assert_eq!(a.rows[0].tasks, vec!["T1"]);
        delete_task(&mut a, 0, 0).unwrap();
        assert_eq!(a.rows[0].sessions, vec!["A", "B"]);
    }
}
