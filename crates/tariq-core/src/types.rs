use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Tasks,
    Residents,
    Supervisors,
}

impl Table {
    pub fn all() -> &'static [Table] {
        &[Table::Tasks, Table::Residents, Table::Supervisors]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Table::Tasks => "tasks",
            Table::Residents => "residents",
            Table::Supervisors => "supervisors",
        }
    }

    /// Name of the text column: tasks carry a title, people a name.
    pub fn text_field(self) -> &'static str {
        match self {
            Table::Tasks => "title",
            Table::Residents | Table::Supervisors => "name",
        }
    }

    /// Question shown before a row of this table is deleted.
    pub fn delete_prompt(self) -> &'static str {
        match self {
            Table::Tasks => "هل أنت متأكد من حذف المهمة؟",
            Table::Residents => "هل أنت متأكد من حذف المقيم؟",
            Table::Supervisors => "هل أنت متأكد من حذف المشرف؟",
        }
    }

    pub(crate) fn empty_field(self) -> &'static str {
        match self {
            Table::Tasks => "task title",
            Table::Residents => "resident name",
            Table::Supervisors => "supervisor name",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Table {
    type Err = crate::error::TariqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tasks" => Ok(Table::Tasks),
            "residents" => Ok(Table::Residents),
            "supervisors" => Ok(Table::Supervisors),
            _ => Err(crate::error::TariqError::UnknownTable(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ShiftKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKey {
    #[default]
    First,
    Second,
}

impl ShiftKey {
    pub fn all() -> &'static [ShiftKey] {
        &[ShiftKey::First, ShiftKey::Second]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKey::First => "first",
            ShiftKey::Second => "second",
        }
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShiftKey {
    type Err = crate::error::TariqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(ShiftKey::First),
            "second" => Ok(ShiftKey::Second),
            _ => Err(crate::error::TariqError::UnknownShift(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// EntryKind
// ---------------------------------------------------------------------------

/// The two editable lists inside an assignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Session,
    Task,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Session => "session",
            EntryKind::Task => "task",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = crate::error::TariqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "session" | "sessions" => Ok(EntryKind::Session),
            "task" | "tasks" => Ok(EntryKind::Task),
            _ => Err(crate::error::TariqError::UnknownEntryKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_parse_roundtrip() {
        for t in Table::all() {
            let parsed: Table = t.as_str().parse().unwrap();
            assert_eq!(parsed, *t);
        }
        assert!("sessions".parse::<Table>().is_err());
    }

    #[test]
    fn shift_key_parse() {
        assert_eq!("first".parse::<ShiftKey>().unwrap(), ShiftKey::First);
        assert_eq!("second".parse::<ShiftKey>().unwrap(), ShiftKey::Second);
        assert!("third".parse::<ShiftKey>().is_err());
    }

    #[test]
    fn shift_key_serializes_snake_case() {
        let json = serde_json::to_string(&ShiftKey::Second).unwrap();
        assert_eq!(json, "\"second\"");
    }

    #[test]
    fn entry_kind_accepts_plural() {
        assert_eq!("sessions".parse::<EntryKind>().unwrap(), EntryKind::Session);
        assert_eq!("task".parse::<EntryKind>().unwrap(), EntryKind::Task);
    }
}
