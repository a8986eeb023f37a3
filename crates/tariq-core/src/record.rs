use crate::types::Table;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A row in one of the three tables. Every record is an id plus one text
/// column (a resident's name, a task's title).
pub trait Record: Serialize + DeserializeOwned + Clone + Send + 'static {
    const TABLE: Table;

    fn from_parts(id: String, text: String) -> Self;
    fn id(&self) -> &str;
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
}

impl Record for Resident {
    const TABLE: Table = Table::Residents;

    fn from_parts(id: String, text: String) -> Self {
        Self { id, name: text }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.name
    }

    fn set_text(&mut self, text: String) {
        self.name = text;
    }
}

impl Record for Supervisor {
    const TABLE: Table = Table::Supervisors;

    fn from_parts(id: String, text: String) -> Self {
        Self { id, name: text }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.name
    }

    fn set_text(&mut self, text: String) {
        self.name = text;
    }
}

impl Record for Task {
    const TABLE: Table = Table::Tasks;

    fn from_parts(id: String, text: String) -> Self {
        Self { id, title: text }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.title
    }

    fn set_text(&mut self, text: String) {
        self.title = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_title_column() {
        let t = Task::from_parts("t1".into(), "Morning round".into());
        let yaml = serde_yaml::to_string(&t).unwrap();
        assert!(yaml.contains("title: Morning round"));
        assert!(!yaml.contains("name:"));
    }

    #[test]
    fn set_text_updates_name() {
        let mut r = Resident::from_parts("r1".into(), "Old".into());
        r.set_text("New".into());
        assert_eq!(r.name, "New");
        assert_eq!(r.text(), "New");
    }
}
