use crate::types::ShiftKey;
use serde::{Deserialize, Serialize};

/// One of the two fixed time windows. The manager runs the shift and is
/// never handed sessions or tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub label: String,
    pub manager: String,
}

impl Shift {
    pub fn new(label: impl Into<String>, manager: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            manager: manager.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    #[serde(default = "default_first")]
    pub first: Shift,
    #[serde(default = "default_second")]
    pub second: Shift,
}

fn default_first() -> Shift {
    Shift::new("الشفت الأول (الثلاثاء 6م - السبت 12ظ)", "هشام القاضي")
}

fn default_second() -> Shift {
    Shift::new("الشفت الثاني (السبت 12ظ - الثلاثاء 5م)", "سيف حماد")
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
        }
    }
}

impl ShiftCatalog {
    pub fn get(&self, key: ShiftKey) -> &Shift {
        match key {
            ShiftKey::First => &self.first,
            ShiftKey::Second => &self.second,
        }
    }

    /// Shifts in selector order.
    pub fn entries(&self) -> Vec<(ShiftKey, &Shift)> {
        ShiftKey::all().iter().map(|k| (*k, self.get(*k))).collect()
    }
}
