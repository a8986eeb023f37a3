use crate::adjust;
use crate::allocation::{allocate, Allocation, AllocationInput, AllocationPolicy};
use crate::config::Config;
use crate::error::Result;
use crate::record::{Resident, Supervisor, Task};
use crate::report::format_report;
use crate::shift::{Shift, ShiftCatalog};
use crate::types::{EntryKind, ShiftKey};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// State of the shift distribution screen: which shift is selected and the
/// allocation currently on display. Owned by whoever drives the screen and
/// passed by reference to the engine and the adjustment operations.
#[derive(Debug, Clone)]
pub struct DistributionBoard {
    shifts: ShiftCatalog,
    policy: AllocationPolicy,
    shift: ShiftKey,
    allocation: Allocation,
    distributed_at: Option<DateTime<Utc>>,
}

/// Serializable view of the board for API and `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub shift: ShiftKey,
    pub label: String,
    pub manager: String,
    pub rows: Allocation,
    pub distributed_at: Option<DateTime<Utc>>,
}

impl DistributionBoard {
    pub fn new(shifts: ShiftCatalog, policy: AllocationPolicy) -> Self {
        Self {
            shifts,
            policy,
            shift: ShiftKey::default(),
            allocation: Allocation::default(),
            distributed_at: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.shifts.clone(),
            AllocationPolicy::from(&config.distribution),
        )
    }

    /// Pick up edited shift names or quotas without losing the selection.
    pub fn reconfigure(&mut self, config: &Config) {
        self.shifts = config.shifts.clone();
        self.policy = AllocationPolicy::from(&config.distribution);
    }

    pub fn shift_key(&self) -> ShiftKey {
        self.shift
    }

    pub fn shift(&self) -> &Shift {
        self.shifts.get(self.shift)
    }

    pub fn shift_label(&self) -> &str {
        &self.shift().label
    }

    pub fn manager(&self) -> &str {
        &self.shift().manager
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Switch shifts. The allocation belongs to the old shift's supervisor
    /// pool, so it is discarded when the shift actually changes.
    pub fn select_shift(&mut self, key: ShiftKey) {
        if key != self.shift {
            self.shift = key;
            self.allocation = Allocation::default();
            self.distributed_at = None;
        }
    }

    /// Run the allocation engine for the selected shift, replacing whatever
    /// was on the board.
    pub fn distribute<R: Rng + ?Sized>(
        &mut self,
        residents: &[Resident],
        supervisors: &[Supervisor],
        tasks: &[Task],
        rng: &mut R,
    ) -> &Allocation {
        let input = AllocationInput {
            residents,
            supervisors,
            tasks,
            manager: &self.shifts.get(self.shift).manager,
        };
        self.allocation = allocate(input, &self.policy, rng);
        self.distributed_at = Some(Utc::now());
        tracing::info!(
            shift = %self.shift,
            rows = self.allocation.len(),
            "distributed shift"
        );
        &self.allocation
    }

    pub fn add_entry(&mut self, row: usize, kind: EntryKind, text: &str) -> Result<bool> {
        adjust::add_entry(&mut self.allocation, row, kind, text)
    }

    pub fn edit_entry(
        &mut self,
        row: usize,
        kind: EntryKind,
        index: usize,
        text: &str,
    ) -> Result<bool> {
        adjust::edit_entry(&mut self.allocation, row, kind, index, text)
    }

    pub fn delete_entry(&mut self, row: usize, kind: EntryKind, index: usize) -> Result<String> {
        adjust::delete_entry(&mut self.allocation, row, kind, index)
    }

    /// The message that would be shared for the current board.
    pub fn preview(&self) -> String {
        format_report(self.shift_label(), self.manager(), &self.allocation.rows)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            shift: self.shift,
            label: self.shift_label().to_string(),
            manager: self.manager().to_string(),
            rows: self.allocation.clone(),
            distributed_at: self.distributed_at,
        }
    }
}

impl Default for DistributionBoard {
    fn default() -> Self {
        Self::new(ShiftCatalog::default(), AllocationPolicy::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn people<R: Record>(names: &[&str]) -> Vec<R> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| R::from_parts(i.to_string(), n.to_string()))
            .collect()
    }

    #[test]
    fn manager_follows_selected_shift() {
        let mut board = DistributionBoard::default();
        assert_eq!(board.manager(), "هشام القاضي");
        board.select_shift(ShiftKey::Second);
        assert_eq!(board.manager(), "سيف حماد");
    }

    #[test]
    fn distribute_skips_current_manager() {
        let mut board = DistributionBoard::default();
        let sups: Vec<Supervisor> = people(&["هشام القاضي", "سيف حماد", "علي"]);
        let mut rng = StdRng::seed_from_u64(9);
        board.distribute(&[], &sups, &[], &mut rng);
        let names: Vec<&str> = board
            .allocation()
            .rows
            .iter()
            .map(|r| r.supervisor.as_str())
            .collect();
        assert_eq!(names, vec!["سيف حماد", "علي"]);
    }

    #[test]
    fn changing_shift_clears_allocation() {
        let mut board = DistributionBoard::default();
        let sups: Vec<Supervisor> = people(&["A"]);
        board.distribute(&[], &sups, &[], &mut StdRng::seed_from_u64(1));
        assert_eq!(board.allocation().len(), 1);

        board.select_shift(ShiftKey::First);
        assert_eq!(board.allocation().len(), 1);

        board.select_shift(ShiftKey::Second);
        assert!(board.allocation().is_empty());
        assert!(board.snapshot().distributed_at.is_none());
    }

    #[test]
    fn adjustments_show_in_preview() {
        let mut board = DistributionBoard::default();
        let sups: Vec<Supervisor> = people(&["A"]);
        board.distribute(&[], &sups, &[], &mut StdRng::seed_from_u64(1));
        board.add_entry(0, EntryKind::Session, "R1").unwrap();
        board.add_entry(0, EntryKind::Task, "Clean").unwrap();
        let preview = board.preview();
        assert!(preview.contains("👤 A\nالمهام:\n- Clean\nالجلسات الفردية: R1"));
        assert!(preview.starts_with("🗓️ الشفت الأول"));
    }

    #[test]
    fn redistribute_replaces_manual_edits() {
        let mut board = DistributionBoard::default();
        let sups: Vec<Supervisor> = people(&["A"]);
        board.distribute(&[], &sups, &[], &mut StdRng::seed_from_u64(1));
        board.add_entry(0, EntryKind::Session, "Manual").unwrap();
        board.distribute(&[], &sups, &[], &mut StdRng::seed_from_u64(2));
        assert!(board.allocation().rows[0].sessions.is_empty());
    }

    #[test]
    fn reconfigure_keeps_selection() {
        let mut board = DistributionBoard::default();
        board.select_shift(ShiftKey::Second);
        let mut cfg = Config::new("b");
        cfg.shifts.second.manager = "New".to_string();
        board.reconfigure(&cfg);
        assert_eq!(board.shift_key(), ShiftKey::Second);
        assert_eq!(board.manager(), "New");
    }
}
