//! Shift distribution: hands each eligible supervisor a quota of resident
//! sessions and a handful of daily tasks.
//!
//! Sessions come from one shared pool that shrinks as supervisors draw from
//! it, so a resident is seen by at most one supervisor per allocation. Tasks
//! are drawn per supervisor from a fresh copy of the whole catalog, so two
//! supervisors may well get the same task.

use crate::config::DistributionConfig;
use crate::error::{Result, TariqError};
use crate::record::{Resident, Supervisor, Task};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AllocationPolicy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    pub sessions_per_supervisor: usize,
    pub min_tasks: usize,
    pub max_tasks: usize,
    pub excluded_residents: Vec<String>,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::from(&DistributionConfig::default())
    }
}

impl From<&DistributionConfig> for AllocationPolicy {
    fn from(cfg: &DistributionConfig) -> Self {
        Self {
            sessions_per_supervisor: cfg.sessions_per_supervisor,
            min_tasks: cfg.min_tasks,
            max_tasks: cfg.max_tasks,
            excluded_residents: cfg.excluded_residents.clone(),
        }
    }
}

impl AllocationPolicy {
    fn is_excluded(&self, name: &str) -> bool {
        self.excluded_residents.iter().any(|x| x == name)
    }

    fn task_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let lo = self.min_tasks.min(self.max_tasks);
        let hi = self.min_tasks.max(self.max_tasks);
        rng.gen_range(lo..=hi)
    }
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

/// One supervisor's slice of an allocation. Both lists keep draw order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub supervisor: String,
    pub sessions: Vec<String>,
    pub tasks: Vec<String>,
}

impl AssignmentRow {
    pub fn new(supervisor: impl Into<String>) -> Self {
        Self {
            supervisor: supervisor.into(),
            sessions: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    pub rows: Vec<AssignmentRow>,
}

impl Allocation {
    pub fn new(rows: Vec<AssignmentRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Result<&AssignmentRow> {
        self.rows
            .get(index)
            .ok_or(TariqError::AssignmentNotFound(index))
    }

    pub fn row_mut(&mut self, index: usize) -> Result<&mut AssignmentRow> {
        self.rows
            .get_mut(index)
            .ok_or(TariqError::AssignmentNotFound(index))
    }

    /// Every session name across all rows, in row order.
    pub fn session_names(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|r| r.sessions.iter().map(String::as_str))
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Snapshot of the three tables plus the manager of the selected shift.
#[derive(Debug, Clone, Copy)]
pub struct AllocationInput<'a> {
    pub residents: &'a [Resident],
    pub supervisors: &'a [Supervisor],
    pub tasks: &'a [Task],
    pub manager: &'a str,
}

/// Distribute sessions and tasks across the supervisors of one shift.
///
/// Never fails: short inputs just leave rows partially filled.
pub fn allocate<R: Rng + ?Sized>(
    input: AllocationInput<'_>,
    policy: &AllocationPolicy,
    rng: &mut R,
) -> Allocation {
    let mut resident_pool: Vec<&str> = input
        .residents
        .iter()
        .map(|r| r.name.as_str())
        .filter(|name| !policy.is_excluded(name))
        .collect();

    let rows = input
        .supervisors
        .iter()
        .filter(|s| s.name != input.manager)
        .map(|sup| {
            let sessions = draw(&mut resident_pool, policy.sessions_per_supervisor, rng);

            let count = policy.task_count(rng);
            let mut task_pool: Vec<&str> = input.tasks.iter().map(|t| t.title.as_str()).collect();
            let tasks = draw(&mut task_pool, count, rng);

            AssignmentRow {
                supervisor: sup.name.clone(),
                sessions,
                tasks,
            }
        })
        .collect();

    Allocation::new(rows)
}

/// Take up to `count` entries uniformly at random out of `pool`, removing
/// each one as it is drawn.
fn draw<R: Rng + ?Sized>(pool: &mut Vec<&str>, count: usize, rng: &mut R) -> Vec<String> {
    let mut picked = Vec::with_capacity(count.min(pool.len()));
    while picked.len() < count && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        picked.push(pool.remove(idx).to_string());
    }
    picked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
