use crate::types::Table;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const TARIQ_DIR: &str = ".tariq";
pub const CONFIG_FILE: &str = ".tariq/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn tariq_dir(root: &Path) -> PathBuf {
    root.join(TARIQ_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// One YAML document per table: `.tariq/<table>.yaml`.
pub fn table_path(root: &Path, table: Table) -> PathBuf {
    tariq_dir(root).join(format!("{}.yaml", table.as_str()))
}

pub fn is_initialized(root: &Path) -> bool {
    tariq_dir(root).is_dir()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
