use std::path::{Path, PathBuf};
use tariq_core::paths::TARIQ_DIR;

/// Resolve the board root directory.
///
/// Priority:
/// 1. `--root` flag / `TARIQ_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.tariq/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_board(&cwd).unwrap_or(cwd)
}

fn find_board(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(TARIQ_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_board_from_subdir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(TARIQ_DIR)).unwrap();
        let subdir = dir.path().join("notes/week1");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_board(&subdir).as_deref(), Some(dir.path()));
    }

    #[test]
    fn no_board_found() {
        let dir = TempDir::new().unwrap();
        let subdir = dir.path().join("a/b");
        std::fs::create_dir_all(&subdir).unwrap();
        // The tempdir's ancestors are outside our control, so only check
        // that the subdir itself is not reported.
        assert_ne!(find_board(&subdir).as_deref(), Some(subdir.as_path()));
    }
}
