use crate::output::print_json;
use anyhow::Context;
use tariq_core::{config::Config, paths, store, types::Table};
use std::path::Path;

pub fn run(root: &Path, name: Option<&str>, json: bool) -> anyhow::Result<()> {
    let project_name = match name {
        Some(n) => n.to_string(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "board".to_string()),
    };

    let created = store::init(root, &project_name)
        .with_context(|| format!("failed to initialize {}", root.display()))?;
    let config = Config::load(root).context("failed to read config.yaml")?;

    if json {
        return print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "created": created,
            "project": config.project.name,
        }));
    }

    if created {
        println!("Initialized tariq board '{}' in: {}", config.project.name, root.display());
    } else {
        println!("Board already initialized in: {}", root.display());
    }
    println!("  {}", paths::CONFIG_FILE);
    for table in Table::all() {
        println!("  {}/{}.yaml", paths::TARIQ_DIR, table);
    }
    Ok(())
}
