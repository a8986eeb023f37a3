use crate::output::{print_json, print_table};
use tariq_core::{config::Config, shift::ShiftCatalog, TariqError};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let shifts = match Config::load(root) {
        Ok(cfg) => cfg.shifts,
        Err(TariqError::NotInitialized) => ShiftCatalog::default(),
        Err(e) => return Err(e.into()),
    };

    if json {
        let list: Vec<serde_json::Value> = shifts
            .entries()
            .into_iter()
            .map(|(key, shift)| {
                serde_json::json!({
                    "key": key,
                    "label": shift.label,
                    "manager": shift.manager,
                })
            })
            .collect();
        return print_json(&list);
    }

    let rows = shifts
        .entries()
        .into_iter()
        .map(|(key, shift)| {
            vec![
                key.to_string(),
                shift.label.clone(),
                shift.manager.clone(),
            ]
        })
        .collect();
    print_table(&["KEY", "LABEL", "MANAGER"], rows);
    Ok(())
}
