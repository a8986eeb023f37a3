use crate::output::{print_json, print_table};
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tariq_core::{
    board::DistributionBoard,
    config::Config,
    record::{Resident, Supervisor, Task},
    store,
    types::ShiftKey,
};

pub fn run(
    root: &Path,
    shift: ShiftKey,
    seed: Option<u64>,
    report: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let residents = store::list::<Resident>(root)?;
    let supervisors = store::list::<Supervisor>(root)?;
    let tasks = store::list::<Task>(root)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut board = DistributionBoard::from_config(&config);
    board.select_shift(shift);
    board.distribute(&residents, &supervisors, &tasks, &mut rng);

    if json {
        let mut value = serde_json::to_value(board.snapshot())?;
        if report {
            value["report"] = serde_json::Value::String(board.preview());
        }
        return print_json(&value);
    }

    if report {
        println!("{}", board.preview());
        return Ok(());
    }

    println!("{}", board.shift_label());
    println!("Manager: {}\n", board.manager());
    if board.allocation().is_empty() {
        println!("No supervisors to distribute to.");
        return Ok(());
    }
    let rows = board
        .allocation()
        .rows
        .iter()
        .map(|row| {
            vec![
                row.supervisor.clone(),
                row.sessions.join(", "),
                row.tasks.len().to_string(),
            ]
        })
        .collect();
    print_table(&["SUPERVISOR", "SESSIONS", "TASKS"], rows);
    Ok(())
}
