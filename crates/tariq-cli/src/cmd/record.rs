use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use std::io::{BufRead, Write};
use std::path::Path;
use tariq_core::{confirm::DeleteRequests, record::Record, store};

/// Shared by `resident`, `supervisor` and `task`.
#[derive(Subcommand)]
pub enum RecordSubcommand {
    /// Add a row
    Add {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List all rows in insertion order
    List,
    /// Replace a row's name or title
    Edit {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Delete a row after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

pub fn run<R: Record>(root: &Path, subcmd: RecordSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        RecordSubcommand::Add { text } => add::<R>(root, &text.join(" "), json),
        RecordSubcommand::List => list::<R>(root, json),
        RecordSubcommand::Edit { id, text } => edit::<R>(root, &id, &text.join(" "), json),
        RecordSubcommand::Delete { id, yes } => delete::<R>(root, &id, yes, json),
    }
}

fn add<R: Record>(root: &Path, text: &str, json: bool) -> anyhow::Result<()> {
    let record = store::insert::<R>(root, text)
        .with_context(|| format!("failed to add to {}", R::TABLE))?;

    if json {
        print_json(&record)?;
    } else {
        println!("Added [{}]: {}", record.id(), record.text());
    }
    Ok(())
}

fn list<R: Record>(root: &Path, json: bool) -> anyhow::Result<()> {
    let rows = store::list::<R>(root)?;

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No {}.", R::TABLE);
        return Ok(());
    }

    let header = R::TABLE.text_field().to_uppercase();
    let table = rows
        .iter()
        .map(|r| vec![r.id().to_string(), r.text().to_string()])
        .collect();
    print_table(&["ID", &header], table);
    Ok(())
}

fn edit<R: Record>(root: &Path, id: &str, text: &str, json: bool) -> anyhow::Result<()> {
    let record = store::update::<R>(root, id, text)?;

    if json {
        print_json(&record)?;
    } else {
        println!("Updated [{}]: {}", record.id(), record.text());
    }
    Ok(())
}

fn delete<R: Record>(root: &Path, id: &str, yes: bool, json: bool) -> anyhow::Result<()> {
    let record = store::get::<R>(root, id)?;

    let mut requests = DeleteRequests::new();
    let pending = requests.request(R::TABLE, record.id(), record.text());

    if !yes && !ask(&format!("{} ({})", pending.prompt, pending.label))? {
        if json {
            print_json(&serde_json::json!({ "deleted": null }))?;
        } else {
            println!("Cancelled.");
        }
        return Ok(());
    }

    let target = requests.confirm(&pending.token)?;
    let removed = store::delete::<R>(root, &target.id)?;

    if json {
        print_json(&serde_json::json!({
            "table": target.table,
            "deleted": removed,
        }))?;
    } else {
        println!("Deleted [{}]: {}", removed.id(), removed.text());
    }
    Ok(())
}

/// Yes/no question on stdin. Anything but `y`/`yes`/`نعم` is a no.
fn ask(question: &str) -> anyhow::Result<bool> {
    eprint!("{question} [y/N] ");
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "نعم"
    )
}
