mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, record::RecordSubcommand};
use std::path::PathBuf;
use tariq_core::record::{Resident, Supervisor, Task};
use tariq_core::types::ShiftKey;

#[derive(Parser)]
#[command(
    name = "tariq",
    about = "Shift board: distribute sessions and tasks across supervisors",
    version,
    propagate_version = true
)]
struct Cli {
    /// Board root (default: auto-detect from .tariq/)
    #[arg(long, global = true, env = "TARIQ_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a board in the current directory
    Init {
        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// List the two shifts and their managers
    Shifts,

    /// Show or validate the board configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Manage residents
    Resident {
        #[command(subcommand)]
        subcommand: RecordSubcommand,
    },

    /// Manage supervisors
    Supervisor {
        #[command(subcommand)]
        subcommand: RecordSubcommand,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        subcommand: RecordSubcommand,
    },

    /// Auto-distribute sessions and tasks for a shift
    Distribute {
        /// Shift to distribute: first or second
        #[arg(long, default_value = "first")]
        shift: ShiftKey,

        /// Fixed seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Print the shareable report instead of the table
        #[arg(long)]
        report: bool,
    },

    /// Send a session summary for analysis
    Analyze {
        #[arg(required = true)]
        summary: Vec<String>,
    },

    /// Serve the JSON API
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { name } => cmd::init::run(&root, name.as_deref(), cli.json),
        Commands::Shifts => cmd::shift::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Resident { subcommand } => {
            cmd::record::run::<Resident>(&root, subcommand, cli.json)
        }
        Commands::Supervisor { subcommand } => {
            cmd::record::run::<Supervisor>(&root, subcommand, cli.json)
        }
        Commands::Task { subcommand } => cmd::record::run::<Task>(&root, subcommand, cli.json),
        Commands::Distribute {
            shift,
            seed,
            report,
        } => cmd::distribute::run(&root, shift, seed, report, cli.json),
        Commands::Analyze { summary } => cmd::analyze::run(&root, &summary.join(" "), cli.json),
        Commands::Ui { port, no_open } => cmd::ui::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
