use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tariq_core::board::DistributionBoard;
use tariq_core::config::Config;
use tariq_core::confirm::DeleteRequests;

/// Shared application state passed to all route handlers.
///
/// The board and the pending deletes belong to the single user session the
/// dashboard serves; they live only as long as the process.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub board: Arc<Mutex<DistributionBoard>>,
    pub deletes: Arc<Mutex<DeleteRequests>>,
    /// Held across each read-modify-write of a table file.
    pub writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        let board = match Config::load(&root) {
            Ok(cfg) => DistributionBoard::from_config(&cfg),
            Err(e) => {
                tracing::debug!(error = %e, "no config yet, using default shifts");
                DistributionBoard::default()
            }
        };
        Self {
            root,
            board: Arc::new(Mutex::new(board)),
            deletes: Arc::new(Mutex::new(DeleteRequests::new())),
            writes: Arc::new(Mutex::new(())),
        }
    }
}
