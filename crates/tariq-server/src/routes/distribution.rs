use axum::extract::{Path, State};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tariq_core::config::Config;
use tariq_core::record::{Resident, Supervisor, Task};
use tariq_core::store;
use tariq_core::types::{EntryKind, ShiftKey};
use tariq_core::TariqError;

use super::{join_error, lock};
use crate::error::AppError;
use crate::state::AppState;

/// Pull edited shift labels, managers and quotas into the board before it is
/// shown. Before `init` the board keeps its built-in shifts.
async fn refresh_board(app: &AppState) -> Result<(), AppError> {
    let root = app.root.clone();
    let config = tokio::task::spawn_blocking(move || match Config::load(&root) {
        Ok(cfg) => Ok(Some(cfg)),
        Err(TariqError::NotInitialized) => Ok(None),
        Err(e) => Err(e),
    })
    .await
    .map_err(join_error)??;

    if let Some(cfg) = config {
        lock(&app.board)?.reconfigure(&cfg);
    }
    Ok(())
}

/// GET /api/distribution: selected shift, its manager, and the current rows.
pub async fn get_board(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    refresh_board(&app).await?;
    let snapshot = lock(&app.board)?.snapshot();
    Ok(Json(serde_json::to_value(snapshot)?))
}

#[derive(serde::Deserialize)]
pub struct SelectShiftBody {
    pub shift: ShiftKey,
}

/// PUT /api/distribution/shift: switch shifts; clears the board if it changed.
pub async fn select_shift(
    State(app): State<AppState>,
    Json(body): Json<SelectShiftBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    refresh_board(&app).await?;
    let snapshot = {
        let mut board = lock(&app.board)?;
        board.select_shift(body.shift);
        board.snapshot()
    };
    Ok(Json(serde_json::to_value(snapshot)?))
}

#[derive(serde::Deserialize, Default)]
pub struct DistributeBody {
    /// Fixed seed for a reproducible draw.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// POST /api/distribution/distribute: auto-distribute sessions and tasks
/// for the selected shift from a fresh read of all three tables.
pub async fn distribute(
    State(app): State<AppState>,
    body: Option<Json<DistributeBody>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let root = app.root.clone();
    let board = app.board.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = Config::load(&root)?;
        let residents = store::list::<Resident>(&root)?;
        let supervisors = store::list::<Supervisor>(&root)?;
        let tasks = store::list::<Task>(&root)?;

        let mut rng = match body.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut board = board
            .lock()
            .map_err(|_| anyhow::anyhow!("session state lock poisoned"))?;
        board.reconfigure(&config);
        board.distribute(&residents, &supervisors, &tasks, &mut rng);
        Ok::<_, anyhow::Error>(serde_json::to_value(board.snapshot())?)
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct EntryBody {
    #[serde(alias = "name", alias = "title")]
    pub text: String,
}

/// POST /api/distribution/rows/:row/:kind: append a session or task.
pub async fn add_entry(
    State(app): State<AppState>,
    Path((row, kind)): Path<(usize, String)>,
    Json(body): Json<EntryBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let kind: EntryKind = kind.parse()?;
    refresh_board(&app).await?;
    let (changed, snapshot) = {
        let mut board = lock(&app.board)?;
        let changed = board.add_entry(row, kind, &body.text)?;
        (changed, board.snapshot())
    };
    Ok(Json(serde_json::json!({
        "changed": changed,
        "board": snapshot,
    })))
}

/// PUT /api/distribution/rows/:row/:kind/:index: replace an entry.
pub async fn edit_entry(
    State(app): State<AppState>,
    Path((row, kind, index)): Path<(usize, String, usize)>,
    Json(body): Json<EntryBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let kind: EntryKind = kind.parse()?;
    refresh_board(&app).await?;
    let (changed, snapshot) = {
        let mut board = lock(&app.board)?;
        let changed = board.edit_entry(row, kind, index, &body.text)?;
        (changed, board.snapshot())
    };
    Ok(Json(serde_json::json!({
        "changed": changed,
        "board": snapshot,
    })))
}

/// DELETE /api/distribution/rows/:row/:kind/:index: remove an entry.
pub async fn delete_entry(
    State(app): State<AppState>,
    Path((row, kind, index)): Path<(usize, String, usize)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let kind: EntryKind = kind.parse()?;
    refresh_board(&app).await?;
    let (removed, snapshot) = {
        let mut board = lock(&app.board)?;
        let removed = board.delete_entry(row, kind, index)?;
        (removed, board.snapshot())
    };
    Ok(Json(serde_json::json!({
        "removed": removed,
        "board": snapshot,
    })))
}

/// GET /api/distribution/report: the message preview.
pub async fn get_report(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    refresh_board(&app).await?;
    let board = lock(&app.board)?;
    Ok(Json(serde_json::json!({
        "shift": board.shift_key(),
        "message": board.preview(),
    })))
}

/// POST /api/distribution/send: the preview dialog's send button.
///
/// No messaging integration exists; this only acknowledges with the text
/// that would have gone out.
pub async fn send_report(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    refresh_board(&app).await?;
    let message = lock(&app.board)?.preview();
    tracing::info!("report send requested; no delivery channel configured");
    Ok(Json(serde_json::json!({
        "sent": false,
        "message": message,
    })))
}
