use axum::extract::{Path, State};
use axum::Json;
use tariq_core::record::{Resident, Supervisor, Task};
use tariq_core::store;
use tariq_core::types::Table;

use super::{join_error, lock};
use crate::error::AppError;
use crate::state::AppState;

/// Call a store function generic over `Record` for the table named at
/// runtime, serializing whatever it returns.
macro_rules! for_table {
    ($table:expr, $($f:ident)::+ ( $($arg:expr),* )) => {
        match $table {
            Table::Tasks => serde_json::to_value($($f)::+::<Task>($($arg),*)?)?,
            Table::Residents => serde_json::to_value($($f)::+::<Resident>($($arg),*)?)?,
            Table::Supervisors => serde_json::to_value($($f)::+::<Supervisor>($($arg),*)?)?,
        }
    };
}

#[derive(serde::Deserialize)]
pub struct RecordBody {
    #[serde(alias = "name", alias = "title")]
    pub text: String,
}

/// GET /api/tables/:table: every row of the table, in insertion order.
pub async fn list_records(
    State(app): State<AppState>,
    Path(table): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let table: Table = table.parse()?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let rows = for_table!(table, store::list(&root));
        Ok::<_, anyhow::Error>(rows)
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

/// POST /api/tables/:table: insert a row.
pub async fn create_record(
    State(app): State<AppState>,
    Path(table): Path<String>,
    Json(body): Json<RecordBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let table: Table = table.parse()?;
    let root = app.root.clone();
    let writes = app.writes.clone();
    let result = tokio::task::spawn_blocking(move || {
        let _guard = writes
            .lock()
            .map_err(|_| anyhow::anyhow!("store write lock poisoned"))?;
        let row = for_table!(table, store::insert(&root, &body.text));
        Ok::<_, anyhow::Error>(row)
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

/// PUT /api/tables/:table/:id: replace the row's name or title.
pub async fn update_record(
    State(app): State<AppState>,
    Path((table, id)): Path<(String, String)>,
    Json(body): Json<RecordBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let table: Table = table.parse()?;
    let root = app.root.clone();
    let writes = app.writes.clone();
    let result = tokio::task::spawn_blocking(move || {
        let _guard = writes
            .lock()
            .map_err(|_| anyhow::anyhow!("store write lock poisoned"))?;
        let row = for_table!(table, store::update(&root, &id, &body.text));
        Ok::<_, anyhow::Error>(row)
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

/// POST /api/tables/:table/:id/delete-request: first step of a delete.
///
/// Nothing is removed; the response carries the token to confirm and the
/// question to put to the user.
pub async fn request_delete(
    State(app): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let table: Table = table.parse()?;
    let root = app.root.clone();
    let lookup_id = id.clone();
    let row = tokio::task::spawn_blocking(move || {
        let row = for_table!(table, store::get(&root, &lookup_id));
        Ok::<_, anyhow::Error>(row)
    })
    .await
    .map_err(join_error)??;

    let label = row[table.text_field()].as_str().unwrap_or_default();
    let pending = lock(&app.deletes)?.request(table, &id, label);
    Ok(Json(serde_json::to_value(pending)?))
}

/// POST /api/delete-requests/:token/confirm: second step; performs the delete.
pub async fn confirm_delete(
    State(app): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let target = lock(&app.deletes)?.confirm(&token)?;
    let root = app.root.clone();
    let writes = app.writes.clone();
    let result = tokio::task::spawn_blocking(move || {
        let _guard = writes
            .lock()
            .map_err(|_| anyhow::anyhow!("store write lock poisoned"))?;
        let removed = for_table!(target.table, store::delete(&root, &target.id));
        Ok::<_, anyhow::Error>(serde_json::json!({
            "table": target.table,
            "deleted": removed,
        }))
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

/// DELETE /api/delete-requests/:token: abandon a pending delete.
pub async fn cancel_delete(
    State(app): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    lock(&app.deletes)?.cancel(&token)?;
    Ok(Json(serde_json::json!({ "token": token, "cancelled": true })))
}
