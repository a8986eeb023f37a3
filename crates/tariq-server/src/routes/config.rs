use axum::extract::State;
use axum::Json;
use tariq_core::config::Config;

use super::join_error;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/config: read-only view of `.tariq/config.yaml`.
pub async fn get_config(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = Config::load(&root)?;
        let json = serde_json::to_value(&config)?;
        Ok::<_, tariq_core::TariqError>(json)
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

/// GET /api/config/validate: warnings for the current config.
pub async fn validate_config(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = Config::load(&root)?;
        let warnings = config.validate();
        Ok::<_, tariq_core::TariqError>(serde_json::json!({
            "ok": warnings.is_empty(),
            "warnings": warnings,
        }))
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}

/// GET /api/shifts: the two shifts in selector order.
///
/// Falls back to the built-in shifts when the board is not initialized so
/// the selector can render before `init`.
pub async fn list_shifts(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let shifts = match Config::load(&root) {
            Ok(cfg) => cfg.shifts,
            Err(tariq_core::TariqError::NotInitialized) => Default::default(),
            Err(e) => return Err(e),
        };
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
        Ok(serde_json::json!(list))
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}
