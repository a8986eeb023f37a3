use axum::extract::State;
use axum::Json;
use tariq_core::config::Config;

use super::{join_error, lock};
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize, Default)]
pub struct InitBody {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /api/init: create `.tariq/`, a default config and empty tables.
pub async fn init_project(
    State(app): State<AppState>,
    body: Option<Json<InitBody>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let name = body
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("tariq")
        .to_string();

    let root = app.root.clone();
    let (created, config) = tokio::task::spawn_blocking(move || {
        let created = tariq_core::store::init(&root, &name)?;
        let config = Config::load(&root)?;
        Ok::<_, tariq_core::TariqError>((created, config))
    })
    .await
    .map_err(join_error)??;

    lock(&app.board)?.reconfigure(&config);

    Ok(Json(serde_json::json!({
        "created": created,
        "project": config.project.name,
    })))
}
