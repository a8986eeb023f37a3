use axum::extract::State;
use axum::Json;
use tariq_core::analysis::{analyze_session, HttpAnalyzer};
use tariq_core::config::Config;

use super::join_error;
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct AnalyzeBody {
    pub summary: String,
}

/// POST /api/sessions/analyze: send a session summary for analysis.
///
/// A blank summary is a 400. Remote failures come back as a 200 with a
/// `fallback` outcome carrying the stock message.
pub async fn analyze(
    State(app): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = Config::load(&root)?;
        let analyzer = HttpAnalyzer::from_config(&config.analysis)?;
        let outcome = analyze_session(&analyzer, &config.analysis, &body.summary)?;
        Ok::<_, tariq_core::TariqError>(serde_json::to_value(outcome)?)
    })
    .await
    .map_err(join_error)??;

    Ok(Json(result))
}
