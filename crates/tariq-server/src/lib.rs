pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Init / config
        .route("/api/init", post(routes::init::init_project))
        .route("/api/config", get(routes::config::get_config))
        .route(
            "/api/config/validate",
            get(routes::config::validate_config),
        )
        .route("/api/shifts", get(routes::config::list_shifts))
        // Tables
        .route(
            "/api/tables/{table}",
            get(routes::records::list_records).post(routes::records::create_record),
        )
        .route(
            "/api/tables/{table}/{id}",
            put(routes::records::update_record),
        )
        .route(
            "/api/tables/{table}/{id}/delete-request",
            post(routes::records::request_delete),
        )
        .route(
            "/api/delete-requests/{token}",
            axum::routing::delete(routes::records::cancel_delete),
        )
        .route(
            "/api/delete-requests/{token}/confirm",
            post(routes::records::confirm_delete),
        )
        // Distribution
        .route("/api/distribution", get(routes::distribution::get_board))
        .route(
            "/api/distribution/shift",
            put(routes::distribution::select_shift),
        )
        .route(
            "/api/distribution/distribute",
            post(routes::distribution::distribute),
        )
        .route(
            "/api/distribution/rows/{row}/{kind}",
            post(routes::distribution::add_entry),
        )
        .route(
            "/api/distribution/rows/{row}/{kind}/{index}",
            put(routes::distribution::edit_entry).delete(routes::distribution::delete_entry),
        )
        .route(
            "/api/distribution/report",
            get(routes::distribution::get_report),
        )
        .route(
            "/api/distribution/send",
            post(routes::distribution::send_report),
        )
        // Sessions
        .route("/api/sessions/analyze", post(routes::sessions::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the API server on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read
/// the actual port before starting (useful when `port = 0` and the OS picks
/// a free port).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("tariq server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/distribution");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
