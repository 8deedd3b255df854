use crate::tools::{ToolError, ToolRegistry};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

type AppState = Arc<ToolRegistry>;

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let status = match &self {
            ToolError::NotFound(_) => StatusCode::NOT_FOUND,
            ToolError::InvalidArguments(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ToolError::Execution(_) => StatusCode::BAD_GATEWAY,
        };
        (
            status,
            Json(json!({
                "success": false,
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

/// Routes: `GET /health`, `GET /tools`, `POST /{tool}`
pub fn router(registry: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/:tool", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(registry)
}

/// Serve the registry until the process is stopped
pub async fn serve(registry: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Tool server listening on http://{}", addr);

    axum::serve(listener, router(registry))
        .await
        .context("Server error")?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_tools(State(registry): State<AppState>) -> Json<Value> {
    Json(json!({ "tools": registry.describe() }))
}

async fn call_tool(
    State(registry): State<AppState>,
    Path(tool): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ToolError> {
    let Json(args) = body.map_err(|rejection| ToolError::InvalidArguments(rejection.body_text()))?;
    match registry.dispatch(&tool, args).await {
        Ok(output) => Ok(Json(output)),
        Err(e) => {
            warn!(tool = %tool, error = %e, "Tool call failed");
            Err(e)
        }
    }
}
