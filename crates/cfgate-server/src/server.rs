use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use cfgate_config::Section;
use cfgate_core::{ConfigService, Error};
use cfgate_storage::ConfigStore;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

pub struct ConfigServer {
    pub service: ConfigService,
    pub read_only: bool,
    /// Held across load, merge and save so concurrent writes cannot
    /// reconcile against the same stale snapshot.
    write_lock: Mutex<()>,
}

#[derive(Clone)]
struct AppState {
    server: Arc<ConfigServer>,
}

impl ConfigServer {
    pub fn new(store: Arc<dyn ConfigStore>, read_only: bool) -> Self {
        Self {
            service: ConfigService::new(store),
            read_only,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn serve(
        store: Arc<dyn ConfigStore>,
        host: &str,
        port: u16,
        read_only: bool,
    ) -> anyhow::Result<()> {
        let app = router(Arc::new(Self::new(store, read_only)));

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!("Config server listening on {}", addr);
        if read_only {
            info!("Read-only mode: write requests will be rejected");
        }

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the HTTP router around a server instance
pub fn router(server: Arc<ConfigServer>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_info))
        .route("/api/config", get(api_get_config).put(api_put_config))
        .route(
            "/api/config/:section",
            get(api_get_section).put(api_put_section),
        )
        .layer(cors)
        .with_state(AppState { server })
}

/// GET handler for server info/health check
async fn handle_info() -> Json<Value> {
    let sections: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();
    Json(serde_json::json!({
        "name": "cfgate",
        "version": env!("CARGO_PKG_VERSION"),
        "sections": sections
    }))
}

fn error_response(e: Error) -> Response {
    let status = match &e {
        Error::UnknownSection(_) => StatusCode::NOT_FOUND,
        Error::SchemaInvalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Persistence(_) | Error::Serialization(_) => {
            error!("Config request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string()).into_response()
}

fn read_only_response() -> Response {
    (StatusCode::FORBIDDEN, "Server is in read-only mode").into_response()
}

// ============================================================================
// REST API handlers
// ============================================================================

/// GET /api/config - Full document, secrets masked
async fn api_get_config(State(state): State<AppState>) -> Response {
    match state.server.service.get_document().await {
        Ok(doc) => Json(doc).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/config - Update any subset of sections
async fn api_put_config(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if state.server.read_only {
        return read_only_response();
    }

    let _guard = state.server.write_lock.lock().await;
    match state.server.service.put_document(body).await {
        Ok(doc) => Json(doc).into_response(),
        Err(e) => {
            warn!("Rejected document update: {}", e);
            error_response(e)
        }
    }
}

/// GET /api/config/:section - One section, secrets masked
async fn api_get_section(State(state): State<AppState>, Path(section): Path<String>) -> Response {
    match state.server.service.get_section(&section).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/config/:section - Partial update of one section
async fn api_put_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if let Err(e) = section.parse::<Section>() {
        return error_response(e.into());
    }
    if state.server.read_only {
        return read_only_response();
    }

    let _guard = state.server.write_lock.lock().await;
    match state
        .server
        .service
        .put_section(&section, Value::Object(body))
        .await
    {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            warn!("Rejected update of '{}': {}", section, e);
            error_response(e)
        }
    }
}
