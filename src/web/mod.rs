//! Web API module for MapThemer.
//!
//! This module provides the REST API behind the browser editor: it owns the
//! palette store, hands out the preview style and serves the downloads.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/categories` - List palette categories in canonical order
//! - `GET /api/palette` - Current palette and its revision
//! - `PUT /api/palette` - Replace the palette (optional `?strict=true`)
//! - `POST /api/palette/import` - Replace the palette from raw file text
//! - `PUT /api/palette/{category}` - Set one category's color
//! - `POST /api/palette/reset` - Restore the built-in palette
//! - `GET /api/palette/validation` - Strict validation report
//! - `GET /api/style` - Preview style document (optional `?source=`)
//! - `GET /api/export/palette` - Download `palette.json`
//! - `GET /api/export/theme` - Download `theme.json`
//!
//! Every other path serves the embedded editor page.

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::{PALETTE_FILE_NAME, THEME_FILE_NAME};
use crate::error::ThemeError;
use crate::export::{self, StyleSettings};
use crate::layers;
use crate::models::{Category, Color, Palette, StyleDocument};
use crate::services::{PaletteReport, PaletteStore};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// The palette being edited
    store: Arc<RwLock<PaletteStore>>,
}

impl AppState {
    /// Creates a new application state editing `palette`.
    pub fn new(config: Config, palette: Palette) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(PaletteStore::new(palette))),
        }
    }

    /// Returns the configuration the server was started with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// API version.
    pub version: String,
}

/// Category listing.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Wire names in canonical order.
    pub categories: Vec<&'static str>,
}

/// Current palette.
#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    /// Store revision the palette belongs to.
    pub revision: u64,
    /// Flat category → color map.
    pub palette: Palette,
    /// Categories some layer needs that the palette lacks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<Category>,
}

/// Body of `PUT /api/palette/{category}`.
#[derive(Debug, Deserialize)]
pub struct SetColorRequest {
    /// New color, `#rgb` or `#rrggbb`.
    pub color: String,
}

/// Query of `PUT /api/palette`.
#[derive(Debug, Deserialize)]
pub struct ReplaceQuery {
    /// Validate against the schema before replacing.
    pub strict: Option<bool>,
}

/// Query of `GET /api/style`.
#[derive(Debug, Deserialize)]
pub struct StyleQuery {
    /// Source name the layers reference.
    pub source: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Maps a palette error onto a status code: bad input is a 400, the rest 500.
fn theme_error(context: &str, err: &ThemeError) -> (StatusCode, Json<ApiError>) {
    let status = if err.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ApiError::with_details(context, err.to_string())))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/categories - List every palette category.
async fn list_categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
    })
}

fn palette_response(store: &PaletteStore) -> PaletteResponse {
    PaletteResponse {
        revision: store.revision(),
        palette: store.get().clone(),
        degraded: layers::degraded_categories(store.get()),
    }
}

/// GET /api/palette - Current palette.
async fn get_palette(State(state): State<AppState>) -> Json<PaletteResponse> {
    let store = state.store.read().await;
    Json(palette_response(&store))
}

/// Parses `body` and swaps it in. The text is parsed before the lock is taken.
async fn replace_palette(state: &AppState, body: &str, strict: bool) -> ApiResult<PaletteResponse> {
    let palette = export::import_palette(body, strict)
        .map_err(|e| theme_error("Failed to import palette", &e))?;

    let mut store = state.store.write().await;
    store.replace(palette);

    let response = palette_response(&store);
    info!(
        revision = response.revision,
        entries = response.palette.len(),
        "Palette replaced"
    );
    if !response.degraded.is_empty() {
        warn!(
            "Palette lacks {} categories used by the style: {:?}",
            response.degraded.len(),
            response.degraded
        );
    }
    Ok(response)
}

/// PUT /api/palette - Replace the palette with a JSON body.
async fn put_palette(
    State(state): State<AppState>,
    Query(query): Query<ReplaceQuery>,
    body: String,
) -> ApiResult<Json<PaletteResponse>> {
    let strict = query
        .strict
        .unwrap_or(state.config.palette.strict_import);
    replace_palette(&state, &body, strict).await.map(Json)
}

/// POST /api/palette/import - Replace the palette from the text of a palette file.
async fn import_palette(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<PaletteResponse>> {
    let strict = state.config.palette.strict_import;
    replace_palette(&state, &body, strict).await.map(Json)
}

/// PUT /api/palette/{category} - Set one category's color.
async fn set_color(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<SetColorRequest>,
) -> ApiResult<Json<PaletteResponse>> {
    let color = Color::new(request.color);
    if !color.is_valid() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(format!("Invalid color: {color}"))),
        ));
    }

    let mut store = state.store.write().await;
    let category = store
        .set_field_by_name(&category, color)
        .map_err(|e| theme_error("Failed to set color", &e))?;

    debug!(%category, revision = store.revision(), "Color updated");
    Ok(Json(palette_response(&store)))
}

/// POST /api/palette/reset - Restore the built-in palette.
async fn reset_palette(State(state): State<AppState>) -> Json<PaletteResponse> {
    let mut store = state.store.write().await;
    store.reset();
    info!(revision = store.revision(), "Palette reset to default");
    Json(palette_response(&store))
}

/// GET /api/palette/validation - Strict validation report.
async fn validate_palette(State(state): State<AppState>) -> Json<PaletteReport> {
    let store = state.store.read().await;
    Json(PaletteReport::build(store.get(), true))
}

/// GET /api/style - Preview style for the current palette.
async fn get_style(
    State(state): State<AppState>,
    Query(query): Query<StyleQuery>,
) -> Json<StyleDocument> {
    let mut settings = StyleSettings::preview(&state.config.style);
    if let Some(source) = query.source.as_deref().filter(|s| !s.is_empty()) {
        settings.source = source;
    }

    let store = state.store.read().await;
    Json(export::build_style(&settings, store.get()))
}

/// Builds a JSON download response.
fn attachment(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// GET /api/export/palette - Download the palette.
async fn export_palette(State(state): State<AppState>) -> Response {
    let body = state.store.read().await.serialize();
    attachment(PALETTE_FILE_NAME, body)
}

/// GET /api/export/theme - Download the style document.
async fn export_theme(State(state): State<AppState>) -> ApiResult<Response> {
    let document = {
        let store = state.store.read().await;
        export::export_theme(&state.config.style, store.get())
    };
    let body = export::theme_to_json(&document)
        .map_err(|e| theme_error("Failed to export theme", &e))?;
    Ok(attachment(THEME_FILE_NAME, body))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The server is meant to run locally next to the browser editor.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/categories", get(list_categories))
        .route("/api/palette", get(get_palette).put(put_palette))
        .route("/api/palette/import", post(import_palette))
        .route("/api/palette/reset", post(reset_palette))
        .route("/api/palette/validation", get(validate_palette))
        .route("/api/palette/{category}", put(set_color))
        .route("/api/style", get(get_style))
        .route("/api/export/palette", get(export_palette))
        .route("/api/export/theme", get(export_theme))
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `palette` - Palette the editor starts with
/// * `addr` - Socket address to bind to
pub async fn run_server(config: Config, palette: Palette, addr: SocketAddr) -> anyhow::Result<()> {
    if !static_files::has_embedded_assets() {
        warn!("Editor page is not embedded; only the API is available");
    }

    let state = AppState::new(config, palette);
    let app = create_router(state);

    info!("Starting MapThemer web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_error_status() {
        let (status, body) = theme_error("x", &ThemeError::validation("bad"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "x");
        assert!(body.details.as_deref().unwrap_or("").contains("bad"));

        let io = ThemeError::io("read", "palette.json", std::io::Error::other("disk"));
        let (status, _) = theme_error("x", &io);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_attachment_headers() {
        let response = attachment("theme.json", "{}".to_string());
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok());
        assert_eq!(disposition, Some("attachment; filename=\"theme.json\""));
    }

    #[test]
    fn test_palette_response_reports_degraded() {
        let mut store = PaletteStore::default();
        assert!(palette_response(&store).degraded.is_empty());

        store.replace(Palette::empty());
        assert_eq!(
            palette_response(&store).degraded.len(),
            Category::ALL.len()
        );
    }
}
