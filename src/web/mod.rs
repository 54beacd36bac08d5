//! Web API module for RoomCraft.
//!
//! This module provides the REST surface between the wizard frontend and the
//! image generation collaborator.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/styles` - Static style catalog for presentation
//! - `POST /api/generate-design` - Generate an image for a design record

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::generate::{ImageGenerator, RoomImageClient};
use crate::models::{RoomDesign, StyleCatalog};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Image generation collaborator.
    generator: Arc<dyn ImageGenerator>,
    /// Style catalog (immutable after load).
    catalog: Arc<StyleCatalog>,
}

impl AppState {
    /// Creates application state backed by the real image client.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = RoomImageClient::new(&config.api)?;
        Ok(Self::with_generator(Arc::new(client)))
    }

    /// Creates application state with an injected generator (for testing).
    #[must_use]
    pub fn with_generator(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            generator,
            catalog: Arc::new(StyleCatalog::default()),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Successful generation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateDesignResponse {
    /// URL of the generated image.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// API error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/styles - Static style catalog.
async fn list_styles(State(state): State<AppState>) -> Json<StyleCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/generate-design - Generate an image for a design record.
///
/// Accepts the camelCase wizard record and passes it through to the image
/// collaborator. Any collaborator failure maps to a 500 with a stable user
/// message; the detail is logged, never exposed.
async fn generate_design(
    State(state): State<AppState>,
    Json(design): Json<RoomDesign>,
) -> Result<Json<GenerateDesignResponse>, (StatusCode, Json<ApiError>)> {
    match state.generator.generate(&design).await {
        Ok(image_url) => Ok(Json(GenerateDesignResponse { image_url })),
        Err(e) => {
            error!("image generation failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to generate design")),
            ))
        }
    }
}

// ============================================================================
// Router and Server
// ============================================================================

/// Creates the application router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // NOTE: This permissive CORS policy is intended for local development
    // only; the server is designed to run locally alongside the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/styles", get(list_styles))
        .route("/api/generate-design", post(generate_design))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server and runs until terminated.
pub async fn run_server(config: &Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting RoomCraft web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
