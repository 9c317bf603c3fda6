//! LDH Stage Predictor API Server
//!
//! Thin HTTP dispatcher over the stateless stage rule engine and the
//! configured classifier/explainer pair.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use biomarker_validator::Validator;
use inference_engine::InferenceEngine;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod assessment;
pub mod error;
pub mod rate_limit;
pub mod report;
mod routes;
pub mod settings;

use settings::{LogSettings, Settings};

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    /// Classifier and explainer
    pub engine: InferenceEngine,
    /// Input range checks
    pub validator: Validator,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Prometheus exporter, when a global recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: InferenceEngine, validator: Validator) -> Self {
        Self {
            engine,
            validator,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` route
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub classifier: String,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/assessments", post(routes::assessments::create_assessment))
        .route("/api/v1/reports", post(routes::reports::create_report))
        .route("/api/v1/guide", get(routes::guide::get_guide))
        .route("/api/v1/symptoms", post(routes::symptoms::record_symptoms))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        classifier: state.engine.classifier_name().to_string(),
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "metrics exporter not installed".to_string()),
    }
}

/// Initialize logging
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<()> {
    let level: Level = settings.level.parse().unwrap_or_else(|_| {
        eprintln!("Unknown log level {:?}, using info", settings.level);
        Level::INFO
    });

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Run the server
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let explainer = settings.explainer.build()?;
    let engine = InferenceEngine::from_model_path(
        settings.model.onnx_path.as_deref(),
        settings.model.input_width,
        Arc::new(explainer),
    )?;

    let mut state = AppState::new(engine, Validator::default());
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!("Prometheus recorder not installed: {}", e),
    }

    let mut app = create_router(Arc::new(state));
    match rate_limit::create_governor_config(&settings.rate_limit) {
        Some(config) => app = app.layer(GovernorLayer { config }),
        None => warn!("Invalid rate limit settings, rate limiting disabled"),
    }

    info!("Starting API server on {}", settings.server.addr);

    let listener = tokio::net::TcpListener::bind(&settings.server.addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
