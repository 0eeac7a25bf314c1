//! HTTP handlers for the page and its JSON twin

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use chrono::DateTime;
use chrono_tz::Tz;
use dermacast_weather::{provider_now, ObservationSource};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::advice::{advise, PageModel};
use crate::page::render_page;

/// State shared across all handlers. Immutable; every request runs its own
/// fetch.
#[derive(Clone)]
pub struct AppState {
    /// Where observations come from
    pub source: Arc<dyn ObservationSource>,

    /// Wall clock in the provider's zone
    pub clock: fn() -> DateTime<Tz>,
}

impl AppState {
    pub fn new(source: Arc<dyn ObservationSource>) -> Self {
        Self {
            source,
            clock: provider_now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Tz>) -> Self {
        self.clock = clock;
        self
    }

    async fn run(&self) -> PageModel {
        advise(self.source.as_ref(), (self.clock)()).await
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/refresh", post(refresh))
        .route("/api/advice", get(api_advice))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Render the page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let model = state.run().await;
    Html(render_page(&model))
}

/// POST /refresh - Re-run the flow by reloading the page
pub async fn refresh() -> Redirect {
    info!("Manual refresh requested");
    Redirect::to("/")
}

/// GET /api/advice - Render model as JSON
pub async fn api_advice(State(state): State<AppState>) -> impl IntoResponse {
    let model = state.run().await;
    let status = if model.is_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Json(model))
}

/// GET /health - Liveness probe, never touches the weather service
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
