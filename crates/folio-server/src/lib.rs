//! Folio Server
//!
//! Portfolio site with a single dynamic feature: `/api/chat`, which answers
//! questions about the profile owner through a hosted completion service.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use adapters::GroqProvider;
use application::ChatService;
use config::{AppConfig, SiteConfig, GROQ_API_KEY};
use folio::{CompletionOptions, ProfileContext};

/// Application service with the concrete completion provider
pub type AppChatService = ChatService<GroqProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential was configured; chat then fails closed.
    pub chat_service: Option<Arc<AppChatService>>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    /// Construct the state once at startup
    pub fn from_config(config: &AppConfig) -> Self {
        let profile = Arc::new(ProfileContext::builtin());

        let chat_service = config.groq.as_ref().map(|groq| {
            let provider = Arc::new(GroqProvider::new(groq));
            let options = CompletionOptions::default().with_temperature(groq.temperature);
            tracing::info!("💬 Chat assistant initialized (Groq, {})", groq.model);
            Arc::new(ChatService::new(provider, profile, options))
        });

        if chat_service.is_none() {
            tracing::warn!("⚠️  No {} set - chat disabled", GROQ_API_KEY);
        }

        Self {
            chat_service,
            site: Arc::new(config.site.clone()),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Folio is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::site::router(&state.site))
        .merge(routes::chat::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
