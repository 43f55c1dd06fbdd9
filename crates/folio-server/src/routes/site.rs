//! Site Routes - Landing page, resume download and static assets

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::AppState;

/// Download the resume as an attachment
pub async fn download_resume(State(state): State<AppState>) -> Result<Response, ApiError> {
    let site = &state.site;

    let bytes = tokio::fs::read(&site.resume_path).await.map_err(|e| {
        tracing::warn!(
            "Resume unavailable at {}: {}",
            site.resume_path.display(),
            e
        );
        ApiError::NotFound("Resume not available".to_string())
    })?;

    let disposition = format!("attachment; filename=\"{}\"", site.resume_download_name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

pub fn router(site: &SiteConfig) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(site.templates_dir.join("index.html")))
        .route("/resume", get(download_resume))
        .nest_service("/static", ServeDir::new(&site.static_dir))
}
