use folio_server::{app, config::AppConfig, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗂️  Folio initializing...");

    // Secrets take precedence over the process environment
    dotenvy::dotenv().ok();
    let config =
        AppConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))?;

    let state = AppState::from_config(&config);
    let router = app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Folio ready");

    Ok(router.into())
}
