use std::sync::Arc;

use moodpick_api::{
    api::{create_router, AppState},
    config::Config,
    services::providers::TmdbProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing TMDB credential fails here, before any request is served
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodpick_api=info,tower_http=info".into()),
        )
        .init();

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_base.clone(),
        config.language.clone(),
    )?;

    let state = AppState::new(
        Arc::new(provider),
        config.tmdb_image_base.clone(),
        config.alternate_count,
    );
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "moodpick API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
