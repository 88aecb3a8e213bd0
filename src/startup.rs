use crate::config::Config;
use crate::errors::AppError;
use crate::feed::FeedCollection;
use crate::repositories::InMemoryFeedRepository;
use crate::routes::create_router;
use crate::seed::demo_feed;
use crate::AppState;
use std::sync::Arc;
use tracing;

/// Builds the initial feed the process starts with.
pub fn initial_feed(config: &Config) -> Result<FeedCollection, AppError> {
    if config.seed_demo_feed {
        let feed = demo_feed()?;
        tracing::info!("Startup: Seeded feed with {} demo shorts.", feed.len());
        Ok(feed)
    } else {
        tracing::info!("Startup: Starting with an empty feed.");
        Ok(FeedCollection::empty())
    }
}

/// Wires the application state from configuration.
pub fn build_state(config: &Config) -> Result<Arc<AppState>, AppError> {
    let feed_repo = Arc::new(InMemoryFeedRepository::new(initial_feed(config)?));
    Ok(Arc::new(AppState { feed_repo }))
}

/// Binds the listener and serves until the process is stopped.
pub async fn run(config: Config) -> Result<(), AppError> {
    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Failed to bind {}: {}", config.bind_address, e)))?;
    tracing::info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Server error: {}", e)))?;
    Ok(())
}
