use shorts_feed::config::{self, Config};
use shorts_feed::startup;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so load it before the filter is built
    dotenvy::dotenv().ok();

    // Initialize tracing (logging)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config::log_directives(|key| {
            std::env::var(key).ok()
        })))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(bind_address = %config.bind_address, seed_demo_feed = config.seed_demo_feed, "Configuration loaded");

    startup::run(config).await?;
    Ok(())
}
