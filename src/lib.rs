pub mod config;
pub mod domain;
pub mod errors;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod startup;

use crate::domain::FeedRepository;
use std::sync::Arc;

/// AppState holds shared resources for the web server.
#[derive(Clone)]
pub struct AppState {
    pub feed_repo: Arc<dyn FeedRepository>,
}
