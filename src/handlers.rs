use crate::{
    errors::AppError,
    feed::ItemSeed,
    models::FeedItem,
    seed::{palette_seed, random_seed},
    AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing;

#[derive(Deserialize, Debug, Default)]
pub struct CreateShortRequest {
    pub author: Option<String>,
    pub caption: Option<String>,
    /// Palette index; a random gradient is picked when absent.
    pub palette: Option<usize>,
}

#[derive(Deserialize, Debug)]
pub struct CommentRequest {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct ShareResponse {
    pub short: FeedItem,
    pub message: String,
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_shorts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let feed = state.feed_repo.snapshot().await;
    tracing::debug!("Listing {} shorts via handler", feed.len());
    Ok(Json(feed.items().to_vec()))
}

pub async fn get_short(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(short_id = id, "Fetching short via handler");
    match state.feed_repo.get_by_id(id).await {
        Some(short) => Ok(Json(short)),
        None => Err(AppError::ShortNotFound(id)),
    }
}

pub async fn create_short(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    // Body is optional; an empty one creates a short with generated defaults.
    let request: CreateShortRequest = if body.is_empty() {
        CreateShortRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::InvalidInput(format!("Invalid create request: {}", e)))?
    };

    let mut seed: ItemSeed = match request.palette {
        Some(index) => palette_seed(index),
        None => random_seed(),
    };
    if let Some(author) = non_blank(request.author) {
        seed = seed.with_author(author);
    }
    if let Some(caption) = non_blank(request.caption) {
        seed = seed.with_caption(caption);
    }

    let short = state.feed_repo.create(seed).await;
    Ok((StatusCode::CREATED, Json(short)))
}

pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let short = state
        .feed_repo
        .toggle_like(id)
        .await
        .ok_or(AppError::ShortNotFound(id))?;
    Ok(Json(short))
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(request): Json<CommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::InvalidInput("comment text cannot be empty".to_string()));
    }

    let short = state
        .feed_repo
        .add_comment(id, &request.text)
        .await
        .ok_or(AppError::ShortNotFound(id))?;
    Ok((StatusCode::CREATED, Json(short)))
}

pub async fn share_short(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let short = state
        .feed_repo
        .increment_share(id)
        .await
        .ok_or(AppError::ShortNotFound(id))?;
    let message = share_message(&short);
    Ok(Json(ShareResponse { short, message }))
}

/// Confirmation text shown after a share.
pub fn share_message(short: &FeedItem) -> String {
    format!("Shared \"{}\"! (Total shares: {})", short.caption, short.share_count)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
