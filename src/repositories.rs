use crate::{
    domain::FeedRepository,
    feed::{FeedCollection, ItemSeed},
    models::FeedItem,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{self, info};

/// Holds the live feed snapshot in process memory.
///
/// Each mutation computes the next collection from the current one and swaps it
/// in whole. The write lock is held across the swap, so operations on the same
/// short apply in the order they arrive.
#[derive(Debug)]
pub struct InMemoryFeedRepository {
    current: RwLock<Arc<FeedCollection>>,
}

impl InMemoryFeedRepository {
    pub fn new(initial: FeedCollection) -> Self {
        info!(shorts = initial.len(), "Initializing InMemoryFeedRepository");
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Applies `transition` to the current snapshot and returns the item `id` afterwards.
    async fn apply(
        &self,
        id: u64,
        transition: impl FnOnce(&FeedCollection) -> FeedCollection,
    ) -> Option<FeedItem> {
        let mut current = self.current.write().await;
        if !current.contains(id) {
            return None;
        }
        let next = transition(&current);
        let item = next.get(id).cloned();
        *current = Arc::new(next);
        item
    }
}

impl Default for InMemoryFeedRepository {
    fn default() -> Self {
        Self::new(FeedCollection::empty())
    }
}

#[async_trait]
impl FeedRepository for InMemoryFeedRepository {
    async fn snapshot(&self) -> Arc<FeedCollection> {
        Arc::clone(&*self.current.read().await)
    }

    async fn get_by_id(&self, id: u64) -> Option<FeedItem> {
        self.current.read().await.get(id).cloned()
    }

    async fn toggle_like(&self, id: u64) -> Option<FeedItem> {
        let item = self.apply(id, |feed| feed.toggle_like(id)).await;
        match &item {
            Some(short) => tracing::debug!(short_id = id, liked = short.liked, likes = short.like_count, "Toggled like"),
            None => tracing::debug!(short_id = id, "Toggle like ignored, no such short"),
        }
        item
    }

    async fn add_comment(&self, id: u64, text: &str) -> Option<FeedItem> {
        let item = self.apply(id, |feed| feed.add_comment(id, text)).await;
        match &item {
            Some(short) => info!(short_id = id, comments = short.comments.len(), comment = %text, "Commented on short"),
            None => tracing::debug!(short_id = id, "Comment ignored, no such short"),
        }
        item
    }

    async fn increment_share(&self, id: u64) -> Option<FeedItem> {
        let item = self.apply(id, |feed| feed.increment_share(id)).await;
        match &item {
            Some(short) => info!(short_id = id, shares = short.share_count, caption = %short.caption, "Shared short"),
            None => tracing::debug!(short_id = id, "Share ignored, no such short"),
        }
        item
    }

    async fn create(&self, seed: ItemSeed) -> FeedItem {
        let mut current = self.current.write().await;
        let (next, item) = current.push_new(seed);
        *current = Arc::new(next);
        info!(short_id = item.id, author = %item.author, gradient = %item.media.gradient, "Created new short");
        item
    }
}
