use crate::feed::{FeedCollection, ItemSeed};
use crate::models::FeedItem;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait defining the operations the presentation layer may run against the feed.
///
/// Mutations return the affected item as it looks afterwards, or `None` when
/// no item has that id (in which case nothing changed).
#[async_trait]
pub trait FeedRepository: Send + Sync + 'static { // Send+Sync+'static required for Arc<dyn>
    /// Current snapshot. Later mutations never alter a returned snapshot.
    async fn snapshot(&self) -> Arc<FeedCollection>;

    async fn get_by_id(&self, id: u64) -> Option<FeedItem>;

    async fn toggle_like(&self, id: u64) -> Option<FeedItem>;

    async fn add_comment(&self, id: u64, text: &str) -> Option<FeedItem>;

    async fn increment_share(&self, id: u64) -> Option<FeedItem>;

    /// Appends a new item built from `seed`. Never fails.
    async fn create(&self, seed: ItemSeed) -> FeedItem;
}
