use serde::{Deserialize, Serialize};

/// Opaque reference to the visual payload of a short.
///
/// Only the gradient name is stored; turning it into pixels is the renderer's job.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub gradient: String,
}

impl MediaRef {
    pub fn gradient(gradient: impl Into<String>) -> Self {
        Self {
            gradient: gradient.into(),
        }
    }
}

/// One entry in the feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: u64,
    pub media: MediaRef,
    pub author: String,
    pub caption: String,
    pub like_count: u64,
    /// Newest first.
    pub comments: Vec<String>,
    pub share_count: u64,
    pub liked: bool,
}
