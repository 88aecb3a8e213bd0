//! In-memory feed state and the transitions user actions apply to it.
//!
//! Every transition borrows the current collection and returns a new one, so a
//! snapshot that was handed out earlier never changes underneath its holder.
//! Operations on an id that is not in the collection return an unchanged copy.

use std::collections::HashSet;

use crate::errors::SeedError;
use crate::models::{FeedItem, MediaRef};

/// Highest id accepted from injected data. Leaves the rest of the `u64` range
/// for `create_item`.
pub const MAX_SEED_ID: u64 = u32::MAX as u64;

/// Caller-supplied input for [`FeedCollection::create_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSeed {
    pub media: MediaRef,
    /// Defaults to `@User{id}`.
    pub author: Option<String>,
    /// Defaults to `Check out this cool new short #{id}!`.
    pub caption: Option<String>,
}

impl ItemSeed {
    pub fn new(media: MediaRef) -> Self {
        Self {
            media,
            author: None,
            caption: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Ordered feed items with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedCollection {
    items: Vec<FeedItem>,
}

impl FeedCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a collection from injected initial data, keeping the given order.
    ///
    /// Ids must be unique and at most [`MAX_SEED_ID`] so `create_item` always
    /// has a next id. A liked item must carry at least its own like.
    pub fn from_items(items: Vec<FeedItem>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id > MAX_SEED_ID {
                return Err(SeedError::IdOutOfRange(item.id));
            }
            if item.liked && item.like_count == 0 {
                return Err(SeedError::InconsistentLike(item.id));
            }
            if !seen.insert(item.id) {
                return Err(SeedError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_id(&self) -> Option<u64> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Id the next created item will receive.
    pub fn next_id(&self) -> u64 {
        self.max_id().map_or(1, |max| max + 1)
    }

    /// Flips `liked` and moves `like_count` with it.
    pub fn toggle_like(&self, id: u64) -> Self {
        self.update(id, |item| {
            if item.liked {
                item.like_count = item.like_count.saturating_sub(1);
            } else {
                item.like_count += 1;
            }
            item.liked = !item.liked;
        })
    }

    /// Prepends `text` to the item's comments. Validation is up to the caller.
    pub fn add_comment(&self, id: u64, text: &str) -> Self {
        self.update(id, |item| item.comments.insert(0, text.to_owned()))
    }

    pub fn increment_share(&self, id: u64) -> Self {
        self.update(id, |item| item.share_count += 1)
    }

    /// Appends a fresh item with zeroed counters and an id above every existing one.
    pub fn create_item(&self, seed: ItemSeed) -> Self {
        self.push_new(seed).0
    }

    /// Same as [`create_item`](Self::create_item), also returning the created item.
    pub fn push_new(&self, seed: ItemSeed) -> (Self, FeedItem) {
        let id = self.next_id();
        let item = FeedItem {
            id,
            media: seed.media,
            author: seed.author.unwrap_or_else(|| format!("@User{id}")),
            caption: seed
                .caption
                .unwrap_or_else(|| format!("Check out this cool new short #{id}!")),
            like_count: 0,
            comments: Vec::new(),
            share_count: 0,
            liked: false,
        };

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item.clone());
        (Self { items }, item)
    }

    fn update(&self, id: u64, apply: impl Fn(&mut FeedItem)) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut next = item.clone();
                if next.id == id {
                    apply(&mut next);
                }
                next
            })
            .collect();
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, like_count: u64, comments: &[&str], share_count: u64) -> FeedItem {
        FeedItem {
            id,
            media: MediaRef::gradient("from-purple-400 via-pink-500 to-red-500"),
            author: format!("@Author{id}"),
            caption: format!("Caption {id}"),
            like_count,
            comments: comments.iter().map(|c| c.to_string()).collect(),
            share_count,
            liked: false,
        }
    }

    fn seed() -> ItemSeed {
        ItemSeed::new(MediaRef::gradient("from-teal-300 via-cyan-500 to-sky-600"))
    }

    fn sample() -> FeedCollection {
        FeedCollection::from_items(vec![
            item(1, 1500, &["Wow!"], 250),
            item(2, 3200, &["a"], 480),
            item(5, 0, &[], 0),
        ])
        .unwrap()
    }

    #[test]
    fn unknown_id_leaves_collection_unchanged() {
        let feed = sample();
        assert_eq!(feed.toggle_like(42), feed);
        assert_eq!(feed.add_comment(42, "hello"), feed);
        assert_eq!(feed.increment_share(42), feed);
    }

    #[test]
    fn toggle_like_twice_restores_state() {
        let feed = FeedCollection::from_items(vec![item(1, 1500, &[], 0)]).unwrap();

        let liked = feed.toggle_like(1);
        let first = liked.get(1).unwrap();
        assert_eq!(first.like_count, 1501);
        assert!(first.liked);

        let unliked = liked.toggle_like(1);
        let second = unliked.get(1).unwrap();
        assert_eq!(second.like_count, 1500);
        assert!(!second.liked);
        assert_eq!(unliked, feed);
    }

    #[test]
    fn liked_seed_without_likes_is_rejected() {
        let mut odd = item(1, 0, &[], 0);
        odd.liked = true;
        let err = FeedCollection::from_items(vec![odd]).unwrap_err();
        assert!(matches!(err, SeedError::InconsistentLike(1)));
    }

    #[test]
    fn liked_seed_toggles_twice_back_to_start() {
        let mut liked = item(1, 1, &[], 0);
        liked.liked = true;
        let feed = FeedCollection::from_items(vec![liked]).unwrap();

        let once = feed.toggle_like(1);
        assert_eq!(once.get(1).unwrap().like_count, 0);
        assert!(!once.get(1).unwrap().liked);
        assert_eq!(once.toggle_like(1), feed);
    }

    #[test]
    fn oversized_seed_ids_are_rejected() {
        let err = FeedCollection::from_items(vec![item(u64::MAX, 0, &[], 0)]).unwrap_err();
        assert!(matches!(err, SeedError::IdOutOfRange(u64::MAX)));

        let err = FeedCollection::from_items(vec![item(MAX_SEED_ID + 1, 0, &[], 0)]).unwrap_err();
        assert!(matches!(err, SeedError::IdOutOfRange(id) if id == MAX_SEED_ID + 1));
    }

    #[test]
    fn create_after_highest_seed_id() {
        let feed = FeedCollection::from_items(vec![item(MAX_SEED_ID, 0, &[], 0)]).unwrap();
        let next = feed.create_item(seed()).create_item(seed());
        let ids: Vec<u64> = next.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![MAX_SEED_ID, MAX_SEED_ID + 1, MAX_SEED_ID + 2]);
    }

    #[test]
    fn add_comment_prepends() {
        let feed = sample();
        let next = feed.add_comment(2, "b");
        assert_eq!(next.get(2).unwrap().comments, vec!["b", "a"]);
        assert_eq!(next.get(1), feed.get(1));
    }

    #[test]
    fn add_comment_stores_text_verbatim() {
        let next = sample().add_comment(5, "  spaced  ");
        assert_eq!(next.get(5).unwrap().comments, vec!["  spaced  "]);
    }

    #[test]
    fn increment_share_adds_one() {
        let feed = sample();
        let next = feed.increment_share(1).increment_share(1);
        assert_eq!(next.get(1).unwrap().share_count, 252);
        assert_eq!(next.get(2).unwrap().share_count, 480);
    }

    #[test]
    fn create_item_on_empty_feed_starts_at_one() {
        let next = FeedCollection::empty().create_item(seed());

        assert_eq!(next.len(), 1);
        let created = &next.items()[0];
        assert_eq!(created.id, 1);
        assert_eq!(created.like_count, 0);
        assert!(created.comments.is_empty());
        assert_eq!(created.share_count, 0);
        assert!(!created.liked);
        assert_eq!(created.author, "@User1");
        assert_eq!(created.caption, "Check out this cool new short #1!");
    }

    #[test]
    fn create_item_uses_max_id_not_length() {
        let feed = sample();
        let next = feed.create_item(seed());

        assert_eq!(next.len(), feed.len() + 1);
        let created = next.items().last().unwrap();
        assert_eq!(created.id, 6);
        assert!(feed.items().iter().all(|existing| existing.id < created.id));
    }

    #[test]
    fn create_item_honours_seed_overrides() {
        let next = FeedCollection::empty().create_item(
            seed()
                .with_author("@Someone")
                .with_caption("hand written"),
        );
        let created = next.get(1).unwrap();
        assert_eq!(created.author, "@Someone");
        assert_eq!(created.caption, "hand written");
        assert_eq!(created.media.gradient, "from-teal-300 via-cyan-500 to-sky-600");
    }

    #[test]
    fn transitions_do_not_touch_earlier_snapshots() {
        let before = sample();
        let after = before.toggle_like(1).add_comment(1, "new").create_item(seed());

        assert_eq!(before.len(), 3);
        assert_eq!(before.get(1).unwrap().like_count, 1500);
        assert_eq!(before.get(1).unwrap().comments, vec!["Wow!"]);
        assert_eq!(after.len(), 4);
    }

    #[test]
    fn mutations_keep_order() {
        let next = sample().toggle_like(2).increment_share(5);
        let ids: Vec<u64> = next.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let err = FeedCollection::from_items(vec![item(3, 0, &[], 0), item(3, 1, &[], 1)])
            .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId(3)));
    }
}
