use rand::seq::SliceRandom;

use crate::errors::SeedError;
use crate::feed::{FeedCollection, ItemSeed};
use crate::models::{FeedItem, MediaRef};

/// Gradients handed out to newly created shorts.
pub const CREATE_PALETTE: [&str; 4] = [
    "from-pink-400 via-purple-500 to-indigo-600",
    "from-green-300 via-blue-500 to-purple-600",
    "from-yellow-200 via-red-500 to-pink-700",
    "from-teal-300 via-cyan-500 to-sky-600",
];

/// Seed with a randomly picked palette gradient.
pub fn random_seed() -> ItemSeed {
    let gradient = CREATE_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CREATE_PALETTE[0]);
    ItemSeed::new(MediaRef::gradient(gradient))
}

/// Seed with the palette gradient at `index`, wrapping around.
pub fn palette_seed(index: usize) -> ItemSeed {
    ItemSeed::new(MediaRef::gradient(CREATE_PALETTE[index % CREATE_PALETTE.len()]))
}

fn demo_item(
    id: u64,
    gradient: &str,
    author: &str,
    caption: &str,
    like_count: u64,
    comments: [&str; 3],
    share_count: u64,
) -> FeedItem {
    FeedItem {
        id,
        media: MediaRef::gradient(gradient),
        author: author.to_string(),
        caption: caption.to_string(),
        like_count,
        comments: comments.iter().map(|c| c.to_string()).collect(),
        share_count,
        liked: false,
    }
}

/// The three shorts a fresh demo feed starts with.
pub fn demo_items() -> Vec<FeedItem> {
    vec![
        demo_item(
            1,
            "from-purple-400 via-pink-500 to-red-500",
            "@CreativeUser",
            "Amazing sunset view! #travel #sunset",
            1500,
            ["Wow!", "Beautiful!", "Where is this?"],
            250,
        ),
        demo_item(
            2,
            "from-green-400 via-teal-500 to-blue-500",
            "@FunnyMoments",
            "My cat doing funny things 😂 #cats #funny",
            3200,
            ["LOL", "So cute!", "My cat does that too!"],
            480,
        ),
        demo_item(
            3,
            "from-yellow-400 via-orange-500 to-red-600",
            "@TechGuru",
            "Unboxing the latest gadget! #tech #unboxing",
            850,
            ["Cool!", "Need this!", "Price?"],
            120,
        ),
    ]
}

pub fn demo_feed() -> Result<FeedCollection, SeedError> {
    FeedCollection::from_items(demo_items())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_feed_has_three_unliked_shorts() {
        let feed = demo_feed().unwrap();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed.next_id(), 4);
        assert!(feed.items().iter().all(|item| !item.liked));
        assert_eq!(feed.get(2).unwrap().author, "@FunnyMoments");
        assert_eq!(feed.get(3).unwrap().like_count, 850);
    }

    #[test]
    fn palette_seed_wraps() {
        assert_eq!(palette_seed(1), palette_seed(5));
        assert_eq!(palette_seed(0).media.gradient, CREATE_PALETTE[0]);
    }

    #[test]
    fn random_seed_stays_in_palette() {
        for _ in 0..20 {
            let seed = random_seed();
            assert!(CREATE_PALETTE.contains(&seed.media.gradient.as_str()));
            assert!(seed.author.is_none());
            assert!(seed.caption.is_none());
        }
    }
}
