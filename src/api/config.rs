use once_cell::sync::Lazy;

/// One selectable entry in the singers category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub key: &'static str,
}

/// Area and artist-type filters shown above the singers list.
pub static CATEGORY_TYPES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category { name: "Chinese", key: "7" },
        Category { name: "Western", key: "96" },
        Category { name: "Japanese", key: "8" },
        Category { name: "Korean", key: "16" },
        Category { name: "Other", key: "0" },
        Category { name: "Male", key: "1" },
        Category { name: "Female", key: "2" },
        Category { name: "Band", key: "3" },
    ]
});

/// Initial-letter filters shown next to the category row.
pub static ALPHA_TYPES: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());

/// Outer stream endpoint the default resolver formats a track id into.
pub const DEFAULT_STREAM_TEMPLATE: &str = "https://music.163.com/song/media/outer/url?id={id}.mp3";

/// Singers are fetched in fixed-size pages.
pub const SINGERS_PAGE_SIZE: usize = 50;
