/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the static catalog tables and the UI layer.

use crate::state::resolver::DEFAULT_MAX_RETRIES;

/// A single movie record in one of the page catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movie {
    /// Full movie title (e.g., "Star Wars: Episode IV - A New Hope")
    pub title: &'static str,
    /// Release year
    pub year: u16,
    /// Brief plot summary shown on the card
    pub description: &'static str,
    /// Primary poster source (None if the record predates this field)
    pub poster: Option<&'static str>,
    /// Deprecated alias for `poster`; older records not yet migrated
    pub image_url: Option<&'static str>,
    /// Explicit ordered override list of poster sources, tried first
    pub poster_sources: &'static [&'static str],
}

impl Movie {
    /// Build the poster configuration for this record.
    /// Page-level settings (like control) are layered on by the caller.
    pub fn poster_config(&self) -> PosterConfig {
        PosterConfig {
            title: self.title.to_string(),
            poster: self.poster.map(str::to_string),
            image_url: self.image_url.map(str::to_string),
            poster_sources: self.poster_sources.iter().map(|s| s.to_string()).collect(),
            ..PosterConfig::default()
        }
    }
}

/// Construction inputs for one poster card
///
/// The three source channels (`poster_sources`, `poster`, `image_url`) are
/// merged in that priority order when the card derives its candidate list.
/// `image_url` is kept for compatibility with older catalog records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterConfig {
    /// Movie title, used for accessible text and the fallback panel
    pub title: String,
    /// Primary single poster source
    pub poster: Option<String>,
    /// Legacy alias for `poster`, lowest priority
    pub image_url: Option<String>,
    /// Explicit ordered override list, highest priority
    pub poster_sources: Vec<String>,
    /// Same-source reload attempts before advancing to the next candidate
    pub max_retries: u32,
    /// Whether the card renders a like button
    pub show_like_control: bool,
    /// Starting like count
    pub initial_likes: u64,
    /// Likes added per button click
    pub likes_per_click: u64,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            poster: None,
            image_url: None,
            poster_sources: Vec::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            show_like_control: false,
            initial_likes: 0,
            likes_per_click: 1,
        }
    }
}
