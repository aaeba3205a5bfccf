/// Per-card state
///
/// One `MovieCard` exists for every movie on the visible page. It bundles
/// the poster resolver, the decoded poster once a candidate succeeds, and
/// the optional like counter. Cards are rebuilt from the catalog whenever
/// the page changes, so none of this state outlives its page.

use iced::widget::image::Handle;

use crate::state::data::{Movie, PosterConfig};
use crate::state::likes::LikeState;
use crate::state::resolver::PosterResolver;

/// Which of the two mutually exclusive poster surfaces the card shows
#[derive(Debug, Clone)]
pub enum PosterVisual {
    /// Image state, bytes still in flight: neutral loading surface
    Loading,
    /// Image state, current candidate decoded
    Ready(Handle),
    /// Terminal fallback panel (title + unavailable caption)
    Fallback,
}

/// State for one rendered movie card
#[derive(Debug, Clone)]
pub struct MovieCard {
    pub title: String,
    pub year: u16,
    pub description: String,
    pub resolver: PosterResolver,
    pub likes: Option<LikeState>,
    poster: Option<Handle>,
}

impl MovieCard {
    /// Build a card from an explicit poster configuration
    pub fn new(year: u16, description: &str, config: PosterConfig) -> Self {
        let resolver = PosterResolver::new(
            &config.poster_sources,
            config.poster.as_deref(),
            config.image_url.as_deref(),
            config.max_retries,
        );

        let likes = config
            .show_like_control
            .then(|| LikeState::new(config.initial_likes, config.likes_per_click));

        Self {
            title: config.title,
            year,
            description: description.to_string(),
            resolver,
            likes,
            poster: None,
        }
    }

    /// Build a card from a catalog record
    pub fn from_movie(movie: &Movie, show_like_control: bool) -> Self {
        let mut config = movie.poster_config();
        config.show_like_control = show_like_control;
        Self::new(movie.year, movie.description, config)
    }

    /// Record a successful decode of the current candidate
    pub fn poster_loaded(&mut self, handle: Handle) {
        self.poster = Some(handle);
    }

    /// Re-derive the candidate list from changed sources.
    /// A changed list discards the decoded poster along with the
    /// resolution progress; returns true in that case.
    pub fn reset_sources(
        &mut self,
        sources: &[String],
        poster: Option<&str>,
        image_url: Option<&str>,
    ) -> bool {
        let changed = self.resolver.set_sources(sources, poster, image_url);
        if changed {
            self.poster = None;
        }
        changed
    }

    /// The poster surface to render right now.
    /// Exactly one of the two visual states is ever active: the fallback
    /// panel appears when and only when the resolver is terminally failed.
    pub fn visual(&self) -> PosterVisual {
        if self.resolver.is_failed() {
            return PosterVisual::Fallback;
        }
        match &self.poster {
            Some(handle) => PosterVisual::Ready(handle.clone()),
            None => PosterVisual::Loading,
        }
    }
}
