use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use iced_aw::Wrap;

// Declare the application modules
mod catalog;
mod poster;
mod state;
mod ui;

use poster::loader::{self, LoadError};
use state::card::MovieCard;
use state::data::Movie;
use state::resolver::{AttemptTag, ErrorOutcome, PosterResolver};

/// Which of the two gallery pages is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    StarWars,
    StarTrek,
}

impl Screen {
    fn heading(self) -> &'static str {
        match self {
            Screen::StarWars => "Star Wars Movies",
            Screen::StarTrek => "Star Trek Movies",
        }
    }

    fn movies(self) -> &'static [Movie] {
        match self {
            Screen::StarWars => catalog::STAR_WARS_MOVIES,
            Screen::StarTrek => catalog::STAR_TREK_MOVIES,
        }
    }

    /// Only the Star Trek page variant carries the like control
    fn shows_like_control(self) -> bool {
        matches!(self, Screen::StarTrek)
    }
}

/// Main application state
pub struct Gallery {
    /// Page currently on screen
    screen: Screen,
    /// One card per movie on the visible page
    cards: Vec<MovieCard>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a navigation tab
    ShowPage(Screen),
    /// A poster load attempt finished; `tag` identifies which attempt
    PosterLoaded {
        screen: Screen,
        card: usize,
        tag: AttemptTag,
        result: Result<Handle, LoadError>,
    },
    /// User clicked the like button on a card
    LikePressed(usize),
}

/// External like callback: receives the title and the new running total
fn report_like(title: &str, total: u64) {
    println!("💖 {} now has {} likes", title, total);
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let screen = Screen::StarWars;
        let (cards, load) = build_page(screen);

        println!("🎬 Movie gallery initialized with {} cards", cards.len());

        let status = format!("Ready. {} movies on this page.", cards.len());

        (
            Gallery {
                screen,
                cards,
                status,
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPage(screen) => {
                if screen == self.screen {
                    return Task::none();
                }

                // Rebuilding the cards discards the old page's resolvers;
                // results from its in-flight loads carry the old screen
                // and are dropped below.
                println!("📄 Switching to {}", screen.heading());
                self.screen = screen;
                let (cards, load) = build_page(screen);
                self.cards = cards;
                self.status = format!("Ready. {} movies on this page.", self.cards.len());
                load
            }
            Message::PosterLoaded {
                screen,
                card,
                tag,
                result,
            } => {
                if screen != self.screen {
                    // Load finished for a page that is no longer shown
                    return Task::none();
                }
                let Some(card_state) = self.cards.get_mut(card) else {
                    return Task::none();
                };
                if !card_state.resolver.accepts(tag) {
                    // The resolver moved on while this attempt was in
                    // flight; its outcome no longer belongs to anyone.
                    println!("⏭️  Ignoring superseded load for {}", card_state.title);
                    return Task::none();
                }

                match result {
                    Ok(handle) => {
                        card_state.poster_loaded(handle);
                        println!("✅ Poster resolved for {}", card_state.title);
                        self.status = format!("Poster resolved for {}.", card_state.title);
                        Task::none()
                    }
                    Err(error) => {
                        eprintln!("⚠️  Poster load failed for {}: {}", card_state.title, error);

                        match card_state.resolver.on_error() {
                            ErrorOutcome::Retry => {
                                println!("🔁 Retrying current source for {}", card_state.title);
                                load_task(screen, card, &card_state.resolver)
                            }
                            ErrorOutcome::Advance => {
                                println!("➡️  Trying next source for {}", card_state.title);
                                load_task(screen, card, &card_state.resolver)
                            }
                            ErrorOutcome::Exhausted => {
                                self.status =
                                    format!("Poster unavailable for {}.", card_state.title);
                                Task::none()
                            }
                        }
                    }
                }
            }
            Message::LikePressed(index) => {
                let Some(card) = self.cards.get_mut(index) else {
                    return Task::none();
                };
                if let Some(likes) = card.likes.as_mut() {
                    let total = likes.click();
                    report_like(&card.title, total);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let cards: Vec<Element<Message>> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| ui::card::view(index, card))
            .collect();

        let grid = Wrap::with_elements(cards).spacing(20.0).line_spacing(20.0);

        let page = column![
            text(self.screen.heading()).size(36),
            grid,
            text(&self.status).size(14),
        ]
        .spacing(24)
        .padding(24)
        .align_x(Alignment::Center);

        column![
            ui::nav::view(self.screen),
            scrollable(
                container(page)
                    .width(Length::Fill)
                    .center_x(Length::Fill)
            ),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Build the cards for a page and kick off their first load attempts
fn build_page(screen: Screen) -> (Vec<MovieCard>, Task<Message>) {
    let cards: Vec<MovieCard> = screen
        .movies()
        .iter()
        .map(|movie| MovieCard::from_movie(movie, screen.shows_like_control()))
        .collect();

    let loads = Task::batch(
        cards
            .iter()
            .enumerate()
            .map(|(index, card)| load_task(screen, index, &card.resolver)),
    );

    (cards, loads)
}

/// Spawn a load attempt for the resolver's current candidate.
/// The attempt tag travels with the result so superseded outcomes can be
/// recognized and dropped.
fn load_task(screen: Screen, card: usize, resolver: &PosterResolver) -> Task<Message> {
    let (Some(source), Some(tag)) = (resolver.current_source(), resolver.attempt()) else {
        return Task::none();
    };

    let request = loader::cache_busted(source, tag.retries);
    Task::perform(loader::load_poster(request), move |result| {
        Message::PosterLoaded {
            screen,
            card,
            tag,
            result,
        }
    })
}

fn main() -> iced::Result {
    iced::application("Movie Collections", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poster::placeholder::placeholder_handle;

    fn gallery(screen: Screen) -> Gallery {
        let (cards, _load) = build_page(screen);
        Gallery {
            screen,
            cards,
            status: String::new(),
        }
    }

    fn current_tag(gallery: &Gallery, card: usize) -> AttemptTag {
        gallery.cards[card].resolver.attempt().unwrap()
    }

    #[test]
    fn test_successful_outcome_stores_poster() {
        let mut app = gallery(Screen::StarWars);
        let tag = current_tag(&app, 0);

        let _ = app.update(Message::PosterLoaded {
            screen: Screen::StarWars,
            card: 0,
            tag,
            result: Ok(placeholder_handle()),
        });

        assert!(matches!(
            app.cards[0].visual(),
            crate::state::card::PosterVisual::Ready(_),
        ));
    }

    #[test]
    fn test_success_after_retries_keeps_current_candidate() {
        let mut app = gallery(Screen::StarTrek);
        let resolution_before = {
            let tag = current_tag(&app, 0);
            let _ = app.update(Message::PosterLoaded {
                screen: Screen::StarTrek,
                card: 0,
                tag,
                result: Err(LoadError::NotFound("missing.jpg".to_string())),
            });
            app.cards[0].resolver.resolution()
        };

        // The retry succeeds: the candidate index stays put and the card
        // settles into the image state.
        let tag = current_tag(&app, 0);
        let _ = app.update(Message::PosterLoaded {
            screen: Screen::StarTrek,
            card: 0,
            tag,
            result: Ok(placeholder_handle()),
        });

        assert_eq!(app.cards[0].resolver.resolution(), resolution_before);
        assert!(matches!(
            app.cards[0].visual(),
            crate::state::card::PosterVisual::Ready(_),
        ));
    }

    #[test]
    fn test_outcome_for_departed_page_is_dropped() {
        let mut app = gallery(Screen::StarTrek);
        let tag = current_tag(&app, 0);

        let _ = app.update(Message::PosterLoaded {
            screen: Screen::StarWars,
            card: 0,
            tag,
            result: Ok(placeholder_handle()),
        });

        assert!(matches!(
            app.cards[0].visual(),
            crate::state::card::PosterVisual::Loading,
        ));
    }

    #[test]
    fn test_stale_attempt_outcome_is_dropped() {
        let mut app = gallery(Screen::StarWars);
        let stale = current_tag(&app, 0);

        // The resolver moves past the tagged attempt before the (slow)
        // result for it arrives.
        app.cards[0].resolver.on_error();

        let _ = app.update(Message::PosterLoaded {
            screen: Screen::StarWars,
            card: 0,
            tag: stale,
            result: Ok(placeholder_handle()),
        });

        assert!(matches!(
            app.cards[0].visual(),
            crate::state::card::PosterVisual::Loading,
        ));
    }

    #[test]
    fn test_error_outcomes_walk_the_candidate_list() {
        let mut app = gallery(Screen::StarTrek);
        let candidates = app.cards[0].resolver.candidates().len();
        let max_retries = app.cards[0].resolver.max_retries() as usize;

        // Feed errors through update until every candidate is exhausted.
        let total_errors = (max_retries + 1) * candidates;
        for _ in 0..total_errors {
            let tag = current_tag(&app, 0);
            let _ = app.update(Message::PosterLoaded {
                screen: Screen::StarTrek,
                card: 0,
                tag,
                result: Err(LoadError::NotFound("missing.jpg".to_string())),
            });
            if app.cards[0].resolver.is_failed() {
                break;
            }
        }

        assert!(app.cards[0].resolver.is_failed());
        assert!(matches!(
            app.cards[0].visual(),
            crate::state::card::PosterVisual::Fallback,
        ));
    }

    #[test]
    fn test_like_clicks_accumulate_on_trek_page() {
        let mut app = gallery(Screen::StarTrek);

        let _ = app.update(Message::LikePressed(0));
        let _ = app.update(Message::LikePressed(0));

        let likes = app.cards[0].likes.unwrap();
        assert_eq!(likes.count(), 2);
        assert!(likes.show_badge());
    }

    #[test]
    fn test_star_wars_page_has_no_like_control() {
        let mut app = gallery(Screen::StarWars);
        let _ = app.update(Message::LikePressed(0));
        assert!(app.cards[0].likes.is_none());
    }
}
