/// Poster surface widget
///
/// Renders exactly one of the card's two visual states: the image being
/// attempted (or a neutral surface while its bytes are in flight), or the
/// terminal fallback panel with the title and the unavailable caption.

use iced::widget::{column, container, text, tooltip, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::card::PosterVisual;
use crate::Message;

/// Caption shown on the fallback panel, verbatim
pub const FALLBACK_CAPTION: &str = "Poster unavailable";

/// Rendered poster height inside a card
pub const POSTER_HEIGHT: f32 = 400.0;

/// Accessible label for the poster image
pub fn alt_text(title: &str) -> String {
    format!("{} poster", title)
}

pub fn view(title: &str, visual: &PosterVisual) -> Element<'static, Message> {
    match visual {
        PosterVisual::Ready(handle) => {
            let poster = iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(POSTER_HEIGHT))
                .content_fit(ContentFit::Cover);

            tooltip(
                poster,
                text(alt_text(title)).size(12),
                tooltip::Position::FollowCursor,
            )
            .into()
        }
        PosterVisual::Loading => container(Space::new(Length::Fill, Length::Fixed(POSTER_HEIGHT)))
            .style(container::rounded_box)
            .into(),
        PosterVisual::Fallback => {
            let panel = column![
                text("🎬").size(40),
                text(title.to_string()).size(18),
                text(FALLBACK_CAPTION).size(14),
            ]
            .spacing(8)
            .align_x(Alignment::Center);

            container(panel)
                .width(Length::Fill)
                .height(Length::Fixed(POSTER_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(container::rounded_box)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_text_format() {
        assert_eq!(alt_text("Test Movie"), "Test Movie poster");
    }

    #[test]
    fn test_fallback_caption_is_verbatim() {
        assert_eq!(FALLBACK_CAPTION, "Poster unavailable");
    }
}
