/// Movie card widget
///
/// One card per catalog record: the poster surface on top, then title,
/// release year, description, and (on pages that enable it) the like
/// control with its count badge.

use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::card::MovieCard;
use crate::ui::poster;
use crate::Message;

/// Fixed card width; the page grid wraps cards to the window
pub const CARD_WIDTH: f32 = 320.0;

/// Like button label, spelling out how much one click adds
pub fn like_button_label(title: &str, per_click: u64) -> String {
    format!("Like {} (+{})", title, per_click)
}

pub fn view(index: usize, card: &MovieCard) -> Element<'static, Message> {
    let mut details: Column<Message> = column![
        text(card.title.clone()).size(20),
        text(format!("Released: {}", card.year)).size(14),
        text(card.description.clone()).size(14),
    ]
    .spacing(8);

    if let Some(likes) = &card.likes {
        let like_button = button(text(like_button_label(&card.title, likes.per_click())).size(14))
            .on_press(Message::LikePressed(index))
            .padding(8);

        let mut like_row = row![like_button].spacing(10).align_y(Alignment::Center);
        if likes.show_badge() {
            like_row = like_row.push(
                container(text(likes.count().to_string()).size(14))
                    .padding(6)
                    .style(container::rounded_box),
            );
        }

        details = details.push(like_row);
    }

    let content = column![
        poster::view(&card.title, &card.visual()),
        details.padding(16),
    ];

    container(content)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}
