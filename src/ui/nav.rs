/// Navigation bar
///
/// Brand label on the left, one tab per page on the right. The active
/// page's tab is disabled so it reads as selected.

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::{Message, Screen};

pub fn view(active: Screen) -> Element<'static, Message> {
    let tab = |label: &'static str, screen: Screen| {
        button(text(label))
            .on_press_maybe((screen != active).then_some(Message::ShowPage(screen)))
            .padding(10)
    };

    let bar = row![
        text("🎬 Movie Collections").size(22),
        Space::with_width(Length::Fill),
        tab("⭐ Star Wars", Screen::StarWars),
        tab("🚀 Star Trek", Screen::StarTrek),
    ]
    .spacing(12)
    .padding(16)
    .align_y(Alignment::Center);

    container(bar).width(Length::Fill).into()
}
