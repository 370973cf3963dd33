//! Login gate.

use crate::app::Message;
use crate::ui::components;
use iced::widget::{button, column, container, text};
use iced::{Element, Fill};

pub fn view() -> Element<'static, Message> {
    let form = components::card_container(
        column![
            text("Driver Login").size(18),
            components::muted_text("Sign in to start your shift"),
            button(text("Sign In").width(Fill))
                .on_press(Message::SignIn)
                .width(Fill)
                .padding(12),
        ]
        .spacing(14),
    );

    container(
        column![text("KegTrack Pro").size(32), form]
            .spacing(24)
            .max_width(360),
    )
    .center(Fill)
    .into()
}
