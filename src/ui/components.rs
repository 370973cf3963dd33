//! Reusable UI components.

use super::{card_style, BORDER, MUTED, SURFACE};
use iced::widget::{column, container, row, text, Row, Space, Text};
use iced::{Color, Element, Fill};

pub fn muted_text<'a>(value: impl text::IntoFragment<'a>) -> Text<'a> {
    text(value).size(13).color(MUTED)
}

pub fn info_row<'a, M: 'a>(label: &'a str, value: impl Into<Element<'a, M>>) -> Row<'a, M> {
    row![
        text(label).size(14).color(MUTED).width(140),
        value.into()
    ]
    .spacing(10)
}

pub fn screen_header<'a, M: 'a>(title: &'a str, subtitle: String) -> Element<'a, M> {
    column![text(title).size(26), muted_text(subtitle)]
        .spacing(4)
        .padding([10, 0])
        .into()
}

pub fn section_title(title: &str) -> Text<'_> {
    text(title).size(18)
}

pub fn card_container<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
) -> container::Container<'a, M> {
    container(content)
        .padding(16)
        .width(Fill)
        .style(|theme| card_style(theme, SURFACE, BORDER))
}

/// Dashboard tile with a coloured accent strip.
pub fn stat_card<'a, M: 'a>(title: &'a str, value: impl ToString, accent: Color) -> Element<'a, M> {
    let strip = container(Space::new().width(4).height(48)).style(move |_| container::Style {
        background: Some(iced::Background::Color(accent)),
        ..Default::default()
    });

    card_container(
        row![
            strip,
            column![text(value.to_string()).size(24), muted_text(title)].spacing(2)
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .into()
}

/// One line in a list: title, subtitle, optional trailing text.
pub fn list_row<'a, M: 'a>(
    title: String,
    subtitle: String,
    trailing: Option<Element<'a, M>>,
) -> Element<'a, M> {
    let mut line = row![column![text(title).size(15), muted_text(subtitle)]
        .spacing(2)
        .width(Fill)]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    if let Some(trailing) = trailing {
        line = line.push(trailing);
    }

    container(line).padding([8, 4]).width(Fill).into()
}
