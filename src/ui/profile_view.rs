//! Driver profile, help and logout.

use crate::app::Message;
use crate::ui::components;
use iced::widget::{button, column, row, scrollable, text};
use iced::{Element, Fill};
use kegtrack::domain::{DriverProfile, SupportContact};

pub fn view<'a>(
    profile: &'a DriverProfile,
    support: &'a SupportContact,
    show_help: bool,
    confirm_logout: bool,
) -> Element<'a, Message> {
    let header = column![
        text(&profile.name).size(26),
        components::muted_text(&profile.role),
        components::muted_text(format!("ID: {}", profile.employee_id)),
    ]
    .spacing(4);

    let personal = components::card_container(
        column![
            components::info_row("Phone Number", text(&profile.phone).size(14)),
            components::info_row("Email", text(&profile.email).size(14)),
            components::info_row("Vehicle", text(&profile.vehicle).size(14)),
        ]
        .spacing(10),
    );

    let stats = components::card_container(
        row![
            stat("Kegs Delivered", profile.stats.kegs_delivered),
            stat("Kegs Collected", profile.stats.kegs_collected),
            stat("Outlets Served", profile.stats.outlets_served),
        ]
        .spacing(10),
    );

    let mut help = column![button("Help & Support")
        .on_press(Message::ToggleHelp)
        .style(button::secondary)
        .width(Fill)
        .padding(10)]
    .spacing(8);
    if show_help {
        help = help.push(components::card_container(
            column![
                text("Contact your administrator for technical support:").size(14),
                components::info_row("Phone", text(&support.phone).size(14)),
                components::info_row("Email", text(&support.email).size(14)),
            ]
            .spacing(8),
        ));
    }

    let logout: Element<'a, Message> = if confirm_logout {
        components::card_container(
            column![
                text("Are you sure you want to logout?").size(15),
                row![
                    button("Cancel")
                        .on_press(Message::CancelLogout)
                        .style(button::secondary)
                        .padding([8, 16]),
                    button("Logout")
                        .on_press(Message::ConfirmLogout)
                        .style(button::danger)
                        .padding([8, 16]),
                ]
                .spacing(10),
            ]
            .spacing(10),
        )
        .into()
    } else {
        button(text("Logout").width(Fill))
            .on_press(Message::RequestLogout)
            .style(button::danger)
            .width(Fill)
            .padding(12)
            .into()
    };

    scrollable(
        column![
            header,
            components::section_title("Personal Information"),
            personal,
            components::section_title("Statistics"),
            stats,
            help,
            logout,
            components::muted_text(concat!("KegTrack Pro v", env!("CARGO_PKG_VERSION"))),
        ]
        .spacing(14)
        .padding(16),
    )
    .into()
}

fn stat<'a>(label: &'a str, value: u32) -> Element<'a, Message> {
    column![text(value.to_string()).size(22), components::muted_text(label)]
        .spacing(2)
        .width(Fill)
        .into()
}
