//! Dashboard: headline figures and recent activity.

use crate::app::{Message, Tab};
use crate::ui::{components, DANGER, PRIMARY, SUCCESS, WARNING};
use chrono::Local;
use iced::widget::{button, column, row, scrollable, text, Column};
use iced::{Element, Fill};
use kegtrack::domain::DriverProfile;
use kegtrack::services::{ActivityLog, DashboardSummary};
use kegtrack::utils;

/// Quick action: jump straight to the assignment scanner flow.
pub fn quick_scan() -> Message {
    Message::TabSelected(Tab::Assign)
}

pub fn view<'a>(
    profile: &'a DriverProfile,
    summary: DashboardSummary,
    activity: &'a ActivityLog,
) -> Element<'a, Message> {
    let now = Local::now();
    let header: Element<'a, Message> = components::screen_header(
        "Dashboard",
        format!(
            "{}, {}! Today, {}",
            utils::greeting(now),
            profile.first_name(),
            utils::format_date(now)
        ),
    );

    let stats: Element<'a, Message> = column![
        row![
            components::stat_card("Total Kegs", summary.total_kegs, PRIMARY),
            components::stat_card("Active Outlets", summary.active_outlets, SUCCESS),
        ]
        .spacing(10),
        row![
            components::stat_card("Delivered Today", summary.delivered_today, WARNING),
            components::stat_card("Pending Pickup", summary.pending_pickup, DANGER),
        ]
        .spacing(10),
    ]
    .spacing(10)
    .into();

    let quick_actions = components::card_container(
        button(text("Scan QR Code").width(Fill))
            .on_press(quick_scan())
            .width(Fill)
            .padding(12),
    );

    let recent: Element<'a, Message> = if activity.is_empty() {
        components::muted_text("No activity yet this shift").into()
    } else {
        Column::with_children(activity.entries().map(|entry| {
            components::list_row(
                entry.kind.title().to_string(),
                entry.subject.clone(),
                Some(components::muted_text(utils::time_ago(entry.at, now)).into()),
            )
        }))
        .spacing(2)
        .into()
    };

    scrollable(
        column![
            header,
            stats,
            components::section_title("Quick Actions"),
            quick_actions,
            components::section_title("Recent Activity"),
            components::card_container(recent),
        ]
        .spacing(14)
        .padding(16),
    )
    .into()
}
