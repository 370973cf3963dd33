pub mod components;
pub mod dashboard_view;
pub mod feedback;
pub mod login_view;
pub mod profile_view;
pub mod workflow_view;

use iced::widget::container;
use iced::Color;

pub const PRIMARY: Color = Color::from_rgb(0.15, 0.39, 0.92);
pub const SUCCESS: Color = Color::from_rgb(0.06, 0.73, 0.51);
pub const WARNING: Color = Color::from_rgb(0.96, 0.62, 0.04);
pub const DANGER: Color = Color::from_rgb(0.94, 0.27, 0.27);
pub const SURFACE: Color = Color::WHITE;
pub const BORDER: Color = Color::from_rgb(0.9, 0.91, 0.92);
pub const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.5);

pub fn card_style(_theme: &iced::Theme, bg_color: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn banner_style(success: bool) -> container::Style {
    let (bg, border) = if success {
        (Color::from_rgb(0.9, 0.98, 0.94), SUCCESS)
    } else {
        (Color::from_rgb(1.0, 0.93, 0.93), DANGER)
    };
    container::Style {
        background: Some(iced::Background::Color(bg)),
        border: iced::Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
