/// Widget styles shared by the carousel views

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Translucent white with the given alpha
fn white(alpha: f32) -> Color {
    Color { a: alpha, ..Color::WHITE }
}

/// Round translucent control (arrows, zoom and close buttons)
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.4,
        _ => 0.2,
    };

    button::Style {
        background: Some(Background::Color(white(alpha))),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Viewer control; dimmed when it has reached its limit
pub fn zoom_control(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let style = control(theme, status);
        if active {
            style
        } else {
            button::Style {
                text_color: white(0.35),
                ..style
            }
        }
    }
}

/// Pagination dot; the active one is solid white
pub fn marker(active: bool, size: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let alpha = match (active, status) {
            (true, _) => 1.0,
            (false, button::Status::Hovered) => 0.7,
            (false, _) => 0.5,
        };

        button::Style {
            background: Some(Background::Color(white(alpha))),
            border: Border {
                radius: (size / 2.0).into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Frosted card around header, strip and footer
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(white(0.1))),
        border: Border {
            color: white(0.2),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

/// Header and footer bands inside the card
pub fn band(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(white(0.8)),
        ..container::Style::default()
    }
}

/// Dark fullscreen backdrop; `alpha` follows the fade-in
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, alpha))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}
