use std::ops::Range;

use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Vector};

pub(crate) const PANEL_BACKGROUND: Color = Color::WHITE;
pub(crate) const PANEL_TEXT: Color = Color::from_rgb(0.0, 0.0, 0.0);
pub(crate) const SEPARATOR: Color = Color::from_rgb(0.84, 0.84, 0.84);
pub(crate) const ACCENT: Color = Color::from_rgb(1.0, 0.784, 0.008);
pub(crate) const ARROW_BACKGROUND: Color = Color::from_rgb(0.0, 0.0, 0.0);

/// Role of a form action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonKind {
    /// Filled button that commits the draft.
    Apply,
    /// Outlined button that restores defaults.
    Clear,
}

/// Whether `value` is a `#RRGGBB` colour literal.
pub(crate) fn is_valid_hex_color(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') || value.len() != 7 {
        return false;
    }
    chars.all(|ch| ch.is_ascii_hexdigit())
}

/// Parse a `#RRGGBB` colour literal.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    if !is_valid_hex_color(value) {
        return None;
    }

    let channel = |range: Range<usize>| {
        u8::from_str_radix(&value[range], 16).ok()
    };
    Some(Color::from_rgb8(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Parse a colour literal, falling back to `fallback` when it is malformed.
pub(crate) fn color_or(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid colour literal {value:?}, using fallback");
        fallback
    })
}

pub(crate) fn panel_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(PANEL_BACKGROUND.into()),
        text_color: Some(PANEL_TEXT),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(4.0, 0.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

pub(crate) fn separator_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(SEPARATOR.into()),
        ..Default::default()
    }
}

pub(crate) fn action_button_style(
    kind: ButtonKind,
    status: ButtonStatus,
) -> button::Style {
    let hovered =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let (background, border_width): (Option<Background>, f32) = match kind {
        ButtonKind::Apply => {
            let mut color = ACCENT;
            if hovered {
                color.a = 0.8;
            }
            (Some(color.into()), 0.0)
        },
        ButtonKind::Clear => {
            let background = hovered.then(|| {
                let mut color = ACCENT;
                color.a = 0.2;
                color.into()
            });
            (background, 1.0)
        },
    };

    button::Style {
        background,
        text_color: PANEL_TEXT,
        border: Border {
            width: border_width,
            color: PANEL_TEXT,
            radius: iced::border::Radius::from(0.0),
        },
        ..Default::default()
    }
}

pub(crate) fn arrow_button_style(status: ButtonStatus) -> button::Style {
    let mut background = ARROW_BACKGROUND;
    if matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed) {
        background.a = 0.8;
    }

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: iced::border::Radius::from(f32::MAX),
            ..Default::default()
        },
        ..Default::default()
    }
}
