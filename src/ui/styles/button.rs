// SPDX-License-Identifier: MPL-2.0
//! Button styles shared across the screen.
//!
//! Two families cover every button: the brand fill for actions and
//! selected toggles, and the neutral fill for everything else. The rubric
//! pills and the overlay close button derive from them.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, border_color: Color, text_color: Color, drop: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: drop,
        snap: true,
    }
}

/// Brand-colored fill for actions such as "open in browser" and "retry".
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            palette::PRIMARY_600,
            palette::WHITE,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::PRIMARY_500,
            palette::WHITE,
            shadow::MD,
        ),
        button::Status::Disabled => {
            let background = if matches!(theme, Theme::Light) {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// The picked entry in a toggle group (tabs, file rows) shares the action
/// treatment so selection reads the same everywhere.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Neutral fill for unpicked toggle entries and low-emphasis actions.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = matches!(theme, Theme::Light);
    let text_color = if light { palette::GRAY_900 } else { palette::WHITE };
    let resting = if light { palette::GRAY_100 } else { palette::GRAY_700 };

    match status {
        button::Status::Hovered => {
            let hover = if light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(hover, palette::PRIMARY_500, text_color, shadow::SM)
        }
        button::Status::Disabled => {
            filled(resting, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
        _ => filled(resting, palette::GRAY_400, text_color, shadow::NONE),
    }
}

/// Rubric rating pill: selection palette with a fully rounded outline.
pub fn rating_pill(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = if is_selected {
            selected(theme, status)
        } else {
            unselected(theme, status)
        };

        button::Style {
            border: Border {
                radius: radius::FULL.into(),
                ..base.border
            },
            ..base
        }
    }
}

/// White-on-wash button for controls sitting on an overlay card.
pub fn translucent(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..Color::BLACK
        })),
        text_color: palette::WHITE,
        border: Border::default(),
        shadow: shadow::MD,
        snap: true,
    }
}
