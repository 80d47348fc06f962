// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the long-description card, its backdrop, and
//! floating chips like the score badge.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn wash(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::BLACK
    }
}

fn faint_outline() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::WHITE
    }
}

/// Dark chip for inline indicators such as the rubric score badge.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(wash(opacity::OVERLAY_STRONG))),
        text_color: Some(palette::WHITE),
        border: Border {
            color: faint_outline(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// The dimmed layer behind a modal card.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(wash(opacity::OVERLAY_MEDIUM))),
        ..Default::default()
    }
}

/// The modal card itself.
#[must_use]
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(wash(opacity::OVERLAY_STRONG))),
        text_color: Some(palette::WHITE),
        border: Border {
            color: faint_outline(),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
