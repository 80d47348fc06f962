// SPDX-License-Identifier: MPL-2.0
//! Container styles for cards and panels.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface for the drawer tabs and rubric cards.
///
/// Derived from the active theme background with a slight transparency so
/// panels stay readable in light and dark modes alike.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
