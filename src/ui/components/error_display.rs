// SPDX-License-Identifier: MPL-2.0
//! Error panel with a severity accent, a detail line, and an optional
//! action button. The details screen fills it from a load failure; the
//! caller supplies already-localized strings.

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Picks the accent color of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    #[default]
    Error,
    Warning,
    Info,
}

impl ErrorSeverity {
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }
}

// One glyph for every severity; the accent color carries the distinction.
const GLYPH: &str = "⚠";

/// What the panel shows. Build it as a struct literal and call [`view`].
#[derive(Debug, Clone)]
pub struct ErrorPanel<Message> {
    pub severity: ErrorSeverity,
    pub title: String,
    /// Explanation under the title, when one is known.
    pub detail: Option<String>,
    /// Label and message for the action button.
    pub action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> ErrorPanel<Message> {
    pub fn view(self) -> Element<'static, Message> {
        let accent = self.severity.color();

        let glyph = Text::new(GLYPH)
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let mut body = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(self.title)
                    .size(typography::TITLE_MD)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );

        if let Some(detail) = self.detail {
            body = body.push(
                Container::new(Text::new(detail).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some((label, message)) = self.action {
            body = body.push(
                Container::new(
                    button(Text::new(label))
                        .on_press(message)
                        .style(button_styles::primary),
                )
                .padding(spacing::SM)
                .align_x(alignment::Horizontal::Center),
            );
        }

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(
                Container::new(glyph)
                    .width(Length::Shrink)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(body);

        Container::new(row)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(panel_style)
            .into()
    }
}

/// Renders the panel centered in a container that fills the screen.
pub fn fullscreen<Message: Clone + 'static>(panel: ErrorPanel<Message>) -> Element<'static, Message> {
    Container::new(panel.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

// The panel surface stays neutral; only the glyph and title carry the
// severity color.
fn panel_style(theme: &Theme) -> iced::widget::container::Style {
    let extended = theme.extended_palette();
    iced::widget::container::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        border: iced::Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
