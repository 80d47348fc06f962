// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state. Overlay layers (the rubric long-description
//! card and the toast stack) sit on top of the base screen.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::overlay as overlay_styles;
use crate::ui::submission_details::component;
use crate::ui::submission_details::presenter::{self, LoadedViewState, ViewState};
use crate::ui::submission_details::rubric;
use crate::ui::submission_details::view as details_view;
use crate::ui::toasts::{self, Toasts};
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub details: &'a component::State,
    pub rubric: Option<&'a rubric::component::State>,
    pub toasts: &'a Toasts,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = match ctx.screen {
        Screen::Details => view_details(&ctx),
        Screen::MissingCredentials => view_missing_credentials(ctx.i18n),
    };

    let mut stack = Stack::new().push(base);

    if let Some(overlay) = ctx
        .rubric
        .and_then(|state| state.shown_long_description.as_ref())
    {
        let card = rubric::view::long_description_card(ctx.i18n, overlay).map(Message::Rubric);
        stack = stack.push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(overlay_styles::backdrop),
        );
    }

    if !ctx.toasts.is_empty() {
        stack = stack.push(toasts::overlay(ctx.toasts, ctx.i18n).map(Message::Toast));
    }

    stack.into()
}

fn view_details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let details_ctx = details_view::ViewContext {
        i18n: ctx.i18n,
        state: ctx.details,
    };

    match presenter::present(ctx.details, ctx.i18n) {
        ViewState::Loading => details_view::loading(&details_ctx).map(Message::Details),
        ViewState::Error { failure } => {
            details_view::load_error(&details_ctx, failure.as_ref()).map(Message::Details)
        }
        ViewState::Loaded(view_state) => {
            Column::new()
                .spacing(spacing::SM)
                .width(Length::Fill)
                .height(Length::Fill)
                .push(details_view::header(&details_ctx, &view_state).map(Message::Details))
                .push(details_view::content_area(&details_ctx).map(Message::Details))
                .push(details_view::tab_row(&details_ctx, &view_state).map(Message::Details))
                .push(drawer_body(ctx, &details_ctx, &view_state))
                .into()
        }
    }
}

/// The rubric tab renders from the rubric component's own state and message
/// type; the other tabs come from the details view.
fn drawer_body<'a>(
    ctx: &ViewContext<'a>,
    details_ctx: &details_view::ViewContext<'a>,
    view_state: &LoadedViewState,
) -> Element<'a, Message> {
    if ctx.details.selected_tab == component::Tab::Rubric {
        let body: Element<'a, Message> = match ctx.rubric {
            Some(rubric_state) => {
                let rubric_ctx = rubric::view::ViewContext {
                    i18n: ctx.i18n,
                    state: rubric_state,
                };
                rubric::view::view(&rubric_ctx).map(Message::Rubric)
            }
            None => Text::new(ctx.i18n.tr("rubric-empty"))
                .size(typography::BODY)
                .into(),
        };
        return details_view::drawer_panel(body);
    }

    details_view::tab_body(details_ctx, view_state).map(Message::Details)
}

fn view_missing_credentials(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("missing-credentials-heading")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("missing-credentials-body")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
