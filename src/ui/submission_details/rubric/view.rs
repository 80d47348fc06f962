// SPDX-License-Identifier: MPL-2.0
//! Widget tree for the rubric tab body and the long-description card.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::container as container_styles;
use crate::ui::styles::overlay as overlay_styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

use super::component::{LongDescription, Message, State};
use super::grade_cell::{GradeCellState, GradeData};
use super::presenter::{present, CriterionRow, RatingRow, RubricListItem};

/// Context for rendering the rubric tab.
#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the rubric list: grade summary first, then one card per criterion.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD);
    for item in present(ctx.state, ctx.i18n) {
        column = column.push(match item {
            RubricListItem::Empty => Text::new(ctx.i18n.tr("rubric-empty"))
                .size(typography::BODY)
                .into(),
            RubricListItem::Grade(grade) => grade_card(&grade),
            RubricListItem::Criterion(row) => criterion_card(ctx.i18n, &row),
        });
    }
    column.into()
}

fn grade_card<'a>(grade: &GradeCellState) -> Element<'a, Message> {
    match grade {
        GradeCellState::Empty => Column::new().into(),
        GradeCellState::Submitted { title, details } => Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(title.clone()).size(typography::BODY))
            .push(
                Text::new(details.clone())
                    .size(typography::BODY_SM)
                    .style(secondary_text),
            )
            .into(),
        GradeCellState::Graded(data) => graded_card(data),
    }
}

fn graded_card<'a>(data: &GradeData) -> Element<'a, Message> {
    let chip = Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(data.score.clone()).size(typography::TITLE_SM))
            .push(Text::new(data.out_of.clone()).size(typography::CAPTION)),
    )
    .padding([spacing::XS, spacing::SM])
    .style(overlay_styles::indicator(radius::LG));

    let mut summary = Column::new().spacing(spacing::XXS);
    if let Some(grade) = &data.grade {
        summary = summary.push(Text::new(grade.clone()).size(typography::TITLE_SM));
    }
    if let Some(penalty) = &data.late_penalty {
        summary = summary.push(
            Text::new(penalty.clone())
                .size(typography::BODY_SM)
                .style(warning_text),
        );
    }
    if let Some(final_grade) = &data.final_grade {
        summary = summary.push(Text::new(final_grade.clone()).size(typography::BODY_SM));
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(chip)
        .push(summary)
        .into()
}

fn criterion_card<'a>(i18n: &I18n, row: &CriterionRow) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(row.description.clone()).size(typography::BODY));

    if !row.ratings.is_empty() {
        let mut pills = Row::new().spacing(spacing::XS);
        for rating in &row.ratings {
            pills = pills.push(rating_pill(rating));
        }
        column = column.push(pills);
    }

    if let Some(description) = &row.rating_description {
        column = column.push(Text::new(description.clone()).size(typography::BODY_SM));
    }
    if let Some(comment) = &row.comment {
        column = column.push(
            Text::new(comment.clone())
                .size(typography::BODY_SM)
                .style(secondary_text),
        );
    }
    if row.show_long_description_button {
        column = column.push(
            button(Text::new(i18n.tr("rubric-view-description")).size(typography::BODY_SM))
                .on_press(Message::LongDescriptionClicked(row.criterion_id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(container_styles::panel)
        .into()
}

// Pills never press; styling alone marks the grader's pick.
fn rating_pill<'a>(rating: &RatingRow) -> Element<'a, Message> {
    let size = if rating.use_small_text {
        typography::CAPTION
    } else {
        typography::BODY_SM
    };
    button(Text::new(rating.points.clone()).size(size))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::rating_pill(rating.is_selected))
        .into()
}

/// Render the long-description card shown over the screen.
pub fn long_description_card<'a>(
    i18n: &I18n,
    overlay: &LongDescription,
) -> Element<'a, Message> {
    let close = button(Text::new(i18n.tr("close-button")).size(typography::BODY_SM))
        .on_press(Message::LongDescriptionClosed)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::translucent);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(i18n.tr("rubric-description-title"))
                        .size(typography::CAPTION)
                        .style(secondary_text),
                )
                .push(Text::new(overlay.description.clone()).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(close);

    let body = scrollable(
        Text::new(overlay.long_description.clone())
            .size(typography::BODY)
            .width(Length::Fill),
    );

    Container::new(Column::new().spacing(spacing::MD).push(header).push(body))
        .width(Length::Fixed(sizing::OVERLAY_CARD_WIDTH))
        .max_height(sizing::OVERLAY_CARD_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(overlay_styles::card)
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    }
}

fn warning_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::WARNING_500),
    }
}
