// SPDX-License-Identifier: MPL-2.0
//! Widget tree for the submission details screen.
//!
//! The screen renders in pieces (`header`, `content_area`, `tab_row`, and
//! `tab_body`) that the app layer stacks into the loaded layout, so it can
//! slot the rubric drawer body in between. The rubric speaks its own message
//! type and cannot be composed here. `loading` and `load_error` replace the
//! whole screen.

use crate::canvas::models::{Attachment, SubmissionComment};
use crate::error::LoadFailure;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{self, ErrorPanel, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::container as container_styles;
use crate::util::month_day_at_time;
use chrono::Local;
use iced::widget::image::Image;
use iced::widget::{button, pick_list, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

use super::component::{Message, State, Tab};
use super::content::SubmissionContent;
use super::presenter::{LoadedViewState, SubmissionVersion, TabData};

// =============================================================================
// View Context
// =============================================================================

/// Context for rendering the submission details screen.
#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

// =============================================================================
// Full-screen states
// =============================================================================

/// Render the full-screen loading placeholder.
pub fn loading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr("loading")).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Render the full-screen load failure with a retry action.
pub fn load_error<'a>(ctx: &ViewContext<'a>, failure: Option<&LoadFailure>) -> Element<'a, Message> {
    let detail = failure.map(|failure| match failure {
        LoadFailure::Status(code) => {
            let code = code.to_string();
            ctx.i18n.tr_with_args("error-load-status", &[("status", &code)])
        }
        other => ctx.i18n.tr(other.i18n_key()),
    });

    error_display::fullscreen(ErrorPanel {
        severity: ErrorSeverity::Error,
        title: ctx.i18n.tr("error-heading"),
        detail,
        action: Some((ctx.i18n.tr("retry-button"), Message::Refresh)),
    })
}

// =============================================================================
// Header
// =============================================================================

/// Render the screen header: assignment name, attempt selector, refresh.
pub fn header<'a>(ctx: &ViewContext<'a>, view_state: &LoadedViewState) -> Element<'a, Message> {
    let mut heading = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("screen-title"))
                .size(typography::CAPTION)
                .style(secondary_text),
        )
        .push(Text::new(view_state.assignment_name.clone()).size(typography::TITLE_MD));
    if let Some(course_name) = &view_state.course_name {
        heading = heading.push(
            Text::new(course_name.clone())
                .size(typography::BODY_SM)
                .style(secondary_text),
        );
    }

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(heading).width(Length::Fill));

    let options = version_options(view_state, ctx.i18n);
    if view_state.show_version_picker {
        let selected = options.get(view_state.selected_version_index).cloned();
        let picker = pick_list(options, selected, |version: SubmissionVersion| {
            Message::AttemptSelected(version.attempt)
        })
        .placeholder(ctx.i18n.tr("version-placeholder"))
        .padding(spacing::XS)
        .text_size(typography::BODY_SM)
        .width(Length::Fixed(sizing::VERSION_PICKER_WIDTH));
        row = row.push(picker);
    } else if let Some(version) = options.into_iter().nth(view_state.selected_version_index) {
        row = row.push(
            Text::new(version.label)
                .size(typography::BODY_SM)
                .style(secondary_text),
        );
    }

    let refresh = button(Text::new(ctx.i18n.tr("refresh-button")).size(typography::BODY_SM))
        .on_press(Message::Refresh)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);
    row = row.push(refresh);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// Selector rows, with a placeholder label for undated attempts.
fn version_options(view_state: &LoadedViewState, i18n: &I18n) -> Vec<SubmissionVersion> {
    view_state
        .versions
        .iter()
        .map(|version| {
            if version.label.is_empty() {
                SubmissionVersion {
                    attempt: version.attempt,
                    label: i18n.tr("no-submission-date"),
                }
            } else {
                version.clone()
            }
        })
        .collect()
}

// =============================================================================
// Content area
// =============================================================================

/// Render the main content region for the currently shown classification.
pub fn content_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let body: Element<'a, Message> = match &ctx.state.shown_content {
        Some(SubmissionContent::None) => note(i18n.tr("content-none")),
        Some(SubmissionContent::OnPaper) => note(i18n.tr("content-on-paper")),
        Some(SubmissionContent::NoSubmission { .. }) => note(i18n.tr("content-no-submission")),
        Some(SubmissionContent::Unsupported) => note(i18n.tr("content-unsupported")),
        Some(SubmissionContent::Text { body }) => Container::new(
            scrollable(Text::new(body.clone()).size(typography::BODY)).width(Length::Fill),
        )
        .padding(spacing::MD)
        .into(),
        Some(SubmissionContent::ExternalTool { url }) => {
            linked_note(i18n.tr("content-external-tool"), url, i18n)
        }
        Some(SubmissionContent::Media { url, display_name, .. }) => {
            let mut column = Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("content-media")).size(typography::BODY));
            if let Some(name) = display_name {
                column = column.push(
                    Text::new(name.clone())
                        .size(typography::BODY_SM)
                        .style(secondary_text),
                );
            }
            if ctx.state.preview.is_some() {
                column = column.push(preview_image(ctx));
            }
            column = column.push(open_button(i18n, url));
            centered(column.into())
        }
        Some(SubmissionContent::Pdf { url }) => linked_note(i18n.tr("content-pdf"), url, i18n),
        Some(SubmissionContent::Image { .. }) => preview_image(ctx),
        Some(SubmissionContent::Url { url, .. }) => {
            let mut column = Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("content-url")).size(typography::BODY))
                .push(
                    Text::new(url.clone())
                        .size(typography::CAPTION)
                        .style(secondary_text),
                );
            if ctx.state.preview.is_some() {
                column = column.push(preview_image(ctx));
            }
            column = column.push(open_button(i18n, url));
            centered(column.into())
        }
        Some(SubmissionContent::Quiz { url }) => linked_note(i18n.tr("content-quiz"), url, i18n),
        Some(SubmissionContent::Discussion { preview_url }) => {
            let mut column = Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("content-discussion")).size(typography::BODY));
            if ctx.state.preview.is_some() {
                column = column.push(preview_image(ctx));
            }
            if let Some(url) = preview_url {
                column = column.push(open_button(i18n, url));
            }
            centered(column.into())
        }
        Some(SubmissionContent::OtherAttachment { attachment }) => {
            let name = attachment
                .display_name
                .clone()
                .or_else(|| attachment.filename.clone())
                .unwrap_or_else(|| attachment.id.to_string());
            let mut column = Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(name).size(typography::BODY));
            if attachment.size > 0 {
                column = column.push(
                    Text::new(format_size(attachment.size))
                        .size(typography::CAPTION)
                        .style(secondary_text),
                );
            }
            if let Some(url) = &attachment.url {
                column = column.push(open_button(i18n, url));
            }
            centered(column.into())
        }
        None => Column::new().into(),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::FillPortion(3))
        .into()
}

/// Fetched preview bitmap, or a placeholder while it is in flight.
fn preview_image<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match &ctx.state.preview {
        Some(handle) => Container::new(
            Image::new(handle.clone()).height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT)),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into(),
        None => note(ctx.i18n.tr("loading")),
    }
}

// =============================================================================
// Drawer
// =============================================================================

/// Render the drawer tab selector row.
pub fn tab_row<'a>(ctx: &ViewContext<'a>, view_state: &LoadedViewState) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for tab_data in &view_state.tabs {
        let tab = tab_for(tab_data);
        let style: fn(&Theme, button::Status) -> button::Style = if tab == ctx.state.selected_tab {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(Text::new(tab_data.name().to_string()).size(typography::BODY_SM))
                .on_press(Message::TabSelected(tab))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }
    Container::new(row).padding([0.0, spacing::MD]).into()
}

fn tab_for(tab_data: &TabData) -> Tab {
    match tab_data {
        TabData::Comments { .. } => Tab::Comments,
        TabData::Files { .. } => Tab::Files,
        TabData::Rubric { .. } => Tab::Rubric,
    }
}

/// Shared chrome for a drawer tab body.
pub fn drawer_panel<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    Container::new(scrollable(content).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::FillPortion(2))
        .padding(spacing::MD)
        .style(container_styles::panel)
        .into()
}

/// Render the body of the selected drawer tab.
///
/// The rubric tab yields an empty body here; its widget tree is built by the
/// app layer from the rubric component's own state.
pub fn tab_body<'a>(ctx: &ViewContext<'a>, view_state: &LoadedViewState) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.state.selected_tab {
        Tab::Comments => view_state
            .tabs
            .iter()
            .find_map(|tab| match tab {
                TabData::Comments { comments, .. } => Some(comments_list(ctx.i18n, comments)),
                _ => None,
            })
            .unwrap_or_else(|| Column::new().into()),
        Tab::Files => view_state
            .tabs
            .iter()
            .find_map(|tab| match tab {
                TabData::Files {
                    files,
                    selected_file_id,
                    ..
                } => Some(files_list(ctx, files, *selected_file_id)),
                _ => None,
            })
            .unwrap_or_else(|| Column::new().into()),
        Tab::Rubric => Column::new().into(),
    };

    drawer_panel(body)
}

fn comments_list<'a>(i18n: &I18n, comments: &[SubmissionComment]) -> Element<'a, Message> {
    if comments.is_empty() {
        return Text::new(i18n.tr("comments-empty"))
            .size(typography::BODY)
            .into();
    }

    let at_word = i18n.tr("date-at");
    let mut column = Column::new().spacing(spacing::MD);
    for comment in comments {
        let when = comment
            .created_at
            .map(|date| month_day_at_time(&date.with_timezone(&Local), &at_word))
            .unwrap_or_default();

        let meta = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(comment.author_name.clone().unwrap_or_default())
                    .size(typography::BODY_SM),
            )
            .push(
                Text::new(when)
                    .size(typography::CAPTION)
                    .style(secondary_text),
            );

        let entry = Column::new()
            .spacing(spacing::XXS)
            .push(meta)
            .push(Text::new(comment.comment.clone().unwrap_or_default()).size(typography::BODY));

        column = column.push(entry);
    }
    column.into()
}

fn files_list<'a>(
    ctx: &ViewContext<'a>,
    files: &[Attachment],
    default_file_id: i64,
) -> Element<'a, Message> {
    if files.is_empty() {
        return Text::new(ctx.i18n.tr("files-empty"))
            .size(typography::BODY)
            .into();
    }

    let highlighted = ctx.state.selected_attachment_id.unwrap_or(default_file_id);

    let mut column = Column::new().spacing(spacing::XS);
    for file in files {
        let name = file
            .display_name
            .clone()
            .or_else(|| file.filename.clone())
            .unwrap_or_else(|| file.id.to_string());

        let mut label = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(name).size(typography::BODY_SM));
        if file.size > 0 {
            label = label.push(
                Text::new(format_size(file.size))
                    .size(typography::CAPTION)
                    .style(secondary_text),
            );
        }

        let style: fn(&Theme, button::Status) -> button::Style = if file.id == highlighted {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        column = column.push(
            button(label)
                .on_press(Message::AttachmentSelected(file.clone()))
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(style),
        );
    }
    column.into()
}

// =============================================================================
// Shared helpers
// =============================================================================

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    }
}

fn note<'a>(message: String) -> Element<'a, Message> {
    centered(Text::new(message).size(typography::BODY).into())
}

fn linked_note<'a>(message: String, url: &str, i18n: &I18n) -> Element<'a, Message> {
    centered(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(message).size(typography::BODY))
            .push(open_button(i18n, url))
            .into(),
    )
}

fn open_button<'a>(i18n: &I18n, url: &str) -> Element<'a, Message> {
    button(Text::new(i18n.tr("open-in-browser")).size(typography::BODY_SM))
        .on_press(Message::OpenInBrowser(url.to_string()))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .into()
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn format_size(bytes: i64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
