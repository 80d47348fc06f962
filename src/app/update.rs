// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The submission details component folds messages into its state and hands
//! back an [`Effect`]; the handlers here run those effects against the
//! network service, the preview cache, and the system browser.

use super::Message;
use crate::canvas::client::{load_details, DataResult, SubmissionDetailsService};
use crate::canvas::previews::PreviewCache;
use crate::ui::submission_details::component::{self, Effect};
use crate::ui::submission_details::content::SubmissionContent;
use crate::ui::submission_details::rubric;
use crate::ui::toasts::{self, Toast};
use crate::util;
use iced::Task;
use std::sync::Arc;
use tracing::warn;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub details: &'a mut component::State,
    pub rubric: &'a mut Option<rubric::component::State>,
    pub previews: &'a mut PreviewCache,
    pub service: Option<&'a Arc<dyn SubmissionDetailsService>>,
    pub toasts: &'a mut toasts::Toasts,
}

/// Handles submission details component messages.
pub fn handle_details_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    let finished_load = matches!(&message, component::Message::Loaded(_));
    let had_data = ctx.details.assignment.is_some();

    let effect = ctx.details.handle_message(message);

    if finished_load {
        // The rubric works on its own copy of the loaded pair.
        *ctx.rubric = match (
            ctx.details.loaded_assignment(),
            ctx.details.root_submission(),
        ) {
            (Some(assignment), Some(submission)) => Some(rubric::component::State::new(
                assignment.clone(),
                submission.clone(),
            )),
            _ => None,
        };

        ctx.toasts.clear_preview_failures();
        if had_data && ctx.rubric.is_some() {
            ctx.toasts.push(Toast::success("notification-refreshed"));
        }
    }

    perform_effect(ctx, effect)
}

/// Handles rubric component messages.
pub fn handle_rubric_message(
    ctx: &mut UpdateContext<'_>,
    message: rubric::component::Message,
) -> Task<Message> {
    let Some(rubric_state) = ctx.rubric.as_mut() else {
        return Task::none();
    };
    match rubric_state.handle_message(message) {
        rubric::component::Effect::ShowLongDescription {
            description,
            long_description,
        } => {
            rubric_state.show_long_description(description, long_description);
        }
        rubric::component::Effect::None => {}
    }
    Task::none()
}

/// Handles a finished preview download.
pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: DataResult<Vec<u8>>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            let handle = ctx.previews.insert(url.clone(), bytes);
            // The user may have moved on while the download ran.
            let still_wanted = ctx
                .details
                .shown_content
                .as_ref()
                .and_then(preview_source)
                .is_some_and(|current| current == url);
            if still_wanted {
                ctx.details.preview = Some(handle);
            }
        }
        Err(failure) => {
            warn!(%failure, url, "preview download failed");
            ctx.toasts.push(Toast::warning(toasts::PREVIEW_FAILURE_KEY));
        }
    }
    Task::none()
}

/// Runs one effect produced by the submission details component.
pub fn perform_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::LoadData {
            course_id,
            assignment_id,
        } => {
            let Some(service) = ctx.service else {
                return Task::none();
            };
            let service = Arc::clone(service);
            Task::perform(
                load_details(service, course_id, assignment_id),
                |details| Message::Details(component::Message::Loaded(details)),
            )
        }
        Effect::ShowContent(content) => show_content(ctx, content),
        Effect::OpenUrl(url) => {
            if let Err(error) = util::open_in_browser(&url) {
                warn!(%error, url, "could not hand the link to the browser");
            }
            Task::none()
        }
    }
}

/// Stores the new content and resolves its preview, from the cache when the
/// bytes were downloaded before, otherwise through the service.
fn show_content(ctx: &mut UpdateContext<'_>, content: SubmissionContent) -> Task<Message> {
    let source = preview_source(&content);
    ctx.details.shown_content = Some(content);
    ctx.details.preview = None;

    let Some(url) = source else {
        return Task::none();
    };

    if let Some(handle) = ctx.previews.get(&url) {
        ctx.details.preview = Some(handle);
        return Task::none();
    }

    let Some(service) = ctx.service else {
        return Task::none();
    };
    let service = Arc::clone(service);
    let request_url = url.clone();
    Task::perform(
        async move { service.fetch_bytes(request_url).await },
        move |result| Message::PreviewLoaded {
            url: url.clone(),
            result,
        },
    )
}

/// The URL a content variant previews inline, when it has one.
fn preview_source(content: &SubmissionContent) -> Option<String> {
    match content {
        SubmissionContent::Image { url, .. } => Some(url.clone()),
        SubmissionContent::Url { preview_url, .. } => preview_url.clone(),
        SubmissionContent::Discussion { preview_url } => preview_url.clone(),
        SubmissionContent::Media { thumbnail_url, .. } => thumbnail_url.clone(),
        _ => None,
    }
}
