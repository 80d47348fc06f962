// SPDX-License-Identifier: MPL-2.0
//! Maps a submission onto the content variant the viewer should render.
//!
//! Classification is a total function: malformed or absent payload fields
//! degrade to empty strings or to [`SubmissionContent::Unsupported`], never
//! to a panic.

use crate::canvas::links;
use crate::canvas::mime;
use crate::canvas::models::{Assignment, Attachment, Submission, SubmissionType};
use crate::canvas::status::submission_status;
use chrono::{DateTime, Utc};

/// Marker identifying hosted-document preview sessions in a preview URL.
const CANVADOC_MARKER: &str = "canvadoc";

/// What the content area renders for one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionContent {
    /// The assignment accepts no online submissions at all.
    None,
    /// The assignment is handed in on paper.
    OnPaper,
    /// Nothing viewable for this student yet. Carries whether the hosted
    /// media integration is available as a capture hint.
    NoSubmission { arc_enabled: bool },
    ExternalTool { url: String },
    Text { body: String },
    Media {
        url: String,
        content_type: String,
        display_name: Option<String>,
        thumbnail_url: Option<String>,
    },
    Pdf { url: String },
    Image { url: String, content_type: String },
    Url { url: String, preview_url: Option<String> },
    Quiz { url: String },
    Discussion { preview_url: Option<String> },
    /// A file with no inline renderer, offered as a download.
    OtherAttachment { attachment: Attachment },
    Unsupported,
}

/// Inputs the classifier needs beyond the submission and assignment.
#[derive(Debug, Clone)]
pub struct ClassifyEnv {
    /// Base domain used to build web deep links.
    pub domain: String,
    pub course_id: i64,
    pub arc_enabled: bool,
    /// The instant "past due" is judged against.
    pub now: DateTime<Utc>,
}

/// Classifies the given submission attempt.
///
/// Resolution order: assignment-level types that make the submission
/// irrelevant (none, on-paper) win first, then absence of a viewable
/// submission, then the submission's own type tag.
pub fn submission_content(
    submission: Option<&Submission>,
    assignment: &Assignment,
    env: &ClassifyEnv,
) -> SubmissionContent {
    if assignment.accepts(SubmissionType::None) {
        return SubmissionContent::None;
    }
    if assignment.accepts(SubmissionType::OnPaper) {
        return SubmissionContent::OnPaper;
    }

    let no_submission = SubmissionContent::NoSubmission {
        arc_enabled: env.arc_enabled,
    };
    let Some(submission) = submission else {
        return no_submission;
    };
    if submission.submission_type.is_none() {
        return no_submission;
    }
    if submission_status(assignment, Some(submission), env.now).is_missing() {
        return no_submission;
    }

    let resolve = |raw: Option<&str>| {
        raw.and_then(|value| links::resolve_preview_url(&env.domain, value))
    };

    match submission.type_tag() {
        Some(SubmissionType::BasicLtiLaunch) => SubmissionContent::ExternalTool {
            url: resolve(submission.preview_url.as_deref())
                .or_else(|| resolve(assignment.url.as_deref()))
                .or_else(|| resolve(assignment.html_url.as_deref()))
                .unwrap_or_default(),
        },
        Some(SubmissionType::OnlineTextEntry) => SubmissionContent::Text {
            body: submission.body.clone().unwrap_or_default(),
        },
        Some(SubmissionType::MediaRecording) => match &submission.media_comment {
            Some(comment) => SubmissionContent::Media {
                url: comment.url.clone().unwrap_or_default(),
                content_type: comment.content_type.clone().unwrap_or_default(),
                display_name: comment.display_name.clone(),
                thumbnail_url: None,
            },
            None => SubmissionContent::Unsupported,
        },
        Some(SubmissionType::OnlineUpload) => match submission.attachments.first() {
            Some(attachment) => attachment_content(attachment),
            None => SubmissionContent::Unsupported,
        },
        Some(SubmissionType::OnlineUrl) => SubmissionContent::Url {
            url: submission.url.clone().unwrap_or_default(),
            preview_url: submission
                .attachments
                .first()
                .and_then(|attachment| attachment.url.clone()),
        },
        Some(SubmissionType::OnlineQuiz) => SubmissionContent::Quiz {
            url: links::quiz_history_url(
                &env.domain,
                env.course_id,
                assignment.quiz_id,
                submission.attempt,
            ),
        },
        Some(SubmissionType::DiscussionTopic) => SubmissionContent::Discussion {
            preview_url: resolve(submission.preview_url.as_deref()),
        },
        _ => SubmissionContent::Unsupported,
    }
}

/// Classifies a single attachment by its effective MIME type.
///
/// A wildcard `*/*` type is resolved from the filename extension, then from
/// the download URL; if neither resolves, the wildcard sticks and the file
/// falls through to [`SubmissionContent::OtherAttachment`].
pub fn attachment_content(attachment: &Attachment) -> SubmissionContent {
    let Some(raw_type) = attachment.content_type.clone() else {
        return SubmissionContent::OtherAttachment {
            attachment: attachment.clone(),
        };
    };

    let effective = if raw_type == "*/*" {
        attachment
            .filename
            .as_deref()
            .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
            .and_then(mime::from_extension)
            .map(str::to_string)
            .or_else(|| {
                attachment
                    .url
                    .as_deref()
                    .and_then(mime::from_url)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| raw_type.clone())
    } else {
        raw_type.clone()
    };

    let is_canvadoc = attachment
        .preview_url
        .as_deref()
        .is_some_and(|url| url.contains(CANVADOC_MARKER));

    if effective == "application/pdf" || is_canvadoc {
        let url = attachment
            .preview_url
            .clone()
            .or_else(|| attachment.url.clone())
            .unwrap_or_default();
        return SubmissionContent::Pdf { url };
    }
    if effective.starts_with("audio") || effective.starts_with("video") {
        return SubmissionContent::Media {
            url: attachment.url.clone().unwrap_or_default(),
            content_type: raw_type,
            display_name: attachment.display_name.clone(),
            thumbnail_url: attachment.thumbnail_url.clone(),
        };
    }
    if effective.starts_with("image") {
        return SubmissionContent::Image {
            url: attachment.url.clone().unwrap_or_default(),
            content_type: raw_type,
        };
    }
    SubmissionContent::OtherAttachment {
        attachment: attachment.clone(),
    }
}
