// SPDX-License-Identifier: MPL-2.0
//! State machine for the submission details screen.
//!
//! Messages fold into [`State`] and yield a single [`Effect`] for the app
//! layer to execute. The state is the only owner of loaded data; views read
//! it, the app layer writes back what effects produce.

use crate::canvas::client::{DataResult, LoadedDetails};
use crate::canvas::models::{Assignment, Attachment, Course, Submission};
use chrono::Utc;
use iced::widget::image::Handle;

use super::content::{attachment_content, submission_content, ClassifyEnv, SubmissionContent};

/// Drawer tab under the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Comments,
    Files,
    Rubric,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Reload everything from the network.
    Refresh,
    /// A submission version was picked from the attempt selector.
    AttemptSelected(i64),
    /// A file row was clicked in the files tab.
    AttachmentSelected(Attachment),
    /// The load round-trip finished.
    Loaded(LoadedDetails),
    TabSelected(Tab),
    /// Hand the given link to the system browser.
    OpenInBrowser(String),
}

/// Side effects the app layer runs on behalf of this screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    LoadData {
        course_id: i64,
        assignment_id: i64,
    },
    /// Swap the content area to the given variant.
    ShowContent(SubmissionContent),
    OpenUrl(String),
}

pub struct State {
    /// Base domain for deep links into the web UI.
    pub domain: String,
    pub course_id: i64,
    pub assignment_id: i64,
    pub is_loading: bool,
    /// Course the assignment belongs to. A failed course fetch only costs
    /// the header subtitle, so the failure itself is not kept.
    pub course: Option<Course>,
    pub assignment: Option<DataResult<Assignment>>,
    pub submission: Option<DataResult<Submission>>,
    /// Unknown until the first load answers.
    pub arc_enabled: Option<bool>,
    pub selected_attempt: Option<i64>,
    pub selected_attachment_id: Option<i64>,
    pub selected_tab: Tab,
    /// Last content variant surfaced by a show-content effect. Written by
    /// the app layer, read by the view.
    pub shown_content: Option<SubmissionContent>,
    /// Decoded preview for image content, once fetched.
    pub preview: Option<Handle>,
}

impl State {
    pub fn new(domain: String, course_id: i64, assignment_id: i64) -> Self {
        Self {
            domain,
            course_id,
            assignment_id,
            is_loading: false,
            course: None,
            assignment: None,
            submission: None,
            arc_enabled: None,
            selected_attempt: None,
            selected_attachment_id: None,
            selected_tab: Tab::default(),
            shown_content: None,
            preview: None,
        }
    }

    /// Enters the loading state and requests the initial fetch.
    pub fn init(&mut self) -> Effect {
        self.is_loading = true;
        Effect::LoadData {
            course_id: self.course_id,
            assignment_id: self.assignment_id,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Refresh => {
                self.is_loading = true;
                Effect::LoadData {
                    course_id: self.course_id,
                    assignment_id: self.assignment_id,
                }
            }
            Message::AttemptSelected(attempt) => {
                if self.selected_attempt == Some(attempt) {
                    return Effect::None;
                }
                self.selected_attempt = Some(attempt);
                match &self.assignment {
                    Some(Ok(assignment)) => {
                        let submission = self
                            .root_submission()
                            .and_then(|root| {
                                root.submission_history
                                    .iter()
                                    .find(|entry| entry.attempt == attempt)
                            });
                        Effect::ShowContent(submission_content(
                            submission,
                            assignment,
                            &self.classify_env(),
                        ))
                    }
                    _ => Effect::None,
                }
            }
            Message::AttachmentSelected(attachment) => {
                if self.selected_attachment_id == Some(attachment.id) {
                    return Effect::None;
                }
                self.selected_attachment_id = Some(attachment.id);
                Effect::ShowContent(attachment_content(&attachment))
            }
            Message::Loaded(details) => {
                self.is_loading = false;
                if let Ok(course) = details.course {
                    self.course = Some(course);
                }
                self.arc_enabled = Some(details.arc_enabled);
                self.selected_attempt = details
                    .submission
                    .as_ref()
                    .ok()
                    .map(|submission| submission.attempt);
                self.assignment = Some(details.assignment);
                self.submission = Some(details.submission);
                match &self.assignment {
                    Some(Ok(assignment)) => {
                        let submission = self
                            .submission
                            .as_ref()
                            .and_then(|result| result.as_ref().ok());
                        Effect::ShowContent(submission_content(
                            submission,
                            assignment,
                            &self.classify_env(),
                        ))
                    }
                    _ => Effect::None,
                }
            }
            Message::TabSelected(tab) => {
                self.selected_tab = tab;
                Effect::None
            }
            Message::OpenInBrowser(url) => Effect::OpenUrl(url),
        }
    }

    /// The most recent submission as loaded, when the fetch succeeded.
    pub fn root_submission(&self) -> Option<&Submission> {
        self.submission
            .as_ref()
            .and_then(|result| result.as_ref().ok())
    }

    pub fn loaded_assignment(&self) -> Option<&Assignment> {
        self.assignment
            .as_ref()
            .and_then(|result| result.as_ref().ok())
    }

    /// Name of the loaded course, when the fetch delivered one worth showing.
    pub fn course_name(&self) -> Option<&str> {
        self.course
            .as_ref()
            .map(|course| course.name.as_str())
            .filter(|name| !name.is_empty())
    }

    fn classify_env(&self) -> ClassifyEnv {
        ClassifyEnv {
            domain: self.domain.clone(),
            course_id: self.course_id,
            arc_enabled: self.arc_enabled.unwrap_or(false),
            now: Utc::now(),
        }
    }
}
