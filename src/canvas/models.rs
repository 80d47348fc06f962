// SPDX-License-Identifier: MPL-2.0
//! Payload models for the REST API.
//!
//! Field coverage follows what the submission details screen actually reads.
//! The API omits or nulls fields freely, so every field carries a serde
//! default and nullable scalars go through [`null_default`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Deserializes an explicit JSON `null` as the type's default value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

/// Submission type tags an assignment can accept.
///
/// The API transports these as snake_case strings; unknown tags stay raw on
/// the model and simply fail [`SubmissionType::from_api_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionType {
    DiscussionTopic,
    OnlineQuiz,
    OnPaper,
    None,
    ExternalTool,
    OnlineTextEntry,
    OnlineUrl,
    OnlineUpload,
    MediaRecording,
    BasicLtiLaunch,
    StudentAnnotation,
    Attendance,
    NotGraded,
}

impl SubmissionType {
    pub fn api_string(self) -> &'static str {
        match self {
            Self::DiscussionTopic => "discussion_topic",
            Self::OnlineQuiz => "online_quiz",
            Self::OnPaper => "on_paper",
            Self::None => "none",
            Self::ExternalTool => "external_tool",
            Self::OnlineTextEntry => "online_text_entry",
            Self::OnlineUrl => "online_url",
            Self::OnlineUpload => "online_upload",
            Self::MediaRecording => "media_recording",
            Self::BasicLtiLaunch => "basic_lti_launch",
            Self::StudentAnnotation => "student_annotation",
            Self::Attendance => "attendance",
            Self::NotGraded => "not_graded",
        }
    }

    pub fn from_api_string(raw: &str) -> Option<Self> {
        match raw {
            "discussion_topic" => Some(Self::DiscussionTopic),
            "online_quiz" => Some(Self::OnlineQuiz),
            "on_paper" => Some(Self::OnPaper),
            "none" => Some(Self::None),
            "external_tool" => Some(Self::ExternalTool),
            "online_text_entry" => Some(Self::OnlineTextEntry),
            "online_url" => Some(Self::OnlineUrl),
            "online_upload" => Some(Self::OnlineUpload),
            "media_recording" => Some(Self::MediaRecording),
            "basic_lti_launch" => Some(Self::BasicLtiLaunch),
            "student_annotation" => Some(Self::StudentAnnotation),
            "attendance" => Some(Self::Attendance),
            "not_graded" => Some(Self::NotGraded),
            _ => Option::None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RubricRating {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RubricCriterion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub points: f64,
    #[serde(default)]
    pub ratings: Vec<RubricRating>,
    #[serde(default, deserialize_with = "null_default")]
    pub criterion_use_range: bool,
}

/// A grader's verdict on one rubric criterion, keyed by criterion id on the
/// submission payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RubricCriterionAssessment {
    #[serde(default)]
    pub rating_id: Option<String>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RubricSettings {
    #[serde(default, deserialize_with = "null_default")]
    pub hide_points: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub free_form_criterion_comments: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub course_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub points_possible: f64,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    /// Raw submission type tags exactly as the API sent them.
    #[serde(default, rename = "submission_types")]
    pub submission_types_raw: Vec<String>,
    /// External tool launch URL, when the assignment is an LTI placement.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub quiz_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub use_rubric_for_grading: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub free_form_criterion_comments: bool,
    #[serde(default)]
    pub rubric: Vec<RubricCriterion>,
    #[serde(default)]
    pub rubric_settings: Option<RubricSettings>,
}

impl Assignment {
    /// Whether the raw tag set contains the given type.
    pub fn accepts(&self, kind: SubmissionType) -> bool {
        self.submission_types_raw
            .iter()
            .any(|raw| raw == kind.api_string())
    }

    pub fn hide_rubric_points(&self) -> bool {
        self.rubric_settings
            .as_ref()
            .is_some_and(|settings| settings.hide_points)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub id: i64,
    #[serde(default, rename = "content-type", alias = "content_type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_default")]
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaComment {
    #[serde(default)]
    pub media_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default, rename = "content-type", alias = "content_type")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmissionComment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub id: i64,
    /// 0 when the student never actually submitted (the API sends null).
    #[serde(default, deserialize_with = "null_default")]
    pub attempt: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub assignment_id: i64,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub workflow_state: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    /// Score before any late policy deduction.
    #[serde(default)]
    pub entered_score: Option<f64>,
    #[serde(default)]
    pub entered_grade: Option<String>,
    #[serde(default)]
    pub points_deducted: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub excused: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub missing: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub late: bool,
    #[serde(default)]
    pub submission_type: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub media_comment: Option<MediaComment>,
    #[serde(default)]
    pub submission_history: Vec<Submission>,
    #[serde(default)]
    pub submission_comments: Vec<SubmissionComment>,
    #[serde(default)]
    pub rubric_assessment: HashMap<String, RubricCriterionAssessment>,
    #[serde(default, deserialize_with = "null_default")]
    pub grade_matches_current_submission: bool,
}

impl Submission {
    /// Typed view of the submission type tag, when present and known.
    pub fn type_tag(&self) -> Option<SubmissionType> {
        self.submission_type
            .as_deref()
            .and_then(SubmissionType::from_api_string)
    }

    /// A submission counts as graded once a grade is posted, or when the
    /// student is excused from the assignment.
    pub fn is_graded(&self) -> bool {
        self.excused
            || (self.grade.as_deref().is_some_and(|g| !g.trim().is_empty())
                && self.workflow_state.as_deref() == Some("graded"))
    }
}
