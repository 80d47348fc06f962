// SPDX-License-Identifier: MPL-2.0
//! Derives the renderable view state for the submission details screen.
//!
//! `present` is a pure read of [`State`]: loading wins, then either fetch
//! failure, then the loaded shape with submission versions sorted newest
//! first and the drawer tabs filled in.

use crate::canvas::models::{Attachment, Submission, SubmissionComment};
use crate::error::LoadFailure;
use crate::i18n::fluent::I18n;
use crate::util::month_day_at_time;
use chrono::Local;
use std::cmp::Reverse;
use std::fmt;

use super::component::State;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    /// Either required fetch failed. `failure` is absent when no data has
    /// arrived at all.
    Error { failure: Option<LoadFailure> },
    Loaded(LoadedViewState),
}

/// One row of the attempt selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionVersion {
    pub attempt: i64,
    pub label: String,
}

impl fmt::Display for SubmissionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabData {
    Comments {
        name: String,
        comments: Vec<SubmissionComment>,
    },
    Files {
        name: String,
        files: Vec<Attachment>,
        selected_file_id: i64,
    },
    Rubric {
        name: String,
    },
}

impl TabData {
    pub fn name(&self) -> &str {
        match self {
            Self::Comments { name, .. } | Self::Files { name, .. } | Self::Rubric { name } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedViewState {
    pub assignment_name: String,
    /// Header subtitle; absent when the course fetch failed or the course
    /// has no name.
    pub course_name: Option<String>,
    pub show_version_picker: bool,
    pub selected_version_index: usize,
    pub versions: Vec<SubmissionVersion>,
    pub tabs: Vec<TabData>,
}

pub fn present(state: &State, i18n: &I18n) -> ViewState {
    if state.is_loading {
        return ViewState::Loading;
    }

    let (assignment, root) = match (&state.assignment, &state.submission) {
        (Some(Ok(assignment)), Some(Ok(root))) => (assignment, root),
        (assignment, submission) => {
            let failure = assignment
                .as_ref()
                .and_then(|result| result.as_ref().err())
                .or_else(|| submission.as_ref().and_then(|result| result.as_ref().err()))
                .cloned();
            return ViewState::Error { failure };
        }
    };

    let at_word = i18n.tr("date-at");

    let mut ordered: Vec<&Submission> = root.submission_history.iter().collect();
    ordered.sort_by_key(|submission| Reverse(submission.submitted_at));

    let selected = ordered
        .iter()
        .find(|submission| Some(submission.attempt) == state.selected_attempt)
        .copied()
        .or_else(|| ordered.first().copied())
        .unwrap_or(root);

    let versions: Vec<SubmissionVersion> = ordered
        .iter()
        .map(|submission| SubmissionVersion {
            attempt: submission.attempt,
            label: submission
                .submitted_at
                .map(|date| month_day_at_time(&date.with_timezone(&Local), &at_word))
                .unwrap_or_default(),
        })
        .collect();

    let selected_version_index = versions
        .iter()
        .position(|version| Some(version.attempt) == state.selected_attempt)
        .unwrap_or(0);

    let mut comments = root.submission_comments.clone();
    comments.sort_by_key(|comment| Reverse(comment.created_at));

    let files = selected.attachments.clone();
    let files_name = if files.is_empty() {
        i18n.tr("tab-files")
    } else {
        let count = files.len().to_string();
        i18n.tr_with_args("tab-files-count", &[("count", &count)])
    };
    let selected_file_id = files.first().map(|file| file.id).unwrap_or(0);

    let tabs = vec![
        TabData::Comments {
            name: i18n.tr("tab-comments"),
            comments,
        },
        TabData::Files {
            name: files_name,
            files,
            selected_file_id,
        },
        TabData::Rubric {
            name: i18n.tr("tab-rubric"),
        },
    ];

    ViewState::Loaded(LoadedViewState {
        assignment_name: assignment.name.clone(),
        course_name: state.course_name().map(str::to_string),
        show_version_picker: versions.len() > 1,
        selected_version_index,
        versions,
        tabs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::client::LoadedDetails;
    use crate::canvas::models::{Assignment, Course};
    use crate::config::Config;
    use crate::ui::submission_details::component::Message;
    use chrono::{DateTime, TimeZone, Utc};

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), None, &Config::default())
    }

    fn state() -> State {
        State::new("https://school.instructure.com".to_string(), 99, 1234)
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, day, 15, 30, 0).unwrap()
    }

    fn attempt(number: i64, submitted: Option<DateTime<Utc>>) -> Submission {
        Submission {
            id: 30,
            attempt: number,
            assignment_id: 1234,
            submitted_at: submitted,
            submission_type: Some("online_text_entry".to_string()),
            body: Some(format!("attempt {number}")),
            ..Submission::default()
        }
    }

    fn loaded_state(history: Vec<Submission>) -> State {
        let root = Submission {
            submission_history: history.clone(),
            ..history.last().cloned().unwrap_or_default()
        };
        let mut state = state();
        state.handle_message(Message::Loaded(LoadedDetails {
            course: Ok(Course {
                id: 99,
                name: "Biology 101".to_string(),
            }),
            assignment: Ok(Assignment {
                id: 1234,
                name: "Essay One".to_string(),
                ..Assignment::default()
            }),
            submission: Ok(root),
            arc_enabled: false,
        }));
        state
    }

    #[test]
    fn loading_state_wins() {
        let mut state = state();
        state.init();
        assert_eq!(present(&state, &i18n()), ViewState::Loading);
    }

    #[test]
    fn assignment_failure_presents_error() {
        let mut state = state();
        state.handle_message(Message::Loaded(LoadedDetails {
            course: Err(LoadFailure::NotFound),
            assignment: Err(LoadFailure::Unauthorized),
            submission: Ok(Submission::default()),
            arc_enabled: false,
        }));
        assert_eq!(
            present(&state, &i18n()),
            ViewState::Error {
                failure: Some(LoadFailure::Unauthorized)
            }
        );
    }

    #[test]
    fn submission_failure_presents_error() {
        let mut state = state();
        state.handle_message(Message::Loaded(LoadedDetails {
            course: Ok(Course::default()),
            assignment: Ok(Assignment::default()),
            submission: Err(LoadFailure::NotFound),
            arc_enabled: false,
        }));
        assert_eq!(
            present(&state, &i18n()),
            ViewState::Error {
                failure: Some(LoadFailure::NotFound)
            }
        );
    }

    #[test]
    fn assignment_failure_takes_precedence() {
        let mut state = state();
        state.handle_message(Message::Loaded(LoadedDetails {
            course: Ok(Course::default()),
            assignment: Err(LoadFailure::Status(500)),
            submission: Err(LoadFailure::NotFound),
            arc_enabled: false,
        }));
        assert_eq!(
            present(&state, &i18n()),
            ViewState::Error {
                failure: Some(LoadFailure::Status(500))
            }
        );
    }

    #[test]
    fn versions_sort_newest_first_with_undated_last() {
        let state = loaded_state(vec![
            attempt(1, Some(at(1))),
            attempt(3, None),
            attempt(2, Some(at(5))),
        ]);

        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        let order: Vec<i64> = view.versions.iter().map(|v| v.attempt).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(view.versions[2].label, "");
        assert!(view.show_version_picker);
    }

    #[test]
    fn version_labels_use_month_day_at_time() {
        let state = loaded_state(vec![attempt(1, Some(at(5)))]);
        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        let expected = month_day_at_time(&at(5).with_timezone(&Local), &i18n().tr("date-at"));
        assert_eq!(view.versions[0].label, expected);
    }

    #[test]
    fn selected_version_index_follows_selection() {
        let mut state = loaded_state(vec![attempt(1, Some(at(1))), attempt(2, Some(at(5)))]);
        state.handle_message(Message::AttemptSelected(1));

        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        // Attempt 2 sorts first, so attempt 1 sits at index 1.
        assert_eq!(view.selected_version_index, 1);
    }

    #[test]
    fn unknown_selection_falls_back_to_index_zero() {
        let mut state = loaded_state(vec![attempt(1, Some(at(1))), attempt(2, Some(at(5)))]);
        state.handle_message(Message::AttemptSelected(9));

        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        assert_eq!(view.selected_version_index, 0);
    }

    #[test]
    fn single_version_hides_the_picker() {
        let state = loaded_state(vec![attempt(1, Some(at(1)))]);
        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        assert!(!view.show_version_picker);
    }

    #[test]
    fn files_tab_counts_selected_attempt_files() {
        let with_files = Submission {
            attachments: vec![
                Attachment {
                    id: 71,
                    ..Attachment::default()
                },
                Attachment {
                    id: 72,
                    ..Attachment::default()
                },
            ],
            ..attempt(1, Some(at(1)))
        };
        let mut state = loaded_state(vec![with_files, attempt(2, Some(at(5)))]);

        let i18n = i18n();
        let ViewState::Loaded(view) = present(&state, &i18n) else {
            panic!("expected loaded state");
        };
        // Attempt 2 (no files) is selected after load.
        let TabData::Files {
            name,
            files,
            selected_file_id,
        } = &view.tabs[1]
        else {
            panic!("expected files tab");
        };
        assert_eq!(name, &i18n.tr("tab-files"));
        assert!(files.is_empty());
        assert_eq!(*selected_file_id, 0);

        state.handle_message(Message::AttemptSelected(1));
        let ViewState::Loaded(view) = present(&state, &i18n) else {
            panic!("expected loaded state");
        };
        let TabData::Files {
            name,
            files,
            selected_file_id,
        } = &view.tabs[1]
        else {
            panic!("expected files tab");
        };
        assert_eq!(name, &i18n.tr_with_args("tab-files-count", &[("count", "2")]));
        assert_eq!(files.len(), 2);
        assert_eq!(*selected_file_id, 71);
    }

    #[test]
    fn comments_sort_newest_first() {
        let mut history = vec![attempt(1, Some(at(1)))];
        history[0].submission_comments = vec![
            SubmissionComment {
                id: 1,
                comment: Some("older".to_string()),
                created_at: Some(at(2)),
                ..SubmissionComment::default()
            },
            SubmissionComment {
                id: 2,
                comment: Some("newer".to_string()),
                created_at: Some(at(9)),
                ..SubmissionComment::default()
            },
        ];
        let state = loaded_state(history);

        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        let TabData::Comments { comments, .. } = &view.tabs[0] else {
            panic!("expected comments tab");
        };
        assert_eq!(comments[0].comment.as_deref(), Some("newer"));
        assert_eq!(comments[1].comment.as_deref(), Some("older"));
    }

    #[test]
    fn assignment_name_reaches_the_header() {
        let state = loaded_state(vec![attempt(1, Some(at(1)))]);
        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        assert_eq!(view.assignment_name, "Essay One");
    }

    #[test]
    fn course_subtitle_follows_the_course_fetch() {
        let mut state = loaded_state(vec![attempt(1, Some(at(1)))]);
        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        assert_eq!(view.course_name.as_deref(), Some("Biology 101"));

        state.course = None;
        let ViewState::Loaded(view) = present(&state, &i18n()) else {
            panic!("expected loaded state");
        };
        assert_eq!(view.course_name, None);
    }
}
