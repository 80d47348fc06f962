// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the load and classification pipeline.
//!
//! These drive the same path the running app takes: a service answers the
//! load, the screen state folds the result into an effect, and the
//! presenters shape what the view renders. No real network traffic.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use submission_lens::canvas::client::{
    load_details, DataResult, LoadedDetails, ServiceFuture, SubmissionDetailsService,
};
use submission_lens::canvas::models::{
    Assignment, Attachment, Course, RubricCriterion, RubricCriterionAssessment, RubricRating,
    Submission, SubmissionComment,
};
use submission_lens::config::Config;
use submission_lens::error::LoadFailure;
use submission_lens::i18n::fluent::I18n;
use submission_lens::ui::submission_details::component::{Effect, Message, State};
use submission_lens::ui::submission_details::content::SubmissionContent;
use submission_lens::ui::submission_details::presenter::{self, TabData, ViewState};
use submission_lens::ui::submission_details::rubric;
use submission_lens::ui::submission_details::rubric::grade_cell::GradeCellState;
use submission_lens::ui::submission_details::rubric::presenter::RubricListItem;

// =============================================================================
// Fixtures
// =============================================================================

fn i18n() -> I18n {
    I18n::new(Some("en-US".to_string()), None, &Config::default())
}

fn essay_assignment() -> Assignment {
    Assignment {
        id: 1234,
        course_id: 99,
        name: "Essay One".to_string(),
        points_possible: 10.0,
        submission_types_raw: vec![
            "online_text_entry".to_string(),
            "online_upload".to_string(),
        ],
        use_rubric_for_grading: true,
        rubric: vec![RubricCriterion {
            id: Some("crit_1".to_string()),
            description: Some("Spelling".to_string()),
            long_description: Some("Words are spelled correctly.".to_string()),
            points: 5.0,
            ratings: vec![
                RubricRating {
                    id: Some("rate_full".to_string()),
                    description: Some("Flawless".to_string()),
                    points: 5.0,
                    ..RubricRating::default()
                },
                RubricRating {
                    id: Some("rate_half".to_string()),
                    description: Some("Some slips".to_string()),
                    points: 2.5,
                    ..RubricRating::default()
                },
            ],
            ..RubricCriterion::default()
        }],
        ..Assignment::default()
    }
}

fn attempt(number: i64, day: u32) -> Submission {
    Submission {
        id: 30,
        attempt: number,
        assignment_id: 1234,
        submitted_at: Some(Utc.with_ymd_and_hms(2023, 10, day, 8, 0, 0).unwrap()),
        submission_type: Some("online_text_entry".to_string()),
        body: Some(format!("attempt {number} body")),
        ..Submission::default()
    }
}

fn graded_submission() -> Submission {
    let latest = Submission {
        attachments: vec![
            Attachment {
                id: 71,
                content_type: Some("application/pdf".to_string()),
                display_name: Some("essay.pdf".to_string()),
                url: Some("https://files.example.com/essay.pdf".to_string()),
                size: 52_000,
                ..Attachment::default()
            },
            Attachment {
                id: 72,
                content_type: Some("image/png".to_string()),
                display_name: Some("diagram.png".to_string()),
                url: Some("https://files.example.com/diagram.png".to_string()),
                size: 9_000,
                ..Attachment::default()
            },
        ],
        ..attempt(2, 5)
    };

    Submission {
        workflow_state: Some("graded".to_string()),
        grade: Some("8".to_string()),
        score: Some(8.0),
        submission_history: vec![attempt(1, 2), latest.clone()],
        submission_comments: vec![SubmissionComment {
            id: 1,
            author_name: Some("Doe Teacher".to_string()),
            comment: Some("Solid work.".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2023, 10, 6, 9, 0, 0).unwrap()),
        }],
        rubric_assessment: HashMap::from([(
            "crit_1".to_string(),
            RubricCriterionAssessment {
                rating_id: Some("rate_full".to_string()),
                points: Some(5.0),
                comments: None,
            },
        )]),
        ..latest
    }
}

/// Canned service answering with a fixed assignment and submission pair.
struct StubService {
    assignment: DataResult<Assignment>,
    submission: DataResult<Submission>,
    arc_enabled: bool,
}

impl StubService {
    fn graded_essay() -> Self {
        Self {
            assignment: Ok(essay_assignment()),
            submission: Ok(graded_submission()),
            arc_enabled: false,
        }
    }
}

impl SubmissionDetailsService for StubService {
    fn course(&self, course_id: i64) -> ServiceFuture<DataResult<Course>> {
        Box::pin(async move {
            Ok(Course {
                id: course_id,
                name: "Biology 101".to_string(),
            })
        })
    }

    fn assignment(
        &self,
        _course_id: i64,
        _assignment_id: i64,
    ) -> ServiceFuture<DataResult<Assignment>> {
        let result = self.assignment.clone();
        Box::pin(async move { result })
    }

    fn submission(
        &self,
        _course_id: i64,
        _assignment_id: i64,
    ) -> ServiceFuture<DataResult<Submission>> {
        let result = self.submission.clone();
        Box::pin(async move { result })
    }

    fn arc_enabled(&self, _course_id: i64) -> ServiceFuture<bool> {
        let enabled = self.arc_enabled;
        Box::pin(async move { enabled })
    }

    fn fetch_bytes(&self, _url: String) -> ServiceFuture<DataResult<Vec<u8>>> {
        Box::pin(async move { Ok(vec![0x89, 0x50, 0x4e, 0x47]) })
    }
}

fn screen_state() -> State {
    State::new("https://school.instructure.com".to_string(), 99, 1234)
}

// =============================================================================
// Load round-trips
// =============================================================================

#[tokio::test]
async fn full_load_round_trip_reaches_the_latest_attempt() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService::graded_essay());
    let details = load_details(service, 99, 1234).await;

    let mut state = screen_state();
    state.init();
    let effect = state.handle_message(Message::Loaded(details));

    assert_eq!(
        effect,
        Effect::ShowContent(SubmissionContent::Text {
            body: "attempt 2 body".to_string()
        })
    );
    assert_eq!(state.selected_attempt, Some(2));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn loaded_data_presents_versions_tabs_and_files() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService::graded_essay());
    let details = load_details(service, 99, 1234).await;

    let mut state = screen_state();
    state.init();
    state.handle_message(Message::Loaded(details));

    let ViewState::Loaded(view) = presenter::present(&state, &i18n()) else {
        panic!("expected the loaded view state");
    };

    assert_eq!(view.assignment_name, "Essay One");
    assert_eq!(view.course_name.as_deref(), Some("Biology 101"));
    assert!(view.show_version_picker);
    assert_eq!(view.selected_version_index, 0);

    // Newest attempt first in the version selector
    let attempts: Vec<i64> = view.versions.iter().map(|version| version.attempt).collect();
    assert_eq!(attempts, vec![2, 1]);

    assert_eq!(view.tabs.len(), 3);
    match &view.tabs[0] {
        TabData::Comments { comments, .. } => {
            assert_eq!(comments.len(), 1);
            assert_eq!(comments[0].author_name.as_deref(), Some("Doe Teacher"));
        }
        other => panic!("expected the comments tab first, got {other:?}"),
    }
    match &view.tabs[1] {
        TabData::Files {
            name,
            files,
            selected_file_id,
        } => {
            assert_eq!(files.len(), 2);
            assert_eq!(*selected_file_id, 71);
            assert!(name.contains('2'), "files tab should show the count: {name}");
        }
        other => panic!("expected the files tab second, got {other:?}"),
    }
}

#[tokio::test]
async fn partial_failure_surfaces_as_an_error_view() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService {
        assignment: Err(LoadFailure::Unauthorized),
        submission: Ok(graded_submission()),
        arc_enabled: false,
    });
    let details = load_details(service, 99, 1234).await;

    let mut state = screen_state();
    state.init();
    let effect = state.handle_message(Message::Loaded(details));

    assert_eq!(effect, Effect::None);
    assert_eq!(
        presenter::present(&state, &i18n()),
        ViewState::Error {
            failure: Some(LoadFailure::Unauthorized)
        }
    );
}

// =============================================================================
// Selection flows
// =============================================================================

#[tokio::test]
async fn attachment_selection_switches_the_content_area() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService::graded_essay());
    let details = load_details(service, 99, 1234).await;

    let mut state = screen_state();
    state.handle_message(Message::Loaded(details));

    let pdf = graded_submission().attachments[0].clone();
    let effect = state.handle_message(Message::AttachmentSelected(pdf));

    assert_eq!(state.selected_attachment_id, Some(71));
    assert_eq!(
        effect,
        Effect::ShowContent(SubmissionContent::Pdf {
            url: "https://files.example.com/essay.pdf".to_string()
        })
    );

    let image = graded_submission().attachments[1].clone();
    let effect = state.handle_message(Message::AttachmentSelected(image));
    assert_eq!(
        effect,
        Effect::ShowContent(SubmissionContent::Image {
            url: "https://files.example.com/diagram.png".to_string(),
            content_type: "image/png".to_string(),
        })
    );
}

#[tokio::test]
async fn switching_to_an_older_attempt_reclassifies_its_body() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService::graded_essay());
    let details = load_details(service, 99, 1234).await;

    let mut state = screen_state();
    state.handle_message(Message::Loaded(details));

    let effect = state.handle_message(Message::AttemptSelected(1));
    assert_eq!(
        effect,
        Effect::ShowContent(SubmissionContent::Text {
            body: "attempt 1 body".to_string()
        })
    );

    let ViewState::Loaded(view) = presenter::present(&state, &i18n()) else {
        panic!("expected the loaded view state");
    };
    assert_eq!(view.selected_version_index, 1);
}

#[test]
fn quiz_assignment_links_into_the_web_ui() {
    let mut state = screen_state();
    let effect = state.handle_message(Message::Loaded(LoadedDetails {
        course: Ok(Course::default()),
        assignment: Ok(Assignment {
            id: 1234,
            course_id: 99,
            quiz_id: 987,
            submission_types_raw: vec!["online_quiz".to_string()],
            ..Assignment::default()
        }),
        submission: Ok(Submission {
            attempt: 3,
            submission_type: Some("online_quiz".to_string()),
            ..Submission::default()
        }),
        arc_enabled: false,
    }));

    assert_eq!(
        effect,
        Effect::ShowContent(SubmissionContent::Quiz {
            url: "https://school.instructure.com/courses/99/quizzes/987/history?version=3&headless=1"
                .to_string()
        })
    );
}

// =============================================================================
// Rubric pipeline
// =============================================================================

#[tokio::test]
async fn rubric_pipeline_builds_grade_and_criterion_rows() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService::graded_essay());
    let details = load_details(service, 99, 1234).await;

    let (Ok(assignment), Ok(submission)) = (details.assignment, details.submission) else {
        panic!("fixture load should succeed");
    };
    let rubric_state = rubric::component::State::new(assignment, submission);
    let items = rubric::presenter::present(&rubric_state, &i18n());

    assert_eq!(items.len(), 2);

    let RubricListItem::Grade(GradeCellState::Graded(grade)) = &items[0] else {
        panic!("expected the grade card first, got {:?}", items[0]);
    };
    assert_eq!(grade.score, "8");
    assert!(grade.out_of.contains("10"));

    let RubricListItem::Criterion(row) = &items[1] else {
        panic!("expected the criterion row second, got {:?}", items[1]);
    };
    assert_eq!(row.criterion_id, "crit_1");
    assert_eq!(row.description, "Spelling");
    assert!(row.show_long_description_button);
    // Rating pills run lowest to highest; the grader picked the 5-point one.
    let picked: Vec<(&str, bool)> = row
        .ratings
        .iter()
        .map(|rating| (rating.points.as_str(), rating.is_selected))
        .collect();
    assert_eq!(picked, vec![("2.5", false), ("5", true)]);
}

#[tokio::test]
async fn long_description_effect_round_trips_through_the_component() {
    let service: Arc<dyn SubmissionDetailsService> = Arc::new(StubService::graded_essay());
    let details = load_details(service, 99, 1234).await;

    let (Ok(assignment), Ok(submission)) = (details.assignment, details.submission) else {
        panic!("fixture load should succeed");
    };
    let mut rubric_state = rubric::component::State::new(assignment, submission);

    let effect = rubric_state.handle_message(rubric::component::Message::LongDescriptionClicked(
        "crit_1".to_string(),
    ));
    let rubric::component::Effect::ShowLongDescription {
        description,
        long_description,
    } = effect
    else {
        panic!("expected the show long description effect");
    };
    rubric_state.show_long_description(description, long_description);

    let overlay = rubric_state
        .shown_long_description
        .as_ref()
        .expect("overlay should be open");
    assert_eq!(overlay.description, "Spelling");
    assert_eq!(overlay.long_description, "Words are spelled correctly.");
}
