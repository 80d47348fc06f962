// SPDX-License-Identifier: MPL-2.0
//! Builds the rubric list from the assignment's criteria and the grader's
//! assessment on the submission.

use crate::canvas::models::{RubricCriterion, RubricRating};
use crate::i18n::fluent::I18n;
use crate::util::format_points;

use super::component::State;
use super::grade_cell::{grade_cell_state, GradeCellState};

/// Rating id assigned to a grader's score that matches no predefined rating.
const CUSTOM_RATING_ID: &str = "_custom_rating_id_";

#[derive(Debug, Clone, PartialEq)]
pub enum RubricListItem {
    Empty,
    Grade(GradeCellState),
    Criterion(CriterionRow),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CriterionRow {
    pub criterion_id: String,
    pub description: String,
    pub show_long_description_button: bool,
    pub rating_description: Option<String>,
    pub ratings: Vec<RatingRow>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub points: String,
    pub description: Option<String>,
    pub is_selected: bool,
    pub use_small_text: bool,
}

pub fn present(state: &State, i18n: &I18n) -> Vec<RubricListItem> {
    let rubric = &state.assignment.rubric;
    if rubric.is_empty() {
        return vec![RubricListItem::Empty];
    }

    let mut items = Vec::new();
    if state.submission.is_graded() && state.assignment.use_rubric_for_grading {
        items.push(RubricListItem::Grade(grade_cell_state(
            &state.assignment,
            &state.submission,
            i18n,
        )));
    }

    items.extend(
        rubric
            .iter()
            .map(|criterion| RubricListItem::Criterion(map_criterion(state, criterion, i18n))),
    );

    items
}

fn map_criterion(state: &State, criterion: &RubricCriterion, i18n: &I18n) -> CriterionRow {
    let mut assessment = criterion
        .id
        .as_ref()
        .and_then(|id| state.submission.rubric_assessment.get(id))
        .cloned();
    let mut ratings = criterion.ratings.clone();

    // A custom score has no rating id. Assign it one and add a matching
    // rating so it sorts into position with the predefined ratings.
    if let Some(entry) = assessment.as_mut() {
        if entry.rating_id.is_none() {
            entry.rating_id = Some(CUSTOM_RATING_ID.to_string());
            ratings.push(RubricRating {
                id: Some(CUSTOM_RATING_ID.to_string()),
                description: Some(i18n.tr("rubric-custom-score")),
                long_description: None,
                points: entry.points.unwrap_or_default(),
            });
        }
    }
    ratings.sort_by(|a, b| a.points.total_cmp(&b.points));

    let assessed_rating_id = assessment.as_ref().and_then(|entry| entry.rating_id.clone());
    let selected = assessed_rating_id
        .as_ref()
        .and_then(|id| ratings.iter().find(|rating| rating.id.as_ref() == Some(id)))
        .cloned();
    let mut rating_description = selected.as_ref().and_then(|rating| rating.description.clone());

    let hide_points = state.assignment.hide_rubric_points();
    let free_form = state.assignment.free_form_criterion_comments;

    // Free-form assessments show only the assessment comment and, unless
    // points are hidden, the single matching rating.
    if free_form {
        ratings.retain(|rating| {
            !hide_points && rating.id.is_some() && rating.id == assessed_rating_id
        });
        for rating in &mut ratings {
            rating.description = None;
        }
        rating_description = None;
    }

    let mut rows: Vec<RatingRow> = ratings
        .iter()
        .map(|rating| RatingRow {
            points: format_points(rating.points),
            description: rating.description.clone(),
            is_selected: selected
                .as_ref()
                .is_some_and(|chosen| chosen.id == rating.id),
            use_small_text: false,
        })
        .collect();

    if hide_points {
        // Without points the rating description carries the row.
        rating_description = None;
        for row in &mut rows {
            row.points = row.description.take().unwrap_or_default();
            row.use_small_text = true;
        }
    } else if free_form {
        let possible = format_points(criterion.points);
        for row in &mut rows {
            let total = i18n.tr_with_args(
                "rubric-ranged-total",
                &[("points", &row.points), ("possible", &possible)],
            );
            row.points = total;
        }
    }

    CriterionRow {
        criterion_id: criterion.id.clone().unwrap_or_default(),
        description: criterion.description.clone().unwrap_or_default(),
        show_long_description_button: criterion
            .long_description
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty()),
        rating_description: rating_description.filter(|text| !text.trim().is_empty()),
        ratings: rows,
        comment: assessment
            .and_then(|entry| entry.comments)
            .filter(|text| !text.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::models::{
        Assignment, RubricCriterionAssessment, RubricSettings, Submission,
    };
    use crate::config::Config;
    use std::collections::HashMap;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), None, &Config::default())
    }

    fn rating(id: &str, description: &str, points: f64) -> RubricRating {
        RubricRating {
            id: Some(id.to_string()),
            description: Some(description.to_string()),
            long_description: None,
            points,
        }
    }

    fn criterion() -> RubricCriterion {
        RubricCriterion {
            id: Some("crit_1".to_string()),
            description: Some("Grammar".to_string()),
            long_description: Some("Sentences parse.".to_string()),
            points: 10.0,
            ratings: vec![
                rating("r_full", "Full marks", 10.0),
                rating("r_none", "No marks", 0.0),
                rating("r_half", "Half marks", 5.0),
            ],
            criterion_use_range: false,
        }
    }

    fn assessed(rating_id: Option<&str>, points: Option<f64>, comments: Option<&str>) -> Submission {
        let mut rubric_assessment = HashMap::new();
        rubric_assessment.insert(
            "crit_1".to_string(),
            RubricCriterionAssessment {
                rating_id: rating_id.map(str::to_string),
                points,
                comments: comments.map(str::to_string),
            },
        );
        Submission {
            rubric_assessment,
            ..Submission::default()
        }
    }

    fn expect_criterion(items: &[RubricListItem]) -> &CriterionRow {
        match items.last() {
            Some(RubricListItem::Criterion(row)) => row,
            other => panic!("expected criterion item, got {other:?}"),
        }
    }

    #[test]
    fn empty_rubric_yields_single_empty_item() {
        let state = State::new(Assignment::default(), Submission::default());
        assert_eq!(present(&state, &i18n()), vec![RubricListItem::Empty]);
    }

    #[test]
    fn ratings_sort_ascending_by_points() {
        let assignment = Assignment {
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let state = State::new(assignment, Submission::default());

        let items = present(&state, &i18n());
        let row = expect_criterion(&items);
        let points: Vec<&str> = row.ratings.iter().map(|r| r.points.as_str()).collect();
        assert_eq!(points, vec!["0", "5", "10"]);
        assert!(row.ratings.iter().all(|r| !r.is_selected));
        assert!(row.show_long_description_button);
        assert_eq!(row.rating_description, None);
    }

    #[test]
    fn assessed_rating_is_selected_and_described() {
        let assignment = Assignment {
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let submission = assessed(Some("r_half"), Some(5.0), Some("Getting there"));
        let state = State::new(assignment, submission);

        let items = present(&state, &i18n());
        let row = expect_criterion(&items);
        let selected: Vec<bool> = row.ratings.iter().map(|r| r.is_selected).collect();
        assert_eq!(selected, vec![false, true, false]);
        assert_eq!(row.rating_description.as_deref(), Some("Half marks"));
        assert_eq!(row.comment.as_deref(), Some("Getting there"));
    }

    #[test]
    fn custom_score_synthesizes_a_rating_in_point_order() {
        let assignment = Assignment {
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let submission = assessed(None, Some(7.0), None);
        let state = State::new(assignment, submission);

        let i18n = i18n();
        let items = present(&state, &i18n);
        let row = expect_criterion(&items);
        let points: Vec<&str> = row.ratings.iter().map(|r| r.points.as_str()).collect();
        assert_eq!(points, vec!["0", "5", "7", "10"]);
        assert!(row.ratings[2].is_selected);
        assert_eq!(
            row.rating_description.as_deref(),
            Some(i18n.tr("rubric-custom-score").as_str())
        );
    }

    #[test]
    fn free_form_keeps_only_the_assessed_rating_with_ranged_total() {
        let assignment = Assignment {
            free_form_criterion_comments: true,
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let submission = assessed(None, Some(7.0), Some("Nice work"));
        let state = State::new(assignment, submission);

        let i18n = i18n();
        let items = present(&state, &i18n);
        let row = expect_criterion(&items);
        assert_eq!(row.ratings.len(), 1);
        assert_eq!(
            row.ratings[0].points,
            i18n.tr_with_args("rubric-ranged-total", &[("points", "7"), ("possible", "10")])
        );
        assert_eq!(row.ratings[0].description, None);
        assert!(row.ratings[0].is_selected);
        assert_eq!(row.rating_description, None);
        assert_eq!(row.comment.as_deref(), Some("Nice work"));
    }

    #[test]
    fn free_form_with_hidden_points_drops_all_ratings() {
        let assignment = Assignment {
            free_form_criterion_comments: true,
            rubric_settings: Some(RubricSettings {
                hide_points: true,
                ..RubricSettings::default()
            }),
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let submission = assessed(Some("r_half"), Some(5.0), Some("Only the comment shows"));
        let state = State::new(assignment, submission);

        let items = present(&state, &i18n());
        let row = expect_criterion(&items);
        assert!(row.ratings.is_empty());
        assert_eq!(row.comment.as_deref(), Some("Only the comment shows"));
    }

    #[test]
    fn hidden_points_show_descriptions_in_small_text() {
        let assignment = Assignment {
            rubric_settings: Some(RubricSettings {
                hide_points: true,
                ..RubricSettings::default()
            }),
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let submission = assessed(Some("r_full"), Some(10.0), None);
        let state = State::new(assignment, submission);

        let items = present(&state, &i18n());
        let row = expect_criterion(&items);
        let labels: Vec<&str> = row.ratings.iter().map(|r| r.points.as_str()).collect();
        assert_eq!(labels, vec!["No marks", "Half marks", "Full marks"]);
        assert!(row.ratings.iter().all(|r| r.description.is_none()));
        assert!(row.ratings.iter().all(|r| r.use_small_text));
        assert!(row.ratings[2].is_selected);
        assert_eq!(row.rating_description, None);
    }

    #[test]
    fn grade_item_requires_grading_by_rubric() {
        let graded = Submission {
            workflow_state: Some("graded".to_string()),
            grade: Some("8".to_string()),
            score: Some(8.0),
            ..Submission::default()
        };

        let without_flag = Assignment {
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let state = State::new(without_flag, graded.clone());
        let items = present(&state, &i18n());
        assert!(matches!(items[0], RubricListItem::Criterion(_)));

        let with_flag = Assignment {
            use_rubric_for_grading: true,
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let state = State::new(with_flag, graded);
        let items = present(&state, &i18n());
        assert!(matches!(items[0], RubricListItem::Grade(_)));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn ungraded_submission_never_gets_a_grade_item() {
        let assignment = Assignment {
            use_rubric_for_grading: true,
            rubric: vec![criterion()],
            ..Assignment::default()
        };
        let state = State::new(assignment, Submission::default());
        let items = present(&state, &i18n());
        assert!(matches!(items[0], RubricListItem::Criterion(_)));
    }

    #[test]
    fn blank_comment_and_missing_id_degrade_quietly() {
        let mut bare = criterion();
        bare.id = None;
        bare.long_description = Some("   ".to_string());
        let assignment = Assignment {
            rubric: vec![bare],
            ..Assignment::default()
        };
        let submission = assessed(Some("r_half"), Some(5.0), Some("   "));
        let state = State::new(assignment, submission);

        let items = present(&state, &i18n());
        let row = expect_criterion(&items);
        // The assessment is keyed by criterion id, so a missing id means no match.
        assert_eq!(row.criterion_id, "");
        assert!(!row.show_long_description_button);
        assert_eq!(row.comment, None);
        assert!(row.ratings.iter().all(|r| !r.is_selected));
    }
}
